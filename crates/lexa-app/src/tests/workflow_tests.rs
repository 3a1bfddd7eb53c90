use lexa_core::workflow::SearchState;
use lexa_dict::LookupError;
use lexa_store::{PrefKey, PreferenceStore};
use lexa_types::{FontChoice, LookupView, PhoneticEntry, Theme};

use super::fakes::{FakeSink, cat_entry, harness};
use crate::ui::TerminalSurface;

#[tokio::test]
async fn blank_input_shows_error_without_network_call() {
    for input in ["", "   ", " \n\t "] {
        let mut h = harness(vec![]);
        h.workflow.submit(input).await.unwrap();

        assert_eq!(h.workflow.state(), SearchState::EmptyInput);
        assert_eq!(h.log.lookup_count(), 0, "input {input:?} hit the network");
        assert_eq!(h.log.entries(), vec!["empty_input:true", "clear"]);
    }
}

#[tokio::test]
async fn indicator_clears_before_the_request_goes_out() {
    let mut h = harness(vec![Ok(vec![cat_entry()])]);
    h.workflow.submit("cat").await.unwrap();

    let entries = h.log.entries();
    assert_eq!(&entries[..3], ["empty_input:false", "clear", "lookup:cat"]);
}

#[tokio::test]
async fn successful_lookup_renders_and_persists() {
    let mut h = harness(vec![Ok(vec![cat_entry()])]);
    h.workflow.submit("cat").await.unwrap();

    assert_eq!(h.workflow.state(), SearchState::Rendered);
    assert_eq!(h.prefs.get(PrefKey::LastWord).as_deref(), Some("cat"));

    let views = h.views.lock().unwrap();
    let view = &views[0];
    assert_eq!(view.word, "cat");
    assert_eq!(view.phonetic, "/kæt/");
    assert_eq!(view.meanings.len(), 1);
    assert_eq!(view.meanings[0].part_of_speech, "noun");
    assert_eq!(view.meanings[0].definitions.len(), 1);
    assert_eq!(view.source_url.as_deref(), Some("https://example.com/cat"));
    // Empty audio field means no play control.
    assert_eq!(view.audio_url, None);
}

#[tokio::test]
async fn query_is_normalized_before_lookup_and_persist() {
    let mut h = harness(vec![Ok(vec![cat_entry()])]);
    h.workflow.submit("  cat \n").await.unwrap();

    assert!(h.log.entries().contains(&"lookup:cat".to_string()));
    assert_eq!(h.prefs.get(PrefKey::LastWord).as_deref(), Some("cat"));
}

#[tokio::test]
async fn failed_lookup_shows_panel_and_keeps_last_word() {
    let mut h = harness(vec![Err(LookupError::NotFound("zzzz".to_string()))]);
    h.prefs.set(PrefKey::LastWord, "cat");

    h.workflow.submit("zzzz").await.unwrap();

    assert_eq!(h.workflow.state(), SearchState::ApiError);
    assert_eq!(h.prefs.get(PrefKey::LastWord).as_deref(), Some("cat"));

    let entries = h.log.entries();
    assert_eq!(entries.last().map(String::as_str), Some("error"));
    assert_eq!(entries[entries.len() - 2], "clear");
}

#[tokio::test]
async fn all_failure_kinds_collapse_to_the_same_panel() {
    for err in [
        LookupError::NotFound("x".to_string()),
        LookupError::UnexpectedShape,
    ] {
        let mut h = harness(vec![Err(err)]);
        h.workflow.submit("x").await.unwrap();

        assert_eq!(h.workflow.state(), SearchState::ApiError);
        assert_eq!(h.log.entries().last().map(String::as_str), Some("error"));
    }
}

#[tokio::test]
async fn recovers_from_empty_input_on_next_submission() {
    let mut h = harness(vec![Ok(vec![cat_entry()])]);

    h.workflow.submit("").await.unwrap();
    assert_eq!(h.workflow.state(), SearchState::EmptyInput);

    h.workflow.submit("cat").await.unwrap();
    assert_eq!(h.workflow.state(), SearchState::Rendered);
}

#[tokio::test]
async fn play_control_uses_first_entry_with_audio() {
    let mut entry = cat_entry();
    entry.phonetics = vec![
        PhoneticEntry {
            text: Some("/kæt/".to_string()),
            audio: Some(String::new()),
        },
        PhoneticEntry {
            text: None,
            audio: None,
        },
        PhoneticEntry {
            text: None,
            audio: Some("https://audio.example/cat.mp3".to_string()),
        },
        PhoneticEntry {
            text: None,
            audio: Some("https://audio.example/later.mp3".to_string()),
        },
    ];

    let mut h = harness(vec![Ok(vec![entry])]);
    h.workflow.submit("cat").await.unwrap();

    let views = h.views.lock().unwrap();
    assert_eq!(
        views[0].audio_url.as_deref(),
        Some("https://audio.example/cat.mp3")
    );
}

#[test]
fn play_activation_starts_the_resolved_audio() {
    let mut surface = TerminalSurface::new(
        Theme::Light,
        FontChoice {
            name: "Sans Serif".to_string(),
            family: "sans-serif".to_string(),
        },
        false,
    );

    surface.show_result(LookupView {
        word: "cat".to_string(),
        phonetic: "/kæt/".to_string(),
        audio_url: Some("https://audio.example/cat.mp3".to_string()),
        source_url: None,
        meanings: vec![],
    });

    let sink = FakeSink::default();
    surface.play_audio(&sink);

    assert_eq!(
        sink.played.lock().unwrap().as_slice(),
        ["https://audio.example/cat.mp3"]
    );
}

#[test]
fn applied_font_becomes_the_current_label() {
    let mut surface = TerminalSurface::new(
        Theme::Light,
        FontChoice {
            name: "Sans Serif".to_string(),
            family: "sans-serif".to_string(),
        },
        false,
    );

    surface.apply_font(FontChoice {
        name: "Serif".to_string(),
        family: "serif".to_string(),
    });

    assert_eq!(surface.font().name, "Serif");
    assert_eq!(surface.font().family, "serif");
}

#[test]
fn applied_theme_becomes_current() {
    let mut surface = TerminalSurface::new(
        Theme::Light,
        FontChoice {
            name: "Sans Serif".to_string(),
            family: "sans-serif".to_string(),
        },
        false,
    );

    surface.apply_theme(Theme::Dark);
    assert_eq!(surface.theme(), Theme::Dark);
}

#[test]
fn play_is_inert_once_the_result_is_cleared() {
    let mut surface = TerminalSurface::new(
        Theme::Light,
        FontChoice {
            name: "Sans Serif".to_string(),
            family: "sans-serif".to_string(),
        },
        false,
    );

    surface.show_result(LookupView {
        word: "cat".to_string(),
        phonetic: String::new(),
        audio_url: Some("https://audio.example/cat.mp3".to_string()),
        source_url: None,
        meanings: vec![],
    });
    surface.clear_result();

    let sink = FakeSink::default();
    surface.play_audio(&sink);

    assert!(sink.played.lock().unwrap().is_empty());
}
