use std::sync::Arc;
use std::time::Duration;

use lexa_config::Config;
use lexa_core::workflow::SearchState;
use lexa_store::{MemoryPrefs, PrefKey, PreferenceStore};
use lexa_types::{AppEvent, Theme};
use tokio::time::timeout;

use super::fakes::{cat_entry, harness_with_prefs};
use crate::events::{font, restore_on_load, theme};
use crate::state::AppState;

fn test_state(prefs: Arc<MemoryPrefs>) -> Arc<AppState> {
    Arc::new(AppState::with_prefs(Config::default(), prefs))
}

#[tokio::test]
async fn theme_toggle_flips_and_persists() {
    let (tx, rx) = kanal::bounded_async::<AppEvent>(16);
    let prefs = Arc::new(MemoryPrefs::new());
    let state = test_state(prefs.clone());

    theme::handle_theme_toggle(&state, &tx).await.unwrap();

    let event = timeout(Duration::from_secs(2), rx.recv())
        .await
        .expect("no event")
        .unwrap();
    assert!(matches!(event, AppEvent::ApplyTheme(Theme::Dark)));
    assert_eq!(prefs.get(PrefKey::Theme).as_deref(), Some("dark"));

    theme::handle_theme_toggle(&state, &tx).await.unwrap();

    let event = timeout(Duration::from_secs(2), rx.recv())
        .await
        .expect("no event")
        .unwrap();
    assert!(matches!(event, AppEvent::ApplyTheme(Theme::Light)));
    assert_eq!(prefs.get(PrefKey::Theme).as_deref(), Some("light"));
}

#[tokio::test]
async fn font_selection_applies_and_persists() {
    let (tx, rx) = kanal::bounded_async::<AppEvent>(16);
    let prefs = Arc::new(MemoryPrefs::new());
    let state = test_state(prefs.clone());

    font::handle_font_select(&state, &tx, "Serif").await.unwrap();

    let event = timeout(Duration::from_secs(2), rx.recv())
        .await
        .expect("no event")
        .unwrap();
    match event {
        AppEvent::ApplyFont(font) => {
            assert_eq!(font.name, "Serif");
            assert_eq!(font.family, "serif");
        }
        other => panic!("unexpected event: {other:?}"),
    }

    assert_eq!(prefs.get(PrefKey::FontName).as_deref(), Some("Serif"));
    assert_eq!(prefs.get(PrefKey::FontFamily).as_deref(), Some("serif"));
}

#[tokio::test]
async fn unknown_font_relists_the_menu_without_persisting() {
    let (tx, rx) = kanal::bounded_async::<AppEvent>(16);
    let prefs = Arc::new(MemoryPrefs::new());
    let state = test_state(prefs.clone());

    font::handle_font_select(&state, &tx, "Comic Sans")
        .await
        .unwrap();

    let event = timeout(Duration::from_secs(2), rx.recv())
        .await
        .expect("no event")
        .unwrap();
    assert!(matches!(event, AppEvent::ShowFonts(fonts) if fonts.len() == 3));
    assert_eq!(prefs.get(PrefKey::FontName), None);
}

#[tokio::test]
async fn restore_reapplies_persisted_theme_and_font() {
    let (tx, rx) = kanal::bounded_async::<AppEvent>(16);
    let prefs = Arc::new(MemoryPrefs::new());
    prefs.set(PrefKey::Theme, "dark");
    prefs.set(PrefKey::FontName, "Serif");
    prefs.set(PrefKey::FontFamily, "serif");

    let state = test_state(prefs.clone());
    let mut h = harness_with_prefs(vec![], prefs.clone());

    restore_on_load(&state, &tx, &mut h.workflow).await.unwrap();

    let event = timeout(Duration::from_secs(2), rx.recv())
        .await
        .expect("no event")
        .unwrap();
    assert!(matches!(event, AppEvent::ApplyTheme(Theme::Dark)));

    let event = timeout(Duration::from_secs(2), rx.recv())
        .await
        .expect("no event")
        .unwrap();
    match event {
        AppEvent::ApplyFont(font) => {
            assert_eq!(font.name, "Serif");
            assert_eq!(font.family, "serif");
        }
        other => panic!("unexpected event: {other:?}"),
    }

    // No stored word, no network call.
    assert_eq!(h.log.lookup_count(), 0);
}

#[tokio::test]
async fn restore_skips_light_theme_and_partial_font_pairs() {
    let (tx, rx) = kanal::bounded_async::<AppEvent>(16);
    let prefs = Arc::new(MemoryPrefs::new());
    prefs.set(PrefKey::Theme, "light");
    // fontName without fontFamily is not restored.
    prefs.set(PrefKey::FontName, "Serif");

    let state = test_state(prefs.clone());
    let mut h = harness_with_prefs(vec![], prefs.clone());

    restore_on_load(&state, &tx, &mut h.workflow).await.unwrap();

    drop(tx);
    assert!(
        timeout(Duration::from_secs(2), rx.recv()).await.expect("timeout").is_err(),
        "no events should be emitted"
    );
}

#[tokio::test]
async fn restore_reruns_last_search_exactly_once() {
    let prefs = Arc::new(MemoryPrefs::new());

    // First run: a successful search for "cat".
    let mut first = harness_with_prefs(vec![Ok(vec![cat_entry()])], prefs.clone());
    first.workflow.submit("cat").await.unwrap();
    assert_eq!(prefs.get(PrefKey::LastWord).as_deref(), Some("cat"));

    // Reload: fresh workflow over the same store.
    let (tx, _rx) = kanal::bounded_async::<AppEvent>(16);
    let state = test_state(prefs.clone());
    let mut second = harness_with_prefs(vec![Ok(vec![cat_entry()])], prefs.clone());

    restore_on_load(&state, &tx, &mut second.workflow)
        .await
        .unwrap();

    assert_eq!(second.log.lookup_count(), 1);
    assert!(second.log.entries().contains(&"lookup:cat".to_string()));
    assert_eq!(second.workflow.state(), SearchState::Rendered);
}
