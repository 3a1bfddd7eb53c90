use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use kanal::AsyncReceiver;
use lexa_config::Config;
use lexa_core::surface::{AudioSink, RenderSurface};
use lexa_types::{AppEvent, FontChoice, LookupView, Theme};
use tokio::sync::RwLock;

use crate::audio::CommandAudioSink;
use crate::render::{Renderer, stdout_styled};

/// Terminal rendering state: active theme and font, plus the audio
/// binding of the current result.
pub struct TerminalSurface {
    theme: Theme,
    font: FontChoice,
    audio_url: Option<String>,
    styled: bool,
}

impl TerminalSurface {
    pub fn new(theme: Theme, font: FontChoice, styled: bool) -> Self {
        Self {
            theme,
            font,
            audio_url: None,
            styled,
        }
    }

    fn renderer(&self) -> Renderer {
        Renderer::new(self.theme, self.styled)
    }

    pub fn greet(&self) {
        let renderer = self.renderer();
        println!("{}", renderer.status("lexa: type a word to look it up"));
        println!(
            "{}",
            renderer.status("commands: :theme  :fonts  :font <name>  :play  :q")
        );
        println!(
            "{}",
            renderer.status(&format!(
                "theme: {}  font: {}",
                self.theme().as_str(),
                self.font().name
            ))
        );
    }

    pub fn show_result(&mut self, view: LookupView) {
        self.audio_url = view.audio_url.clone();
        println!("{}", self.renderer().result(&view));
    }

    pub fn show_error(&self) {
        println!("{}", self.renderer().error_panel());
    }

    pub fn show_empty_input(&self, visible: bool) {
        if visible {
            println!("{}", self.renderer().empty_input());
        }
    }

    /// A terminal cannot unprint; clearing drops the play binding so a
    /// stale control cannot outlive its result.
    pub fn clear_result(&mut self) {
        self.audio_url = None;
    }

    pub fn apply_theme(&mut self, theme: Theme) {
        self.theme = theme;
        println!(
            "{}",
            self.renderer().status(&format!("theme: {}", theme.as_str()))
        );
    }

    pub fn apply_font(&mut self, font: FontChoice) {
        println!(
            "{}",
            self.renderer()
                .status(&format!("font: {} ({})", font.name, font.family))
        );
        self.font = font;
    }

    pub fn show_fonts(&self, fonts: &[FontChoice]) {
        println!("{}", self.renderer().font_list(fonts, &self.font.name));
    }

    pub fn play_audio(&self, sink: &dyn AudioSink) {
        match &self.audio_url {
            Some(url) => sink.play(url),
            None => println!(
                "{}",
                self.renderer().status("no pronunciation audio for the current result")
            ),
        }
    }

    pub fn font(&self) -> &FontChoice {
        &self.font
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }
}

/// UI loop: renders backend events to the terminal.
pub async fn ui_loop(
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    config: Arc<RwLock<Config>>,
) -> anyhow::Result<()> {
    let (styled, font, audio) = {
        let config = config.read().await;
        let font = config.ui.fonts.first().cloned().unwrap_or(FontChoice {
            name: "Default".to_string(),
            family: config.ui.default_family.clone(),
        });
        (stdout_styled(config.ui.plain), font, config.audio.clone())
    };

    let sink = CommandAudioSink::new(audio);
    let mut surface = TerminalSurface::new(Theme::Light, font, styled);
    surface.greet();

    while let Ok(event) = app_to_ui_rx.recv().await {
        match event {
            AppEvent::ShowResult(view) => surface.show_result(view),
            AppEvent::ShowLookupError => surface.show_error(),
            AppEvent::ShowEmptyInputError(visible) => surface.show_empty_input(visible),
            AppEvent::ClearResult => surface.clear_result(),
            AppEvent::ApplyTheme(theme) => surface.apply_theme(theme),
            AppEvent::ApplyFont(font) => surface.apply_font(font),
            AppEvent::ShowFonts(fonts) => surface.show_fonts(&fonts),
            AppEvent::PlayAudio => surface.play_audio(&sink),
            AppEvent::UiEvent(_) => {}
        }
    }

    Ok(())
}

/// Render surface for one-shot mode, writing straight to the terminal.
pub struct DirectSurface(Mutex<TerminalSurface>);

impl DirectSurface {
    pub fn new(surface: TerminalSurface) -> Self {
        Self(Mutex::new(surface))
    }
}

#[async_trait]
impl RenderSurface for DirectSurface {
    async fn render_result(&self, view: LookupView) -> anyhow::Result<()> {
        self.0.lock().unwrap().show_result(view);
        Ok(())
    }

    async fn render_error(&self) -> anyhow::Result<()> {
        self.0.lock().unwrap().show_error();
        Ok(())
    }

    async fn render_empty_input(&self, visible: bool) -> anyhow::Result<()> {
        self.0.lock().unwrap().show_empty_input(visible);
        Ok(())
    }

    async fn clear_result(&self) -> anyhow::Result<()> {
        self.0.lock().unwrap().clear_result();
        Ok(())
    }
}
