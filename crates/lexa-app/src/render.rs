use std::fmt::Write;

use crossterm::style::{Color, Stylize};
use lexa_types::{FontChoice, LookupView, Theme};

/// Colors for one theme.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub heading: Color,
    pub accent: Color,
    pub muted: Color,
    pub error: Color,
}

pub fn palette(theme: Theme) -> Palette {
    match theme {
        Theme::Light => Palette {
            heading: Color::DarkBlue,
            accent: Color::DarkMagenta,
            muted: Color::DarkGrey,
            error: Color::DarkRed,
        },
        Theme::Dark => Palette {
            heading: Color::Cyan,
            accent: Color::Magenta,
            muted: Color::Grey,
            error: Color::Red,
        },
    }
}

/// Whether stdout should receive styled output.
pub fn stdout_styled(plain: bool) -> bool {
    !plain && atty::is(atty::Stream::Stdout) && std::env::var_os("NO_COLOR").is_none()
}

/// Formats blocks of output for one theme.
pub struct Renderer {
    palette: Palette,
    styled: bool,
}

impl Renderer {
    pub fn new(theme: Theme, styled: bool) -> Self {
        Self {
            palette: palette(theme),
            styled,
        }
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.styled {
            format!("{}", text.with(color))
        } else {
            text.to_string()
        }
    }

    fn paint_bold(&self, text: &str, color: Color) -> String {
        if self.styled {
            format!("{}", text.with(color).bold())
        } else {
            text.to_string()
        }
    }

    /// Full block for one rendered lookup.
    pub fn result(&self, view: &LookupView) -> String {
        let mut out = String::new();

        let _ = write!(out, "\n{}", self.paint_bold(&view.word, self.palette.heading));
        if !view.phonetic.is_empty() {
            let _ = write!(out, "  {}", self.paint(&view.phonetic, self.palette.accent));
        }
        let _ = writeln!(out);

        if view.audio_url.is_some() {
            let _ = writeln!(
                out,
                "{}",
                self.paint("pronunciation audio available, :play to hear it", self.palette.muted)
            );
        }

        for meaning in &view.meanings {
            let _ = writeln!(out);
            let _ = writeln!(
                out,
                "{}",
                self.paint_bold(&meaning.part_of_speech, self.palette.accent)
            );

            for (i, definition) in meaning.definitions.iter().enumerate() {
                let _ = writeln!(out, "  {}. {}", i + 1, definition.text);
                if let Some(example) = &definition.example {
                    let _ = writeln!(
                        out,
                        "     {}",
                        self.paint(&format!("\u{201c}{example}\u{201d}"), self.palette.muted)
                    );
                }
            }

            if !meaning.synonyms.is_empty() {
                let _ = writeln!(
                    out,
                    "  {} {}",
                    self.paint("synonyms:", self.palette.muted),
                    meaning.synonyms.join(", ")
                );
            }
        }

        if let Some(source) = &view.source_url {
            let _ = writeln!(out);
            let _ = writeln!(
                out,
                "{} {}",
                self.paint("source:", self.palette.muted),
                source
            );
        }

        out
    }

    /// The fixed panel every failed lookup collapses to.
    pub fn error_panel(&self) -> String {
        format!(
            "\n{}\n{}\n",
            self.paint_bold("No definitions found.", self.palette.error),
            self.paint(
                "Sorry, we couldn't find definitions for the word you were looking for.",
                self.palette.muted
            )
        )
    }

    pub fn empty_input(&self) -> String {
        self.paint("Whoops, can't be empty...", self.palette.error)
    }

    pub fn status(&self, text: &str) -> String {
        self.paint(text, self.palette.muted)
    }

    pub fn font_list(&self, fonts: &[FontChoice], current: &str) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", self.paint("fonts:", self.palette.muted));
        for font in fonts {
            let marker = if font.name == current { "*" } else { " " };
            let _ = writeln!(out, " {marker} {} ({})", font.name, font.family);
        }
        let _ = write!(out, "{}", self.paint("select with :font <name>", self.palette.muted));
        out
    }
}
