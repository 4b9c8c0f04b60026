//! Output tones.
//!
//! Every colored span in the CLI goes through a `Tone` so a run either
//! colors consistently or not at all.

use crossterm::style::{Color, Stylize};

/// What a span of output means to the reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Step finished, trees match
    Good,
    /// Command failed, verify mismatch
    Bad,
    /// Deletions, partial results, config warnings
    Caution,
    /// Titles and artifact names
    Accent,
    /// Paths, commands, hints
    Muted,
}

impl Tone {
    pub const fn color(self) -> Color {
        match self {
            Tone::Good => Color::Green,
            Tone::Bad => Color::Red,
            Tone::Caution => Color::Yellow,
            Tone::Accent => Color::Cyan,
            Tone::Muted => Color::DarkGrey,
        }
    }

    /// `text` wrapped in this tone's color, or unchanged when color is off.
    pub fn paint(self, text: &str, color: bool) -> String {
        if color {
            text.with(self.color()).to_string()
        } else {
            text.to_string()
        }
    }
}
