use crate::ui::theme::Tone;

/// Leading marker of a status line. ASCII fallbacks are bracketed words so
/// logs from non-Unicode terminals stay greppable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Done,
    Failed,
    Caution,
    /// Artifact currently being processed
    Active,
    /// Step that was skipped or only simulated
    Skipped,
    NextStep,
    Build,
    Artifact,
    Clean,
    List,
}

impl Glyph {
    pub fn symbol(self, unicode: bool) -> &'static str {
        let (fancy, plain) = match self {
            Glyph::Done => ("✓", "[OK]"),
            Glyph::Failed => ("✗", "[FAIL]"),
            Glyph::Caution => ("⚠", "[WARN]"),
            Glyph::Active => ("●", "[..]"),
            Glyph::Skipped => ("○", "[ ]"),
            Glyph::NextStep => ("↳", "[>]"),
            Glyph::Build => ("🔨", "[BUILD]"),
            Glyph::Artifact => ("📦", "[DEPLOY]"),
            Glyph::Clean => ("🗑", "[DEL]"),
            Glyph::List => ("☰", "[LIST]"),
        };
        if unicode {
            fancy
        } else {
            plain
        }
    }

    fn tone(self) -> Tone {
        match self {
            Glyph::Done => Tone::Good,
            Glyph::Failed => Tone::Bad,
            Glyph::Caution | Glyph::Active | Glyph::Clean => Tone::Caution,
            Glyph::Skipped | Glyph::NextStep => Tone::Muted,
            Glyph::Build | Glyph::Artifact | Glyph::List => Tone::Accent,
        }
    }

    pub fn colored(self, color: bool, unicode: bool) -> String {
        self.tone().paint(self.symbol(unicode), color)
    }
}
