use std::path::PathBuf;

use crate::ui::theme::Tone;
use crate::ui::widgets::panel::Panel;

/// Boxed error report with an optional path and fix hint.
#[derive(Debug, Clone)]
pub struct ErrorBlock {
    message: String,
    path: Option<PathBuf>,
    fix: Option<String>,
}

impl ErrorBlock {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            path: None,
            fix: None,
        }
    }

    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn with_fix(mut self, fix: impl Into<String>) -> Self {
        self.fix = Some(fix.into());
        self
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let mut p = Panel::with_title("ERROR").tone(Tone::Bad);

        if let Some(path) = &self.path {
            p.add_line(path.display().to_string());
            p.add_empty();
        }
        p.add_line(self.message.clone());

        if let Some(fix) = &self.fix {
            p.add_empty();
            p.add_line(format!("FIX: {}", fix));
        }

        p.render(supports_color, supports_unicode)
    }
}
