use crossterm::style::Stylize;

use crate::ui::theme::Tone;

/// A span of text with a tone, optionally bold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColoredText {
    text: String,
    tone: Tone,
    bold: bool,
}

impl ColoredText {
    pub fn new(tone: Tone, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone,
            bold: false,
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(Tone::Good, text)
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(Tone::Caution, text)
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(Tone::Accent, text)
    }

    pub fn dim(text: impl Into<String>) -> Self {
        Self::new(Tone::Muted, text)
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn render(&self, color: bool) -> String {
        if !color {
            return self.text.clone();
        }
        let styled = self.text.as_str().with(self.tone.color());
        if self.bold {
            styled.bold().to_string()
        } else {
            styled.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_without_color() {
        assert_eq!(ColoredText::info("livecity-client").bold().render(false), "livecity-client");
    }

    #[test]
    fn bold_adds_attribute_escape() {
        let plain = ColoredText::dim("dist").render(true);
        let bold = ColoredText::dim("dist").bold().render(true);
        assert!(plain.contains("\u{1b}["));
        assert!(bold.len() > plain.len());
    }
}
