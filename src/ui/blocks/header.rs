use crate::ui::primitives::glyph::Glyph;
use crate::ui::primitives::text::ColoredText;

/// Title line followed by `label:` / value rows with the values aligned.
#[derive(Debug, Clone)]
pub struct CommandHeader {
    glyph: Glyph,
    title: String,
    rows: Vec<(String, String)>,
}

impl CommandHeader {
    pub fn new(glyph: Glyph, title: impl Into<String>) -> Self {
        Self {
            glyph,
            title: title.into(),
            rows: Vec::new(),
        }
    }

    pub fn row(mut self, label: &str, value: impl Into<String>) -> Self {
        self.rows.push((format!("{}:", label), value.into()));
        self
    }

    pub fn render(&self, color: bool, unicode: bool) -> String {
        let mut out = format!(
            "{} {}\n",
            self.glyph.colored(color, unicode),
            ColoredText::info(self.title.as_str()).bold().render(color)
        );

        let width = self.rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
        for (label, value) in &self.rows {
            let padded = format!("{:<width$}", label, width = width);
            out.push_str(&format!("  {} {}\n", ColoredText::dim(padded).render(color), value));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_share_one_column() {
        let rendered = CommandHeader::new(Glyph::Artifact, "LiveCity Deploy")
            .row("Artifacts", "livecity-client")
            .row("Configuration", "DebugLocal")
            .render(false, false);

        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "[DEPLOY] LiveCity Deploy");
        assert_eq!(lines[1], "  Artifacts:     livecity-client");
        assert_eq!(lines[2], "  Configuration: DebugLocal");
    }
}
