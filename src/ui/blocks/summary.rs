use crate::ui::primitives::glyph::Glyph;
use crate::ui::primitives::text::ColoredText;
use crate::ui::theme::Tone;
use crate::ui::widgets::panel::Panel;

/// Boxed end-of-command summary: counts, then per-artifact notes, then a
/// hint for what to do next. Empty sections are left out.
#[derive(Debug, Clone)]
pub struct ResultSummary {
    title: String,
    tone: Tone,
    counts: Vec<String>,
    notes: Vec<(Glyph, String)>,
    next_step: Option<String>,
}

impl ResultSummary {
    fn new(title: impl Into<String>, tone: Tone) -> Self {
        Self {
            title: title.into(),
            tone,
            counts: Vec::new(),
            notes: Vec::new(),
            next_step: None,
        }
    }

    pub fn success(title: impl Into<String>) -> Self {
        Self::new(title, Tone::Good)
    }

    /// Completed, but something needs attention
    pub fn partial(title: impl Into<String>) -> Self {
        Self::new(title, Tone::Caution)
    }

    pub fn add_stat(&mut self, label: &str, count: usize) {
        self.counts.push(format!("{} {}", count, label));
    }

    pub fn add_info(&mut self, message: impl Into<String>) {
        self.notes.push((Glyph::Done, message.into()));
    }

    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.notes.push((Glyph::Caution, message.into()));
    }

    pub fn with_next_step(&mut self, hint: impl Into<String>) {
        self.next_step = Some(hint.into());
    }

    pub fn render(&self, color: bool, unicode: bool) -> String {
        let heading = if self.tone == Tone::Good {
            Glyph::Done
        } else {
            Glyph::Caution
        };
        let title = format!(
            "{} {}",
            heading.colored(color, unicode),
            ColoredText::new(self.tone, self.title.as_str()).bold().render(color)
        );

        let notes = self
            .notes
            .iter()
            .map(|(glyph, text)| format!("{} {}", glyph.colored(color, unicode), text))
            .collect::<Vec<_>>();
        let next = self.next_step.iter().map(|hint| {
            format!(
                "{} {}",
                Glyph::NextStep.colored(color, unicode),
                ColoredText::dim(hint.as_str()).render(color)
            )
        });

        let mut panel = Panel::with_title(title).tone(self.tone);
        for section in [self.counts.clone(), notes, next.collect()] {
            if section.is_empty() {
                continue;
            }
            panel.add_empty();
            for line in section {
                panel.add_line(line);
            }
        }
        panel.render(color, unicode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_summary_lists_counts_and_next_step() {
        let mut s = ResultSummary::success("Deploy Complete");
        s.add_stat("files deployed", 3);
        s.with_next_step("Restart the alt:V server to load the resource");

        let rendered = s.render(false, false);
        assert!(rendered.contains("[OK] Deploy Complete"));
        assert!(rendered.contains("| 3 files deployed"));
        assert!(rendered.contains("[>] Restart the alt:V server"));
    }

    #[test]
    fn partial_summary_uses_caution_glyph() {
        let mut s = ResultSummary::partial("Verify Results");
        s.add_warning("livecity-client differs");

        let rendered = s.render(false, false);
        assert!(rendered.contains("[WARN] Verify Results"));
        assert!(rendered.contains("[WARN] livecity-client differs"));
    }

    #[test]
    fn empty_sections_add_no_blank_rows() {
        let rendered = ResultSummary::success("Nothing to Clean").render(false, false);
        assert_eq!(rendered.lines().count(), 3, "{rendered}");
    }
}
