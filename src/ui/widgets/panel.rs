use unicode_width::UnicodeWidthChar;

use crate::ui::theme::Tone;

/// Corner and edge characters of a panel border.
struct Frame {
    top: (&'static str, &'static str),
    bottom: (&'static str, &'static str),
    horizontal: &'static str,
    vertical: &'static str,
}

const ROUNDED: Frame = Frame {
    top: ("╭", "╮"),
    bottom: ("╰", "╯"),
    horizontal: "─",
    vertical: "│",
};

const ASCII: Frame = Frame {
    top: ("+", "+"),
    bottom: ("+", "+"),
    horizontal: "-",
    vertical: "|",
};

/// Bordered block of text lines; the border takes the panel's tone.
#[derive(Debug, Clone)]
pub struct Panel {
    title: String,
    content: Vec<String>,
    tone: Tone,
}

impl Panel {
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: Vec::new(),
            tone: Tone::Accent,
        }
    }

    pub fn tone(mut self, tone: Tone) -> Self {
        self.tone = tone;
        self
    }

    /// Add text; embedded newlines become separate rows.
    pub fn add_line(&mut self, text: impl AsRef<str>) {
        self.content.extend(text.as_ref().lines().map(str::to_owned));
    }

    pub fn add_empty(&mut self) {
        self.content.push(String::new());
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let lines: Vec<&str> = std::iter::once(self.title.as_str())
            .chain(self.content.iter().map(String::as_str))
            .collect();

        let inner_width = lines
            .iter()
            .map(|l| visible_width(l))
            .max()
            .unwrap_or(0)
            .saturating_add(2)
            .max(2);

        let frame = if supports_unicode { &ROUNDED } else { &ASCII };
        let edge = |s: &str| self.tone.paint(s, supports_color);
        let rule = frame.horizontal.repeat(inner_width);

        let mut out = String::new();
        out.push_str(&edge(&format!("{}{}{}", frame.top.0, rule, frame.top.1)));
        out.push('\n');

        for line in &lines {
            let pad = inner_width.saturating_sub(1).saturating_sub(visible_width(line));
            out.push_str(&format!(
                "{} {}{}{}\n",
                edge(frame.vertical),
                line,
                " ".repeat(pad),
                edge(frame.vertical)
            ));
        }

        out.push_str(&edge(&format!("{}{}{}", frame.bottom.0, rule, frame.bottom.1)));
        out.push('\n');
        out
    }
}

/// Terminal columns `s` occupies, skipping the CSI color sequences the
/// theme emits (`ESC [ ... <letter>`).
fn visible_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if in_escape {
            in_escape = !c.is_ascii_alphabetic();
        } else if c == '\u{1b}' {
            in_escape = true;
        } else {
            width += c.width().unwrap_or(0);
        }
    }
    width
}
