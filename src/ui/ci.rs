//! GitHub Actions workflow commands, so failures and config warnings show
//! up as annotations on the run.

use std::fmt;

/// One `::error ...::message` or `::warning ...::message` line.
#[derive(Debug, Clone)]
pub struct Annotation {
    command: &'static str,
    message: String,
    file: Option<String>,
    line: Option<usize>,
}

impl Annotation {
    pub fn error(message: impl Into<String>) -> Self {
        Self::new("error", message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new("warning", message)
    }

    fn new(command: &'static str, message: impl Into<String>) -> Self {
        Self {
            command,
            message: message.into(),
            file: None,
            line: None,
        }
    }

    pub fn file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    pub fn line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }
}

impl fmt::Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "::{} title=livecity-deploy", self.command)?;
        if let Some(file) = &self.file {
            write!(f, ",file={}", escape(file, true))?;
        }
        if let Some(line) = self.line {
            write!(f, ",line={}", line)?;
        }
        write!(f, "::{}", escape(&self.message, false))
    }
}

/// Percent-encode what the runner treats as syntax. Property values also
/// may not contain `:` or `,`.
fn escape(value: &str, property: bool) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '%' => out.push_str("%25"),
            '\r' => out.push_str("%0D"),
            '\n' => out.push_str("%0A"),
            ':' if property => out.push_str("%3A"),
            ',' if property => out.push_str("%2C"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_message_newlines_are_encoded() {
        let rendered = Annotation::error("build failed\nexit code 1").to_string();
        assert_eq!(rendered, "::error title=livecity-deploy::build failed%0Aexit code 1");
    }

    #[test]
    fn warning_carries_file_and_line() {
        let rendered = Annotation::warning("unknown key 'strategyy'")
            .file("livecity-deploy.toml")
            .line(2)
            .to_string();
        assert_eq!(
            rendered,
            "::warning title=livecity-deploy,file=livecity-deploy.toml,line=2::unknown key 'strategyy'"
        );
    }

    #[test]
    fn file_property_escapes_separators() {
        let rendered = Annotation::error("missing").file("C:\\srv,altv").to_string();
        assert!(rendered.contains(",file=C%3A\\srv%2Caltv::"), "{rendered}");
    }
}
