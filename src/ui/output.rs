use livecity_deploy::config::ConfigWarning;

use crate::ui::ci::Annotation;
use crate::ui::context::UiContext;
use crate::ui::primitives::glyph::Glyph;

/// Print non-fatal config warnings (unknown keys) to stderr. Under GitHub
/// Actions each one is also annotated on the workflow run.
pub fn print_config_warnings(warnings: &[ConfigWarning], ui: &UiContext) {
    for w in warnings {
        eprintln!("{}", format_config_warning(w, ui.color, ui.unicode));
        if ui.caps.in_github_actions() && !ui.json {
            println!("{}", annotate(w));
        }
    }
}

fn location(w: &ConfigWarning) -> String {
    match w.line {
        Some(line) => format!("{}:{}", w.file.display(), line),
        None => w.file.display().to_string(),
    }
}

fn format_config_warning(w: &ConfigWarning, color: bool, unicode: bool) -> String {
    let mut out = format!(
        "{} Unknown config key '{}' in {}",
        Glyph::Caution.colored(color, unicode),
        w.key,
        location(w)
    );
    if let Some(suggestion) = &w.suggestion {
        out.push_str(&format!("\n   Did you mean '{}'?", suggestion));
    }
    out
}

fn annotate(w: &ConfigWarning) -> Annotation {
    let mut message = format!("Unknown config key '{}'", w.key);
    if let Some(suggestion) = &w.suggestion {
        message.push_str(&format!(" (did you mean '{}'?)", suggestion));
    }
    let annotation = Annotation::warning(message).file(w.file.display().to_string());
    match w.line {
        Some(line) => annotation.line(line),
        None => annotation,
    }
}
