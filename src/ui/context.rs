use livecity_deploy::config::{ColorMode, Config};

use crate::cli::ColorWhen;
use crate::ui::terminal::TerminalCapabilities;

/// Output settings for one invocation, settled before any command runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    /// `-v` shows paths, `-vv` also the build command line
    pub verbose: u8,
    pub caps: TerminalCapabilities,
    pub color: bool,
    pub unicode: bool,
}

impl UiContext {
    pub fn new(json: bool, verbose: u8, cli_color: Option<ColorWhen>, config: &Config) -> Self {
        Self::from_caps(json, verbose, cli_color, config, TerminalCapabilities::detect())
    }

    pub(crate) fn from_caps(
        json: bool,
        verbose: u8,
        cli_color: Option<ColorWhen>,
        config: &Config,
        caps: TerminalCapabilities,
    ) -> Self {
        Self {
            json,
            verbose,
            caps,
            color: color_enabled(cli_color, config.output.color, &caps),
            unicode: config.output.unicode && caps.supports_unicode,
        }
    }

    /// A confirmation prompt needs a terminal on both ends and no NDJSON
    /// consumer reading stdout.
    pub fn interactive(&self) -> bool {
        !self.json && self.caps.stdin_tty && self.caps.stdout_tty
    }
}

/// `--color` beats `[output] color`; `auto` in either place defers to the
/// terminal, and CI logs stay plain unless color is forced.
fn color_enabled(cli: Option<ColorWhen>, config: ColorMode, caps: &TerminalCapabilities) -> bool {
    let forced = match cli {
        Some(ColorWhen::Always) => Some(true),
        Some(ColorWhen::Never) => Some(false),
        Some(ColorWhen::Auto) | None => match config {
            ColorMode::Always => Some(true),
            ColorMode::Never => Some(false),
            ColorMode::Auto => None,
        },
    };
    forced.unwrap_or(caps.supports_color && !caps.in_ci())
}
