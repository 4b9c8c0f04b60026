//! What the attached terminal can display, read once at startup.

use is_terminal::IsTerminal;

/// CI system the process runs under, when detectable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CiProvider {
    GitHubActions,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalCapabilities {
    pub stdout_tty: bool,
    pub stdin_tty: bool,
    pub supports_color: bool,
    pub supports_unicode: bool,
    pub ci: Option<CiProvider>,
}

impl TerminalCapabilities {
    pub fn detect() -> Self {
        Self::from_env(
            |key| std::env::var(key).ok(),
            std::io::stdout().is_terminal(),
            std::io::stdin().is_terminal(),
        )
    }

    fn from_env(env: impl Fn(&str) -> Option<String>, stdout_tty: bool, stdin_tty: bool) -> Self {
        let dumb = env("TERM").is_some_and(|t| t.eq_ignore_ascii_case("dumb"));

        let ci = if env("GITHUB_ACTIONS").is_some() {
            Some(CiProvider::GitHubActions)
        } else if ["CI", "BUILDKITE", "JENKINS_HOME", "TEAMCITY_VERSION"]
            .iter()
            .any(|key| env(key).is_some())
        {
            Some(CiProvider::Other)
        } else {
            None
        };

        // First non-empty locale variable decides; unset means UTF-8.
        let locale = ["LC_ALL", "LC_CTYPE", "LANG"]
            .iter()
            .find_map(|key| env(key).filter(|v| !v.is_empty()));
        let utf8_locale = !matches!(
            locale.as_deref().map(str::to_ascii_lowercase).as_deref(),
            Some("c") | Some("posix")
        );

        Self {
            stdout_tty,
            stdin_tty,
            supports_color: stdout_tty && !dumb && env("NO_COLOR").is_none(),
            supports_unicode: !dumb && utf8_locale,
            ci,
        }
    }

    pub fn in_ci(&self) -> bool {
        self.ci.is_some()
    }

    pub fn in_github_actions(&self) -> bool {
        self.ci == Some(CiProvider::GitHubActions)
    }
}
