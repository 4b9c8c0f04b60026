//! Configuration loading

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::ReplaceStrategy;
use crate::error::{DeployError, DeployResult};

use super::suggest::{closest, parse_choice};
use super::types::{ColorMode, Config};

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> DeployResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| DeployError::fs("read", path, e))?;
    parse_with_warnings(path, &content)
}

pub(crate) fn parse_with_warnings(
    path: &Path,
    content: &str,
) -> DeployResult<(Config, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| DeployError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
                key,
                file: path.to_path_buf(),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load `explicit` (must exist) or `<repo_root>/livecity-deploy.toml` (optional),
/// then apply environment overrides.
pub fn load_for_repo(
    repo_root: &Path,
    explicit: Option<&Path>,
    get_env: impl Fn(&str) -> Option<String>,
) -> DeployResult<(Config, Vec<ConfigWarning>)> {
    let (config, warnings) = match explicit {
        Some(path) if !path.is_file() => {
            return Err(DeployError::SourceNotFound {
                path: path.to_path_buf(),
            })
        }
        Some(path) => load_with_warnings(path)?,
        None => {
            let default_path = repo_root.join(Config::FILE_NAME);
            if default_path.is_file() {
                load_with_warnings(&default_path)?
            } else {
                (Config::default(), Vec::new())
            }
        }
    };

    let config = with_env_overrides(config, get_env, &mut std::io::stderr());
    Ok((config, warnings))
}

/// Apply environment variable overrides (`LIVECITY_*` prefix)
pub fn with_env_overrides<W: Write>(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
    warnings: &mut W,
) -> Config {
    if let Some(tool) = get_env("LIVECITY_BUILD_TOOL").filter(|v| !v.trim().is_empty()) {
        config.build.tool = tool;
    }

    if let Some(configuration) =
        get_env("LIVECITY_BUILD_CONFIGURATION").filter(|v| !v.trim().is_empty())
    {
        config.build.configuration = configuration;
    }

    if let Some(strategy) = get_env("LIVECITY_REPLACE_STRATEGY") {
        config.deploy.strategy = parse_choice(
            "LIVECITY_REPLACE_STRATEGY",
            &strategy,
            ReplaceStrategy::VALID_VALUES,
            config.deploy.strategy,
            warnings,
        );
    }

    if get_env("LIVECITY_NO_COLOR").is_some() {
        config.output.color = ColorMode::Never;
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "build",
        "tool",
        "verb",
        "configuration",
        "no_build",
        "deploy",
        "resource_root_env",
        "resources_subdir",
        "dist_dir",
        "strategy",
        "exclude",
        "output",
        "color",
        "unicode",
        "artifacts",
        "name",
        "project",
        "build_output",
        "metadata",
        "aliases",
    ];

    closest(unknown, CANDIDATES).map(str::to_string)
}
