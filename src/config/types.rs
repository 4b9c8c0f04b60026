//! Configuration type definitions

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::entities::Artifact;
use crate::domain::value_objects::{ExcludePatterns, ReplaceStrategy};
use crate::error::{DeployError, DeployResult};

use super::loader::{self, ConfigWarning};

/// Build tool configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildConfig {
    #[serde(default = "default_tool")]
    pub tool: String,

    #[serde(default = "default_verb")]
    pub verb: String,

    #[serde(default = "default_configuration")]
    pub configuration: String,

    #[serde(default = "default_true")]
    pub no_build: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            tool: default_tool(),
            verb: default_verb(),
            configuration: default_configuration(),
            no_build: true,
        }
    }
}

fn default_tool() -> String {
    "dotnet".to_string()
}

fn default_verb() -> String {
    "publish".to_string()
}

fn default_configuration() -> String {
    "DebugLocal".to_string()
}

fn default_true() -> bool {
    true
}

/// Deploy configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeployConfig {
    /// Environment variable holding the game server root
    #[serde(default = "default_resource_root_env")]
    pub resource_root_env: String,

    /// Subdirectory of the server root that holds resources
    #[serde(default = "default_resources_subdir")]
    pub resources_subdir: PathBuf,

    /// Staging directory, relative to the repository root
    #[serde(default = "default_dist_dir")]
    pub dist_dir: PathBuf,

    #[serde(default)]
    pub strategy: ReplaceStrategy,

    /// Gitignore-style patterns excluded from staging
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self {
            resource_root_env: default_resource_root_env(),
            resources_subdir: default_resources_subdir(),
            dist_dir: default_dist_dir(),
            strategy: ReplaceStrategy::default(),
            exclude: Vec::new(),
        }
    }
}

fn default_resource_root_env() -> String {
    "ALTV_SERVER_ROOT".to_string()
}

fn default_resources_subdir() -> PathBuf {
    PathBuf::from("resources")
}

fn default_dist_dir() -> PathBuf {
    PathBuf::from("dist")
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            unicode: true,
        }
    }
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub build: BuildConfig,

    #[serde(default)]
    pub deploy: DeployConfig,

    #[serde(default)]
    pub output: OutputConfig,

    /// Explicit artifacts; the client/server presets apply when empty
    #[serde(default)]
    pub artifacts: Vec<Artifact>,
}

impl Config {
    /// File name looked up in the repository root
    pub const FILE_NAME: &'static str = "livecity-deploy.toml";

    /// Load `explicit` or `<repo_root>/livecity-deploy.toml`, falling back to
    /// defaults, then apply `LIVECITY_*` overrides from the process environment.
    pub fn load_for_repo(
        repo_root: &Path,
        explicit: Option<&Path>,
    ) -> DeployResult<(Self, Vec<ConfigWarning>)> {
        loader::load_for_repo(repo_root, explicit, |key| std::env::var(key).ok())
    }

    /// Configured artifacts, or the built-in presets. Names are validated
    /// and must be unique.
    pub fn artifacts(&self) -> DeployResult<Vec<Artifact>> {
        let artifacts = if self.artifacts.is_empty() {
            Artifact::presets()
        } else {
            self.artifacts.clone()
        };

        let mut seen = HashSet::new();
        for artifact in &artifacts {
            artifact.validate()?;
            if !seen.insert(artifact.name.as_str()) {
                return Err(DeployError::InvalidArtifactName {
                    name: artifact.name.clone(),
                    reason: "defined more than once".to_string(),
                });
            }
        }

        Ok(artifacts)
    }

    /// Compiled `[deploy] exclude` patterns
    pub fn exclude_patterns(&self) -> DeployResult<ExcludePatterns> {
        ExcludePatterns::new(&self.deploy.exclude)
    }

    /// Resolve the host's resource directory.
    ///
    /// `cli_override` is used verbatim; otherwise the server root is read
    /// from `[deploy] resource_root_env` and joined with `resources_subdir`.
    pub fn resource_root(&self, cli_override: Option<&Path>) -> DeployResult<PathBuf> {
        self.resource_root_with(cli_override, |key| std::env::var_os(key).map(PathBuf::from))
    }

    pub(crate) fn resource_root_with(
        &self,
        cli_override: Option<&Path>,
        get_env: impl Fn(&str) -> Option<PathBuf>,
    ) -> DeployResult<PathBuf> {
        if let Some(root) = cli_override {
            return Ok(root.to_path_buf());
        }

        let var = &self.deploy.resource_root_env;
        match get_env(var) {
            Some(server_root) if !server_root.as_os_str().is_empty() => {
                Ok(server_root.join(&self.deploy.resources_subdir))
            }
            _ => Err(DeployError::MissingEnvVar { var: var.clone() }),
        }
    }
}
