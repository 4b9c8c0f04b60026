//! Artifact entity
//!
//! One deployable build product (client or server resource).

use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{DeployError, DeployResult};

/// A buildable project and where its published output lands.
///
/// `project` is relative to the repository root; `build_output` and
/// `metadata` are relative to the project's directory. Without an explicit
/// `build_output` the tool's publish folder for the active configuration
/// (`build/<configuration>/publish`) is used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artifact {
    /// Name of the dist/deployed subdirectory (e.g. `livecity-client`)
    pub name: String,
    /// Project file handed to the build tool
    pub project: PathBuf,
    /// Where the build tool publishes, relative to the project directory
    #[serde(default)]
    pub build_output: Option<PathBuf>,
    /// Metadata file copied next to the published output
    #[serde(default = "default_metadata")]
    pub metadata: PathBuf,
    /// Short names accepted on the command line
    #[serde(default)]
    pub aliases: Vec<String>,
}

fn default_metadata() -> PathBuf {
    PathBuf::from("resource.toml")
}

impl Artifact {
    pub const CLIENT: &'static str = "livecity-client";
    pub const SERVER: &'static str = "livecity-server";

    pub fn new(name: impl Into<String>, project: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            project: project.into(),
            build_output: None,
            metadata: default_metadata(),
            aliases: Vec::new(),
        }
    }

    pub fn with_build_output(mut self, build_output: impl Into<PathBuf>) -> Self {
        self.build_output = Some(build_output.into());
        self
    }

    pub fn with_metadata(mut self, metadata: impl Into<PathBuf>) -> Self {
        self.metadata = metadata.into();
        self
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    /// The client resource preset
    pub fn client() -> Self {
        Self::new(Self::CLIENT, "Client/LiveCity.Client.csproj").with_alias("client")
    }

    /// The server resource preset
    pub fn server() -> Self {
        Self::new(Self::SERVER, "Server/LiveCity.Server.csproj").with_alias("server")
    }

    /// Built-in artifacts used when no `[[artifacts]]` are configured
    pub fn presets() -> Vec<Self> {
        vec![Self::client(), Self::server()]
    }

    /// Publish folder relative to the project directory
    pub fn build_output_for(&self, configuration: &str) -> PathBuf {
        self.build_output
            .clone()
            .unwrap_or_else(|| Path::new("build").join(configuration).join("publish"))
    }

    /// Directory containing the project file (relative to the repo root)
    pub fn project_dir(&self) -> &Path {
        self.project.parent().unwrap_or_else(|| Path::new(""))
    }

    /// Whether `query` names this artifact (full name or alias)
    pub fn matches(&self, query: &str) -> bool {
        self.name == query || self.aliases.iter().any(|a| a == query)
    }

    /// Reject names that would escape `dist/` or the resource root.
    pub fn validate(&self) -> DeployResult<()> {
        validate_name(&self.name)
    }
}

fn validate_name(name: &str) -> DeployResult<()> {
    let invalid = |reason: &str| DeployError::InvalidArtifactName {
        name: name.to_string(),
        reason: reason.to_string(),
    };

    if name.trim().is_empty() {
        return Err(invalid("name is empty"));
    }

    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => {}
        _ => return Err(invalid("must be a single directory name")),
    }

    if name.contains(['/', '\\']) {
        return Err(invalid("must not contain path separators"));
    }

    Ok(())
}

/// Resolve command-line names to configured artifacts.
///
/// An empty query selects every artifact. Duplicates are removed while
/// keeping the order of first mention.
pub fn select<'a>(
    artifacts: &'a [Artifact],
    queries: &[String],
) -> DeployResult<Vec<&'a Artifact>> {
    if queries.is_empty() {
        return Ok(artifacts.iter().collect());
    }

    let mut selected: Vec<&Artifact> = Vec::new();
    for query in queries {
        let artifact = artifacts
            .iter()
            .find(|a| a.matches(query))
            .ok_or_else(|| DeployError::UnknownArtifact {
                name: query.clone(),
                available: artifacts
                    .iter()
                    .map(|a| a.name.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
            })?;
        if !selected.iter().any(|s| s.name == artifact.name) {
            selected.push(artifact);
        }
    }
    Ok(selected)
}
