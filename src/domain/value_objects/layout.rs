//! Deploy layout value object
//!
//! Resolves every path a deploy run touches from the repository root,
//! the resource root and the artifact definition.

use std::path::{Path, PathBuf};

use crate::domain::entities::Artifact;

/// Resolved paths for one artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployLayout {
    /// Artifact name (dist/deployed subdirectory)
    pub name: String,
    /// `<repo>/<project>`
    pub project_file: PathBuf,
    /// `<repo>/<project dir>`
    pub project_dir: PathBuf,
    /// `<repo>/<project dir>/<build output>`
    pub build_output_dir: PathBuf,
    /// `<repo>/<project dir>/<metadata>`
    pub metadata_source: PathBuf,
    /// File name of the metadata file inside the staged tree
    pub metadata_name: PathBuf,
    /// `<repo>/<dist>/<name>`
    pub dist_dir: PathBuf,
    /// `<resource root>/<name>`; `None` when the resource root is unknown
    pub deployed_dir: Option<PathBuf>,
}

impl DeployLayout {
    pub fn resolve(
        artifact: &Artifact,
        repo_root: &Path,
        dist_dir: &Path,
        resource_root: Option<&Path>,
        configuration: &str,
    ) -> Self {
        let project_dir = repo_root.join(artifact.project_dir());
        let metadata_name = artifact
            .metadata
            .file_name()
            .map(PathBuf::from)
            .unwrap_or_else(|| artifact.metadata.clone());

        Self {
            name: artifact.name.clone(),
            project_file: repo_root.join(&artifact.project),
            build_output_dir: project_dir.join(artifact.build_output_for(configuration)),
            metadata_source: project_dir.join(&artifact.metadata),
            metadata_name,
            dist_dir: repo_root.join(dist_dir).join(&artifact.name),
            deployed_dir: resource_root.map(|root| root.join(&artifact.name)),
            project_dir,
        }
    }

    /// Path of the metadata file inside the staged tree
    pub fn staged_metadata(&self) -> PathBuf {
        self.dist_dir.join(&self.metadata_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_client_paths() {
        let layout = DeployLayout::resolve(
            &Artifact::client(),
            Path::new("/repo"),
            Path::new("dist"),
            Some(Path::new("/srv/altv/resources")),
            "DebugLocal",
        );

        assert_eq!(layout.project_file, PathBuf::from("/repo/Client/LiveCity.Client.csproj"));
        assert_eq!(
            layout.build_output_dir,
            PathBuf::from("/repo/Client/build/DebugLocal/publish")
        );
        assert_eq!(layout.metadata_source, PathBuf::from("/repo/Client/resource.toml"));
        assert_eq!(layout.dist_dir, PathBuf::from("/repo/dist/livecity-client"));
        assert_eq!(
            layout.deployed_dir,
            Some(PathBuf::from("/srv/altv/resources/livecity-client"))
        );
        assert_eq!(
            layout.staged_metadata(),
            PathBuf::from("/repo/dist/livecity-client/resource.toml")
        );
    }

    #[test]
    fn nested_metadata_is_staged_at_top_level() {
        let artifact = Artifact::new("demo", "Demo/Demo.csproj").with_metadata("meta/resource.toml");
        let layout =
            DeployLayout::resolve(&artifact, Path::new("/repo"), Path::new("out"), None, "Release");

        assert_eq!(layout.metadata_source, PathBuf::from("/repo/Demo/meta/resource.toml"));
        assert_eq!(layout.staged_metadata(), PathBuf::from("/repo/out/demo/resource.toml"));
        assert_eq!(layout.deployed_dir, None);
    }
}
