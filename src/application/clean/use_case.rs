//! Clean Use Case
//!
//! Orchestrates directory removal.

use std::path::PathBuf;

use crate::domain::ports::FileSystem;
use crate::domain::value_objects::DeployLayout;
use crate::error::DeployResult;

use super::options::CleanOptions;
use super::result::{CleanResult, SkipReason, SkippedDir};

/// Clean use case - removes the directories a deploy created
pub struct CleanUseCase<FS>
where
    FS: FileSystem,
{
    fs: FS,
}

impl<FS> CleanUseCase<FS>
where
    FS: FileSystem,
{
    /// Create a new clean use case
    pub fn new(fs: FS) -> Self {
        Self { fs }
    }

    /// Preview: what would be removed. Never deletes.
    pub fn execute(&self, layout: &DeployLayout, options: &CleanOptions) -> CleanResult {
        self.plan(layout, options)
    }

    /// Remove the directories unless `options.dry_run` is set.
    ///
    /// This should be called after the user confirms the preview.
    pub fn execute_confirmed(
        &self,
        layout: &DeployLayout,
        options: &CleanOptions,
    ) -> DeployResult<CleanResult> {
        let mut result = self.plan(layout, options);
        if options.dry_run {
            result.dry_run = true;
            return Ok(result);
        }

        for dir in &result.removed {
            self.fs.remove_dir_all(dir)?;
        }
        Ok(result)
    }

    fn plan(&self, layout: &DeployLayout, options: &CleanOptions) -> CleanResult {
        let mut result = CleanResult::new(&layout.name);
        result.dry_run = options.dry_run;

        let mut candidates: Vec<Option<PathBuf>> = vec![Some(layout.dist_dir.clone())];
        if !options.dist_only {
            candidates.push(layout.deployed_dir.clone());
        }

        for candidate in candidates {
            match candidate {
                Some(path) if self.fs.exists(&path) => result.removed.push(path),
                Some(path) => result.skipped.push(SkippedDir {
                    path,
                    reason: SkipReason::Missing,
                }),
                None => result.skipped.push(SkippedDir {
                    path: PathBuf::new(),
                    reason: SkipReason::Unresolved,
                }),
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Artifact;
    use crate::infrastructure::fs::LocalFs;
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    fn layout(root: &Path, resources: Option<&Path>) -> DeployLayout {
        DeployLayout::resolve(
            &Artifact::client(),
            &root.join("repo"),
            Path::new("dist"),
            resources,
            "DebugLocal",
        )
    }

    fn populate(dir: &Path) {
        fs::create_dir_all(dir.join("sub")).unwrap();
        fs::write(dir.join("sub/a.txt"), "hello").unwrap();
    }

    #[test]
    fn removes_dist_and_deployed() {
        let dir = tempdir().unwrap();
        let resources = dir.path().join("resources");
        let layout = layout(dir.path(), Some(&resources));
        populate(&layout.dist_dir);
        populate(layout.deployed_dir.as_ref().unwrap());

        let result = CleanUseCase::new(LocalFs::new())
            .execute_confirmed(&layout, &CleanOptions::new())
            .unwrap();

        assert_eq!(result.removed.len(), 2);
        assert!(!layout.dist_dir.exists());
        assert!(!layout.deployed_dir.unwrap().exists());
        assert!(resources.exists());
    }

    #[test]
    fn dist_only_keeps_deployed() {
        let dir = tempdir().unwrap();
        let resources = dir.path().join("resources");
        let layout = layout(dir.path(), Some(&resources));
        populate(&layout.dist_dir);
        populate(layout.deployed_dir.as_ref().unwrap());

        let options = CleanOptions::new().with_dist_only(true);
        let result = CleanUseCase::new(LocalFs::new())
            .execute_confirmed(&layout, &options)
            .unwrap();

        assert_eq!(result.removed, vec![layout.dist_dir.clone()]);
        assert!(layout.deployed_dir.unwrap().exists());
    }

    #[test]
    fn missing_directories_are_skipped() {
        let dir = tempdir().unwrap();
        let resources = dir.path().join("resources");
        let layout = layout(dir.path(), Some(&resources));

        let result = CleanUseCase::new(LocalFs::new())
            .execute_confirmed(&layout, &CleanOptions::new())
            .unwrap();

        assert!(result.is_empty());
        assert_eq!(result.skipped.len(), 2);
        assert!(result.skipped.iter().all(|s| s.reason == SkipReason::Missing));
    }

    #[test]
    fn unresolved_resource_root_is_reported() {
        let dir = tempdir().unwrap();
        let layout = layout(dir.path(), None);
        populate(&layout.dist_dir);

        let result = CleanUseCase::new(LocalFs::new()).execute(&layout, &CleanOptions::new());

        assert_eq!(result.removed, vec![layout.dist_dir.clone()]);
        assert_eq!(result.skipped[0].reason, SkipReason::Unresolved);
    }

    #[test]
    fn preview_and_dry_run_delete_nothing() {
        let dir = tempdir().unwrap();
        let resources = dir.path().join("resources");
        let layout = layout(dir.path(), Some(&resources));
        populate(&layout.dist_dir);

        let uc = CleanUseCase::new(LocalFs::new());
        let preview = uc.execute(&layout, &CleanOptions::new());
        let dry = uc
            .execute_confirmed(&layout, &CleanOptions::new().with_dry_run(true))
            .unwrap();

        assert_eq!(preview.removed, vec![layout.dist_dir.clone()]);
        assert!(dry.dry_run);
        assert_eq!(dry.removed, preview.removed);
        assert!(layout.dist_dir.exists());
    }
}
