//! Verify Use Case
//!
//! Compares an artifact's deployed directory against its staged directory.

use std::path::{Path, PathBuf};

use crate::domain::ports::FileSystem;
use crate::domain::services::ManifestDiff;
use crate::error::{DeployError, DeployResult};

/// Outcome of comparing one artifact's trees
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyReport {
    pub artifact: String,
    pub dist_dir: PathBuf,
    pub deployed_dir: PathBuf,
    /// Files in the staged tree
    pub files: usize,
    pub diff: ManifestDiff,
}

impl VerifyReport {
    pub fn is_clean(&self) -> bool {
        self.diff.is_clean()
    }

    /// `Err(VerifyMismatch)` when the trees differ
    pub fn into_result(self) -> DeployResult<Self> {
        if self.is_clean() {
            Ok(self)
        } else {
            Err(DeployError::VerifyMismatch {
                artifact: self.artifact,
                differences: self.diff.len(),
            })
        }
    }
}

pub struct VerifyUseCase<FS>
where
    FS: FileSystem,
{
    fs: FS,
}

impl<FS> VerifyUseCase<FS>
where
    FS: FileSystem,
{
    pub fn new(fs: FS) -> Self {
        Self { fs }
    }

    /// Hash both trees and diff them. A missing directory is `SourceNotFound`.
    pub fn execute(
        &self,
        artifact: &str,
        dist_dir: &Path,
        deployed_dir: &Path,
    ) -> DeployResult<VerifyReport> {
        let expected = self.fs.manifest(dist_dir)?;
        let actual = self.fs.manifest(deployed_dir)?;

        Ok(VerifyReport {
            artifact: artifact.to_string(),
            dist_dir: dist_dir.to_path_buf(),
            deployed_dir: deployed_dir.to_path_buf(),
            files: expected.len(),
            diff: expected.diff(&actual),
        })
    }
}
