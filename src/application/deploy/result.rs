//! Deploy Result
//!
//! Result types for deploy operations.

use std::path::PathBuf;

/// Summary of one artifact's deploy run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployReport {
    /// Artifact name
    pub artifact: String,
    /// `<repo>/dist/<artifact>`
    pub dist_dir: PathBuf,
    /// `<resource root>/<artifact>`
    pub deployed_dir: PathBuf,
    /// Whether the build tool ran
    pub built: bool,
    /// Files copied from the build output (excluding the metadata file)
    pub staged_files: usize,
    /// Files in the deployed directory
    pub deployed_files: usize,
    /// Whether a previous deployed directory was replaced
    pub replaced_existing: bool,
    /// Nothing was changed on disk
    pub dry_run: bool,
}
