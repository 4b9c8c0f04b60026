//! FileSystem port - abstraction over the directory-tree operations a deploy needs
//!
//! Implementations:
//! - `LocalFs` - standard disk I/O
//! - test doubles that inject failures

use std::path::{Path, PathBuf};

use crate::domain::services::TreeManifest;
use crate::domain::value_objects::ExcludePatterns;
use crate::error::DeployResult;

/// Abstract file system interface
pub trait FileSystem {
    /// Check if a path exists (following symlinks)
    fn exists(&self, path: &Path) -> bool;

    /// Check if a path is a directory (following symlinks)
    fn is_dir(&self, path: &Path) -> bool;

    /// Create directory and parents
    fn create_dir_all(&self, path: &Path) -> DeployResult<()>;

    /// Recursively delete a directory and everything below it
    fn remove_dir_all(&self, path: &Path) -> DeployResult<()>;

    /// Copy one file, overwriting the destination. Returns bytes copied.
    fn copy_file(&self, from: &Path, to: &Path) -> DeployResult<u64>;

    /// Recursively copy the contents of `from` into `to`, creating `to` if
    /// needed. Symlinks are followed. Entries matched by `exclude` (relative
    /// to `from`) are skipped. Returns the number of files copied.
    fn copy_tree(&self, from: &Path, to: &Path, exclude: &ExcludePatterns) -> DeployResult<usize>;

    /// Rename (move) a file or directory within one filesystem
    fn rename(&self, from: &Path, to: &Path) -> DeployResult<()>;

    /// Create a fresh, uniquely named hidden directory next to `dest`.
    ///
    /// The caller owns the returned directory and must remove or rename it.
    fn create_staging_dir(&self, dest: &Path) -> DeployResult<PathBuf>;

    /// Count files `copy_tree` would copy
    fn count_files(&self, root: &Path, exclude: &ExcludePatterns) -> DeployResult<usize>;

    /// Hash every file under `root`
    fn manifest(&self, root: &Path) -> DeployResult<TreeManifest>;
}
