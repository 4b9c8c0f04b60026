//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations.
//! Symlinks are followed everywhere: a link to a file is copied as a regular
//! file, a link to a directory is copied as a directory.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::ports::FileSystem;
use crate::domain::services::TreeManifest;
use crate::domain::value_objects::{ContentHash, ExcludePatterns};
use crate::error::{DeployError, DeployResult};

/// Local file system implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    pub fn new() -> Self {
        Self
    }
}

/// A regular file found while walking a tree
struct WalkEntry {
    abs: PathBuf,
    rel: PathBuf,
}

/// Walk `root` depth-first in name order, returning directories (relative)
/// and files. Excluded entries are pruned.
fn walk(
    root: &Path,
    exclude: &ExcludePatterns,
) -> DeployResult<(Vec<PathBuf>, Vec<WalkEntry>)> {
    if !root.is_dir() {
        return Err(DeployError::SourceNotFound {
            path: root.to_path_buf(),
        });
    }

    let mut dirs = Vec::new();
    let mut files = Vec::new();
    let mut stack = vec![PathBuf::new()];

    while let Some(rel_dir) = stack.pop() {
        let abs_dir = root.join(&rel_dir);
        let mut entries = fs::read_dir(&abs_dir)
            .map_err(|e| DeployError::fs("read directory", &abs_dir, e))?
            .collect::<io::Result<Vec<_>>>()
            .map_err(|e| DeployError::fs("read directory", &abs_dir, e))?;
        entries.sort_by_key(|e| e.file_name());

        let mut subdirs = Vec::new();
        for entry in entries {
            let abs = entry.path();
            let rel = rel_dir.join(entry.file_name());
            let meta = fs::metadata(&abs).map_err(|e| DeployError::fs("stat", &abs, e))?;

            if exclude.is_excluded(&rel, meta.is_dir()) {
                continue;
            }

            if meta.is_dir() {
                dirs.push(rel.clone());
                subdirs.push(rel);
            } else {
                files.push(WalkEntry { abs, rel });
            }
        }

        // Reverse so the stack pops in name order
        stack.extend(subdirs.into_iter().rev());
    }

    Ok((dirs, files))
}

impl FileSystem for LocalFs {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn create_dir_all(&self, path: &Path) -> DeployResult<()> {
        fs::create_dir_all(path).map_err(|e| DeployError::fs("create directory", path, e))
    }

    fn remove_dir_all(&self, path: &Path) -> DeployResult<()> {
        fs::remove_dir_all(path).map_err(|e| DeployError::fs("remove", path, e))
    }

    fn copy_file(&self, from: &Path, to: &Path) -> DeployResult<u64> {
        if !from.is_file() {
            return Err(DeployError::SourceNotFound {
                path: from.to_path_buf(),
            });
        }
        if let Some(parent) = to.parent() {
            self.create_dir_all(parent)?;
        }
        fs::copy(from, to).map_err(|e| DeployError::fs("copy", from, e))
    }

    fn copy_tree(&self, from: &Path, to: &Path, exclude: &ExcludePatterns) -> DeployResult<usize> {
        let (dirs, files) = walk(from, exclude)?;

        self.create_dir_all(to)?;
        for dir in &dirs {
            self.create_dir_all(&to.join(dir))?;
        }
        for file in &files {
            let dest = to.join(&file.rel);
            fs::copy(&file.abs, &dest).map_err(|e| DeployError::fs("copy", &file.abs, e))?;
        }

        Ok(files.len())
    }

    fn rename(&self, from: &Path, to: &Path) -> DeployResult<()> {
        fs::rename(from, to).map_err(|e| DeployError::fs("rename", from, e))
    }

    fn create_staging_dir(&self, dest: &Path) -> DeployResult<PathBuf> {
        let parent = dest
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        self.create_dir_all(parent)?;

        let name = dest
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "deploy".to_string());

        let dir = tempfile::Builder::new()
            .prefix(&format!(".{}.staging-", name))
            .tempdir_in(parent)
            .map_err(|e| DeployError::fs("create staging directory in", parent, e))?;

        Ok(dir.keep())
    }

    fn count_files(&self, root: &Path, exclude: &ExcludePatterns) -> DeployResult<usize> {
        walk(root, exclude).map(|(_, files)| files.len())
    }

    fn manifest(&self, root: &Path) -> DeployResult<TreeManifest> {
        let (_, files) = walk(root, &ExcludePatterns::empty())?;
        files
            .into_iter()
            .map(|entry| {
                let file =
                    fs::File::open(&entry.abs).map_err(|e| DeployError::fs("open", &entry.abs, e))?;
                let hash = ContentHash::from_reader(io::BufReader::new(file))
                    .map_err(|e| DeployError::fs("read", &entry.abs, e))?;
                Ok((entry.rel, hash))
            })
            .collect()
    }
}
