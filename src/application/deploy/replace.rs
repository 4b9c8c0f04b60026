//! Directory replacement
//!
//! Swaps a directory for freshly populated content using the configured
//! `ReplaceStrategy`.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::domain::ports::FileSystem;
use crate::domain::value_objects::ReplaceStrategy;
use crate::error::DeployResult;

/// Replace `dest` with a directory filled by `populate`.
///
/// `populate` receives the directory to fill and returns the number of files
/// it wrote.
///
/// - `Atomic`: `populate` fills a hidden sibling. Only after it succeeds is
///   the old `dest` moved aside, the sibling renamed into place, and the old
///   tree deleted. On failure the previous `dest` is left as it was.
/// - `InPlace`: `dest` is deleted, recreated empty, then filled.
pub fn replace_dir<FS, F>(
    fs: &FS,
    dest: &Path,
    strategy: ReplaceStrategy,
    populate: F,
) -> DeployResult<usize>
where
    FS: FileSystem + ?Sized,
    F: FnOnce(&Path) -> DeployResult<usize>,
{
    match strategy {
        ReplaceStrategy::InPlace => {
            if fs.exists(dest) {
                fs.remove_dir_all(dest)?;
            }
            fs.create_dir_all(dest)?;
            populate(dest)
        }
        ReplaceStrategy::Atomic => {
            let staging = fs.create_staging_dir(dest)?;

            let count = match populate(&staging) {
                Ok(count) => count,
                Err(err) => {
                    let _ = fs.remove_dir_all(&staging);
                    return Err(err);
                }
            };

            if let Err(err) = swap_into_place(fs, &staging, dest) {
                let _ = fs.remove_dir_all(&staging);
                return Err(err);
            }

            Ok(count)
        }
    }
}

fn swap_into_place<FS>(fs: &FS, staging: &Path, dest: &Path) -> DeployResult<()>
where
    FS: FileSystem + ?Sized,
{
    if !fs.exists(dest) {
        return fs.rename(staging, dest);
    }

    let backup = backup_path(staging);
    fs.rename(dest, &backup)?;

    if let Err(err) = fs.rename(staging, dest) {
        // Put the previous tree back
        let _ = fs.rename(&backup, dest);
        return Err(err);
    }

    fs.remove_dir_all(&backup)
}

/// `<staging>.old`; unique because the staging name is.
fn backup_path(staging: &Path) -> PathBuf {
    let mut name = OsString::from(staging.as_os_str());
    name.push(".old");
    PathBuf::from(name)
}
