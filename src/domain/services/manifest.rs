//! Tree manifest
//!
//! Relative path → content hash for every regular file under a root, and the
//! comparison used by `verify`.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::ContentHash;

/// Snapshot of a directory tree's file contents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeManifest {
    entries: BTreeMap<PathBuf, ContentHash>,
}

impl TreeManifest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, rel_path: impl Into<PathBuf>, hash: ContentHash) {
        self.entries.insert(rel_path.into(), hash);
    }

    pub fn get(&self, rel_path: &Path) -> Option<&ContentHash> {
        self.entries.get(rel_path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Relative paths in sorted order
    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.entries.keys().map(PathBuf::as_path)
    }

    /// Compare `self` (expected) against `actual`.
    pub fn diff(&self, actual: &TreeManifest) -> ManifestDiff {
        let mut diff = ManifestDiff::default();

        for (path, hash) in &self.entries {
            match actual.entries.get(path) {
                None => diff.missing.push(path.clone()),
                Some(other) if other != hash => diff.changed.push(path.clone()),
                Some(_) => {}
            }
        }

        diff.extra = actual
            .entries
            .keys()
            .filter(|path| !self.entries.contains_key(*path))
            .cloned()
            .collect();

        diff
    }
}

impl FromIterator<(PathBuf, ContentHash)> for TreeManifest {
    fn from_iter<I: IntoIterator<Item = (PathBuf, ContentHash)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Differences between an expected and an actual tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManifestDiff {
    /// Expected but absent
    pub missing: Vec<PathBuf>,
    /// Present but not expected
    pub extra: Vec<PathBuf>,
    /// Present in both with different content
    pub changed: Vec<PathBuf>,
}

impl ManifestDiff {
    pub fn is_clean(&self) -> bool {
        self.missing.is_empty() && self.extra.is_empty() && self.changed.is_empty()
    }

    pub fn len(&self) -> usize {
        self.missing.len() + self.extra.len() + self.changed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.is_clean()
    }
}
