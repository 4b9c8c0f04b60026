//! Clean result types

use std::path::PathBuf;

/// Reason why a directory was skipped during clean
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Directory does not exist
    Missing,
    /// Resource root could not be resolved
    Unresolved,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::Missing => write!(f, "not present"),
            SkipReason::Unresolved => write!(f, "resource root not set"),
        }
    }
}

/// A directory that was skipped during clean
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedDir {
    pub path: PathBuf,
    pub reason: SkipReason,
}

/// Result of a clean operation
#[derive(Debug, Clone, Default)]
pub struct CleanResult {
    /// Artifact the directories belong to
    pub artifact: String,
    /// Directories removed (or that would be removed in a dry run / preview)
    pub removed: Vec<PathBuf>,
    /// Directories left alone
    pub skipped: Vec<SkippedDir>,
    /// Nothing was deleted
    pub dry_run: bool,
}

impl CleanResult {
    pub fn new(artifact: impl Into<String>) -> Self {
        Self {
            artifact: artifact.into(),
            ..Self::default()
        }
    }

    /// Nothing to remove
    pub fn is_empty(&self) -> bool {
        self.removed.is_empty()
    }
}
