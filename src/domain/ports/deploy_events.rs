//! Progress reporting out of `DeployUseCase`.
//!
//! The use case emits events in step order; the binary renders them as
//! console lines or NDJSON.

use std::path::PathBuf;

/// One step of an artifact deploy
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeployEvent {
    /// Deploy of one artifact started
    Started {
        artifact: String,
        dist_dir: PathBuf,
        deployed_dir: PathBuf,
        dry_run: bool,
    },

    /// Build tool is about to run
    BuildStarted { artifact: String, command: String },

    /// Build tool exited successfully
    BuildFinished { artifact: String },

    /// Build was skipped (`--skip-build` or dry run)
    BuildSkipped { artifact: String },

    /// An existing directory is about to be replaced
    Replacing { artifact: String, path: PathBuf },

    /// Build output was copied into the dist directory
    Staged {
        artifact: String,
        path: PathBuf,
        files: usize,
    },

    /// Metadata file copied into the dist directory
    MetadataCopied { artifact: String, path: PathBuf },

    /// Dist directory was mirrored into the resource root
    Deployed {
        artifact: String,
        path: PathBuf,
        files: usize,
    },

    /// Deploy of one artifact completed
    Completed {
        artifact: String,
        files: usize,
        dry_run: bool,
    },
}

impl DeployEvent {
    /// Artifact the event belongs to
    pub fn artifact(&self) -> &str {
        match self {
            DeployEvent::Started { artifact, .. }
            | DeployEvent::BuildStarted { artifact, .. }
            | DeployEvent::BuildFinished { artifact }
            | DeployEvent::BuildSkipped { artifact }
            | DeployEvent::Replacing { artifact, .. }
            | DeployEvent::Staged { artifact, .. }
            | DeployEvent::MetadataCopied { artifact, .. }
            | DeployEvent::Deployed { artifact, .. }
            | DeployEvent::Completed { artifact, .. } => artifact,
        }
    }
}

/// Receiver of deploy progress. Called synchronously from the deploy, so
/// implementations should not block on slow output.
pub trait DeployEventSink: Send + Sync {
    fn on_event(&self, event: DeployEvent);
}

/// Discards every event
pub struct NoopEventSink;

impl DeployEventSink for NoopEventSink {
    fn on_event(&self, _event: DeployEvent) {}
}
