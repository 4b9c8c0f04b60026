//! Error types for livecity-deploy
//!
//! Library code returns `DeployError`; the binary wraps it in `anyhow` and
//! downcasts when rendering.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for deploy operations
pub type DeployResult<T> = Result<T, DeployError>;

/// Main error type for deploy operations
#[derive(Error, Debug)]
pub enum DeployError {
    /// Required environment variable is unset or empty
    #[error("environment variable '{var}' is not set")]
    MissingEnvVar { var: String },

    /// Artifact name is not a single path component
    #[error("invalid artifact name '{name}': {reason}")]
    InvalidArtifactName { name: String, reason: String },

    /// Artifact requested on the command line is not configured
    #[error("unknown artifact '{name}' (available: {available})")]
    UnknownArtifact { name: String, available: String },

    /// Build tool could not be started
    #[error("failed to run build command `{command}`: {source}")]
    BuildSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Build tool exited unsuccessfully
    #[error("build failed: `{command}` exited with {}", describe_exit(.code))]
    BuildFailed { command: String, code: Option<i32> },

    /// Source directory or file does not exist
    #[error("source not found: {path}")]
    SourceNotFound { path: PathBuf },

    /// Filesystem operation failed
    #[error("failed to {op} {path}: {source}")]
    Fs {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Exclude pattern could not be compiled
    #[error("invalid exclude pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    /// Deployed tree differs from the staged tree
    #[error("{artifact}: deployed tree differs from staged tree ({differences} differences)")]
    VerifyMismatch { artifact: String, differences: usize },

    /// Operation was declined by the user
    #[error("aborted by user")]
    Aborted,
}

impl DeployError {
    /// Build an `Fs` error for `op` on `path`.
    pub fn fs(op: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DeployError::Fs {
            op,
            path: path.into(),
            source,
        }
    }

    /// Path the error refers to, if any
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            DeployError::SourceNotFound { path } | DeployError::Fs { path, .. } => Some(path),
            DeployError::InvalidConfig { file, .. } => Some(file),
            _ => None,
        }
    }
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {}", code),
        None => "no exit code (terminated by signal)".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_missing_env() {
        let err = DeployError::MissingEnvVar {
            var: "ALTV_SERVER_ROOT".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "environment variable 'ALTV_SERVER_ROOT' is not set"
        );
    }

    #[test]
    fn test_error_display_build_failed() {
        let err = DeployError::BuildFailed {
            command: "dotnet publish".to_string(),
            code: Some(3),
        };
        assert_eq!(
            err.to_string(),
            "build failed: `dotnet publish` exited with exit code 3"
        );

        let err = DeployError::BuildFailed {
            command: "dotnet publish".to_string(),
            code: None,
        };
        assert!(err.to_string().contains("terminated by signal"));
    }

    #[test]
    fn test_error_display_source_not_found() {
        let err = DeployError::SourceNotFound {
            path: PathBuf::from("Client/build/DebugLocal/publish"),
        };
        assert_eq!(
            err.to_string(),
            "source not found: Client/build/DebugLocal/publish"
        );
        assert!(err.path().is_some());
    }

    #[test]
    fn test_fs_helper_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = DeployError::fs("remove", "dist/livecity-client", io);
        assert!(err.to_string().starts_with("failed to remove dist/livecity-client"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
