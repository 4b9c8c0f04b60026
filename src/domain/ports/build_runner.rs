//! Build Runner port
//!
//! Runs the external build toolchain for one project.

use std::fmt;
use std::path::PathBuf;

use crate::error::DeployResult;

/// One invocation of the build tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildRequest {
    /// Executable (e.g. `dotnet`)
    pub tool: String,
    /// Verb passed first (e.g. `publish`)
    pub verb: String,
    /// Absolute path of the project file
    pub project_file: PathBuf,
    /// Build configuration (e.g. `DebugLocal`)
    pub configuration: String,
    /// Pass `--no-build` (publish already-compiled binaries)
    pub no_build: bool,
}

impl BuildRequest {
    /// Arguments after the executable, in invocation order
    pub fn args(&self) -> Vec<String> {
        let mut args = vec![
            self.verb.clone(),
            self.project_file.display().to_string(),
            "-c".to_string(),
            self.configuration.clone(),
        ];
        if self.no_build {
            args.push("--no-build".to_string());
        }
        args
    }
}

impl fmt::Display for BuildRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tool)?;
        for arg in self.args() {
            if arg.contains(' ') {
                write!(f, " \"{}\"", arg)?;
            } else {
                write!(f, " {}", arg)?;
            }
        }
        Ok(())
    }
}

/// Outcome of a successful build
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOutcome {
    pub exit_code: Option<i32>,
}

/// Runs builds synchronously.
///
/// Implementations return `DeployError::BuildSpawn` when the tool cannot be
/// started and `DeployError::BuildFailed` on an unsuccessful exit status.
pub trait BuildRunner {
    fn run(&self, request: &BuildRequest) -> DeployResult<BuildOutcome>;
}
