//! Subprocess build runner
//!
//! Invokes the build tool directly (no shell), inheriting the terminal so the
//! tool's own progress output stays visible, and checks the exit status.

use std::io;
use std::process::{Command, Stdio};

use crate::domain::ports::{BuildOutcome, BuildRequest, BuildRunner};
use crate::error::{DeployError, DeployResult};

/// Runs the build tool as a child process and waits for it.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandBuildRunner {
    /// Send the tool's stdout to stderr (keeps stdout clean for `--json`)
    quiet_stdout: bool,
}

impl CommandBuildRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quiet_stdout(mut self, quiet: bool) -> Self {
        self.quiet_stdout = quiet;
        self
    }

    /// Check if the tool can be started at all
    pub fn check_available(tool: &str) -> bool {
        Command::new(tool)
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|s| s.success())
            .unwrap_or(false)
    }
}

impl BuildRunner for CommandBuildRunner {
    fn run(&self, request: &BuildRequest) -> DeployResult<BuildOutcome> {
        let mut cmd = Command::new(&request.tool);
        cmd.args(request.args()).stdin(Stdio::null());

        if self.quiet_stdout {
            cmd.stdout(Stdio::from(io::stderr())).stderr(Stdio::inherit());
        } else {
            cmd.stdout(Stdio::inherit()).stderr(Stdio::inherit());
        }

        let status = cmd.status().map_err(|source| DeployError::BuildSpawn {
            command: request.to_string(),
            source,
        })?;

        if !status.success() {
            return Err(DeployError::BuildFailed {
                command: request.to_string(),
                code: status.code(),
            });
        }

        Ok(BuildOutcome {
            exit_code: status.code(),
        })
    }
}
