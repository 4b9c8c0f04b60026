//! Test environment builder for isolated livecity-deploy testing.
//!
//! Provides `TestEnv` - a temp repository root and a temp alt:V server root,
//! plus helpers to lay out published build output and run the CLI.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Environment variables the CLI reads; cleared before every run.
const ISOLATED_VARS: &[&str] = &[
    "ALTV_SERVER_ROOT",
    "LIVECITY_BUILD_TOOL",
    "LIVECITY_BUILD_CONFIGURATION",
    "LIVECITY_REPLACE_STRATEGY",
    "GITHUB_ACTIONS",
    "CI",
];

/// Result of running a livecity-deploy CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Check if command succeeded
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse stdout as NDJSON
    pub fn json_lines(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| {
                serde_json::from_str(l)
                    .unwrap_or_else(|e| panic!("invalid NDJSON line {:?}: {}", l, e))
            })
            .collect()
    }
}

/// Isolated repository + server root.
pub struct TestEnv {
    /// Temporary repository root (contains `.git/`)
    pub repo_root: TempDir,
    /// Temporary alt:V server root (`ALTV_SERVER_ROOT`)
    pub server_root: TempDir,
    /// Directory holding the fake build tool
    tools_dir: TempDir,
    /// Build tool handed to the CLI via `LIVECITY_BUILD_TOOL`
    build_tool: Option<PathBuf>,
    bin: PathBuf,
}

impl TestEnv {
    /// Empty repository with a `.git` marker and an empty server root.
    pub fn new() -> Self {
        let repo_root = TempDir::new().expect("Failed to create repo temp dir");
        let server_root = TempDir::new().expect("Failed to create server temp dir");
        let tools_dir = TempDir::new().expect("Failed to create tools temp dir");
        std::fs::create_dir_all(repo_root.path().join(".git")).expect("Failed to create .git");

        TestEnv {
            repo_root,
            server_root,
            tools_dir,
            build_tool: None,
            bin: PathBuf::from(env!("CARGO_BIN_EXE_livecity-deploy")),
        }
    }

    /// Repository with published output and `resource.toml` for both presets.
    pub fn with_published_presets() -> Self {
        let env = Self::new();
        env.publish("Client", &[("LiveCity.Client.dll", "client v1")]);
        env.write_repo_file("Client/resource.toml", "type = \"csharp\"\nclient-main = \"LiveCity.Client.dll\"\n");
        env.publish("Server", &[("LiveCity.Server.dll", "server v1")]);
        env.write_repo_file("Server/resource.toml", "type = \"csharp\"\nmain = \"LiveCity.Server.dll\"\n");
        env
    }

    /// Get path relative to the repository root
    pub fn repo_path(&self, relative: &str) -> PathBuf {
        self.repo_root.path().join(relative)
    }

    /// `<server root>/resources`
    pub fn resources_dir(&self) -> PathBuf {
        self.server_root.path().join("resources")
    }

    /// `<server root>/resources/<artifact>`
    pub fn deployed_dir(&self, artifact: &str) -> PathBuf {
        self.resources_dir().join(artifact)
    }

    /// `<repo>/dist/<artifact>`
    pub fn dist_dir(&self, artifact: &str) -> PathBuf {
        self.repo_path("dist").join(artifact)
    }

    /// Write a file to the repository
    pub fn write_repo_file(&self, relative_path: &str, content: &str) {
        write_file(&self.repo_path(relative_path), content);
    }

    /// Write files into `<project dir>/build/DebugLocal/publish/`
    pub fn publish(&self, project_dir: &str, files: &[(&str, &str)]) {
        let publish = self.repo_path(project_dir).join("build/DebugLocal/publish");
        std::fs::create_dir_all(&publish).expect("Failed to create publish dir");
        for (name, content) in files {
            write_file(&publish.join(name), content);
        }
    }

    /// Write a file under `<server root>/resources/`
    pub fn write_deployed_file(&self, relative_path: &str, content: &str) {
        write_file(&self.resources_dir().join(relative_path), content);
    }

    /// Install a shell script standing in for `dotnet`.
    ///
    /// It appends its arguments to `build.log` in the tools dir, exits with
    /// `FAKE_BUILD_EXIT` when set, and otherwise writes `Published.dll` into
    /// `<project dir>/build/<configuration>/publish/`.
    #[cfg(unix)]
    pub fn with_fake_build_tool(mut self) -> Self {
        use std::os::unix::fs::PermissionsExt;

        let script = self.tools_dir.path().join("fake-dotnet");
        let log = self.tools_dir.path().join("build.log");
        let body = format!(
            r#"#!/bin/sh
if [ "$1" = "--version" ]; then
  echo "8.0.0"
  exit 0
fi
echo "$@" >> "{log}"
if [ -n "$FAKE_BUILD_EXIT" ]; then
  echo "fake build failed" >&2
  exit "$FAKE_BUILD_EXIT"
fi
out="$(dirname "$2")/build/$4/publish"
mkdir -p "$out"
echo "published $4" > "$out/Published.dll"
echo "fake publish done"
"#,
            log = log.display()
        );
        std::fs::write(&script, body).expect("Failed to write fake build tool");
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to chmod fake build tool");

        self.build_tool = Some(script);
        self
    }

    /// Lines logged by the fake build tool
    pub fn build_log(&self) -> Vec<String> {
        std::fs::read_to_string(self.tools_dir.path().join("build.log"))
            .map(|s| s.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }

    /// Run the CLI from the repository root with `ALTV_SERVER_ROOT` set
    pub fn run(&self, args: &[&str]) -> TestResult {
        let server_root = self.server_root.path().display().to_string();
        self.run_with_env(args, &[("ALTV_SERVER_ROOT", &server_root)])
    }

    /// Run the CLI without `ALTV_SERVER_ROOT`
    pub fn run_without_server_root(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run the CLI from the repository root with extra env vars
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        self.run_from_with_env(self.repo_root.path(), args, env_vars)
    }

    /// Run the CLI from a specific directory with extra env vars
    pub fn run_from_with_env(
        &self,
        cwd: &Path,
        args: &[&str],
        env_vars: &[(&str, &str)],
    ) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(cwd).args(args);
        for var in ISOLATED_VARS {
            cmd.env_remove(var);
        }
        cmd.env("LIVECITY_NO_COLOR", "1").env("NO_COLOR", "1");

        match &self.build_tool {
            Some(tool) => cmd.env("LIVECITY_BUILD_TOOL", tool),
            None => cmd.env("LIVECITY_BUILD_TOOL", "livecity-deploy-test-missing-tool"),
        };

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute livecity-deploy");
        output_to_result(output)
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create directories");
    }
    std::fs::write(path, content).expect("Failed to write file");
}
