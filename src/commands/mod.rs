//! Command handlers
//!
//! Each handler loads what it needs through `Workspace`, runs the library
//! use cases and renders human or NDJSON output.

pub mod clean;
pub mod deploy;
pub mod list;
pub mod repo_root;
pub mod verify;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use livecity_deploy::domain::entities::{select_artifacts, Artifact};
use livecity_deploy::Config;

use crate::cli::Cli;
use crate::ui::context::UiContext;
use crate::ui::output::print_config_warnings;

/// Everything resolved once per invocation
pub struct Workspace {
    pub repo_root: PathBuf,
    pub config: Config,
    pub ui: UiContext,
}

impl Workspace {
    /// Resolve the repository root, load the config and detect the terminal.
    pub fn load(cli: &Cli) -> Result<Self> {
        let repo_root = match &cli.repo_root {
            Some(path) => path.clone(),
            None => {
                let cwd = std::env::current_dir().context("failed to read current directory")?;
                repo_root::discover_repo_root(&cwd)
            }
        };

        let (config, warnings) = Config::load_for_repo(&repo_root, cli.config.as_deref())?;
        let ui = UiContext::new(cli.json, cli.verbose, cli.color, &config);
        print_config_warnings(&warnings, &ui);

        Ok(Self {
            repo_root,
            config,
            ui,
        })
    }

    /// Configured artifacts matching `queries` (all when empty)
    pub fn select(&self, queries: &[String]) -> Result<Vec<Artifact>> {
        let artifacts = self.config.artifacts()?;
        let selected = select_artifacts(&artifacts, queries)?;
        Ok(selected.into_iter().cloned().collect())
    }

    pub fn dist_dir(&self) -> &Path {
        &self.config.deploy.dist_dir
    }
}

fn names(artifacts: &[Artifact]) -> Vec<&str> {
    artifacts.iter().map(|a| a.name.as_str()).collect()
}
