//! Deploy Options
//!
//! Configuration types for deploy operations.

use std::path::PathBuf;

use crate::config::Config;
use crate::domain::value_objects::{ExcludePatterns, ReplaceStrategy};

/// Options for the deploy use case
#[derive(Debug, Clone)]
pub struct DeployOptions {
    /// Repository root all project paths are relative to
    pub repo_root: PathBuf,
    /// Host resource directory (`$ALTV_SERVER_ROOT/resources`)
    pub resource_root: PathBuf,
    /// Staging directory relative to the repository root
    pub dist_dir: PathBuf,
    /// Build tool executable
    pub tool: String,
    /// Build tool verb
    pub verb: String,
    /// Build configuration
    pub configuration: String,
    /// Pass `--no-build` to the tool
    pub no_build: bool,
    /// Skip the build step entirely
    pub skip_build: bool,
    /// How existing directories are replaced
    pub strategy: ReplaceStrategy,
    /// Entries of the build output that are not staged
    pub exclude: ExcludePatterns,
    /// Dry run (no build, no filesystem changes)
    pub dry_run: bool,
}

impl DeployOptions {
    pub fn new(repo_root: impl Into<PathBuf>, resource_root: impl Into<PathBuf>) -> Self {
        Self::from_config(&Config::default(), repo_root, resource_root)
    }

    /// Options seeded from a loaded config
    pub fn from_config(
        config: &Config,
        repo_root: impl Into<PathBuf>,
        resource_root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            repo_root: repo_root.into(),
            resource_root: resource_root.into(),
            dist_dir: config.deploy.dist_dir.clone(),
            tool: config.build.tool.clone(),
            verb: config.build.verb.clone(),
            configuration: config.build.configuration.clone(),
            no_build: config.build.no_build,
            skip_build: false,
            strategy: config.deploy.strategy,
            exclude: ExcludePatterns::empty(),
            dry_run: false,
        }
    }

    pub fn with_tool(mut self, tool: impl Into<String>) -> Self {
        self.tool = tool.into();
        self
    }

    pub fn with_configuration(mut self, configuration: impl Into<String>) -> Self {
        self.configuration = configuration.into();
        self
    }

    pub fn with_skip_build(mut self, skip_build: bool) -> Self {
        self.skip_build = skip_build;
        self
    }

    pub fn with_strategy(mut self, strategy: ReplaceStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_exclude(mut self, exclude: ExcludePatterns) -> Self {
        self.exclude = exclude;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}
