//! CLI Argument Parsing
//!
//! Global flags (--json, --color, --verbose, --repo-root, --config) are
//! inherited by all subcommands.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use livecity_deploy::domain::value_objects::ReplaceStrategy;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// livecity-deploy - build and deploy LiveCity resources to a local alt:V server
#[derive(Parser, Debug)]
#[command(name = "livecity-deploy")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Emit NDJSON events instead of human output
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v paths, -vv build command)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Repository root (default: nearest ancestor with livecity-deploy.toml or .git)
    #[arg(long, global = true, value_name = "PATH")]
    pub repo_root: Option<PathBuf>,

    /// Config file (default: <repo root>/livecity-deploy.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Artifact selection shared by deploy/verify/clean
#[derive(Args, Debug, Clone, Default)]
pub struct ArtifactArgs {
    /// Artifact names or aliases (client, server); all when omitted
    #[arg(value_name = "ARTIFACT", conflicts_with = "all")]
    pub artifacts: Vec<String>,

    /// Act on every configured artifact
    #[arg(long)]
    pub all: bool,
}

impl ArtifactArgs {
    /// Names to select; empty means all
    pub fn queries(&self) -> &[String] {
        if self.all {
            &[]
        } else {
            &self.artifacts
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Publish, stage into dist/ and copy into the server's resources
    Deploy {
        #[command(flatten)]
        selection: ArtifactArgs,

        /// Deploy the existing build output without running the build tool
        #[arg(long)]
        skip_build: bool,

        /// Show what would be done without building or touching any directory
        #[arg(long)]
        dry_run: bool,

        /// Resource directory (overrides $ALTV_SERVER_ROOT/resources)
        #[arg(long, value_name = "PATH")]
        resource_root: Option<PathBuf>,

        /// Build configuration passed to `-c`
        #[arg(long, value_name = "NAME")]
        configuration: Option<String>,

        /// How existing directories are replaced (atomic, in-place)
        #[arg(long)]
        strategy: Option<ReplaceStrategy>,
    },

    /// Check that deployed resources match dist/
    Verify {
        #[command(flatten)]
        selection: ArtifactArgs,

        /// Resource directory (overrides $ALTV_SERVER_ROOT/resources)
        #[arg(long, value_name = "PATH")]
        resource_root: Option<PathBuf>,
    },

    /// Remove staged and deployed directories
    Clean {
        #[command(flatten)]
        selection: ArtifactArgs,

        /// Only remove dist/<artifact>
        #[arg(long)]
        dist_only: bool,

        /// Show what would be removed
        #[arg(long)]
        dry_run: bool,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,

        /// Resource directory (overrides $ALTV_SERVER_ROOT/resources)
        #[arg(long, value_name = "PATH")]
        resource_root: Option<PathBuf>,
    },

    /// Show configured artifacts and their resolved paths
    List {
        /// Resource directory (overrides $ALTV_SERVER_ROOT/resources)
        #[arg(long, value_name = "PATH")]
        resource_root: Option<PathBuf>,
    },
}
