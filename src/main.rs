//! livecity-deploy - build and deploy LiveCity resources to a local alt:V server
//!
//! Usage: livecity-deploy <COMMAND>
//!
//! Commands:
//!   deploy  Publish, stage into dist/ and copy into the server's resources
//!   verify  Check that deployed resources match dist/
//!   clean   Remove staged and deployed directories
//!   list    Show configured artifacts and their resolved paths

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod ui;

use cli::{Cli, Commands};
use commands::clean::{cmd_clean, CleanArgs};
use commands::deploy::{cmd_deploy, DeployArgs};
use commands::list::cmd_list;
use commands::verify::cmd_verify;
use commands::Workspace;

fn main() {
    let cli = Cli::parse();
    let json = cli.json;

    if let Err(err) = run(cli) {
        ui::error::print_error(&err, json);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let ws = Workspace::load(&cli)?;

    match cli.command {
        Commands::Deploy {
            selection,
            skip_build,
            dry_run,
            resource_root,
            configuration,
            strategy,
        } => cmd_deploy(
            &ws,
            &DeployArgs {
                artifacts: selection.queries().to_vec(),
                skip_build,
                dry_run,
                resource_root,
                configuration,
                strategy,
            },
        ),
        Commands::Verify {
            selection,
            resource_root,
        } => cmd_verify(&ws, selection.queries(), resource_root.as_deref()),
        Commands::Clean {
            selection,
            dist_only,
            dry_run,
            yes,
            resource_root,
        } => cmd_clean(
            &ws,
            &CleanArgs {
                artifacts: selection.queries().to_vec(),
                dist_only,
                dry_run,
                yes,
                resource_root,
            },
        ),
        Commands::List { resource_root } => cmd_list(&ws, resource_root.as_deref()),
    }
}
