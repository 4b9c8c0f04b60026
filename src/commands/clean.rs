//! Clean command handler
//!
//! Removes `dist/<artifact>` and `<resource root>/<artifact>`.

use std::path::PathBuf;

use anyhow::{bail, Result};
use dialoguer::Confirm;

use livecity_deploy::application::{CleanOptions, CleanResult, CleanUseCase};
use livecity_deploy::domain::value_objects::DeployLayout;
use livecity_deploy::{DeployError, LocalFs};

use super::{names, Workspace};
use crate::ui::json;
use crate::ui::views::clean::{render_clean_header, render_clean_preview, render_clean_result};

/// Flags of `livecity-deploy clean`
#[derive(Debug, Clone, Default)]
pub struct CleanArgs {
    pub artifacts: Vec<String>,
    pub dist_only: bool,
    pub dry_run: bool,
    pub yes: bool,
    pub resource_root: Option<PathBuf>,
}

/// Execute the clean command
pub fn cmd_clean(ws: &Workspace, args: &CleanArgs) -> Result<()> {
    let artifacts = ws.select(&args.artifacts)?;
    // An unresolved resource root skips deployed directories instead of failing
    let resource_root = if args.dist_only {
        None
    } else {
        ws.config.resource_root(args.resource_root.as_deref()).ok()
    };

    let options = CleanOptions::new()
        .with_dist_only(args.dist_only)
        .with_dry_run(args.dry_run);

    let layouts: Vec<DeployLayout> = artifacts
        .iter()
        .map(|artifact| {
            DeployLayout::resolve(
                artifact,
                &ws.repo_root,
                ws.dist_dir(),
                resource_root.as_deref(),
                &ws.config.build.configuration,
            )
        })
        .collect();

    let use_case = CleanUseCase::new(LocalFs::new());
    let previews: Vec<CleanResult> = layouts
        .iter()
        .map(|layout| use_case.execute(layout, &options))
        .collect();

    let ui = ws.ui;
    if !ui.json {
        print!(
            "{}",
            render_clean_header(
                &names(&artifacts),
                args.dist_only,
                args.dry_run,
                ui.color,
                ui.unicode
            )
        );
    }

    let removable: usize = previews.iter().map(|r| r.removed.len()).sum();
    let needs_confirmation = !args.yes && !args.dry_run && removable > 0;

    if needs_confirmation && !ui.interactive() {
        bail!("refusing to delete {} directories without confirmation; pass --yes", removable);
    }

    let has_details = previews
        .iter()
        .any(|r| !r.removed.is_empty() || !r.skipped.is_empty());
    if !ui.json && has_details {
        println!();
        print!("{}", render_clean_preview(&previews, ui.color));
        println!();
    }

    if needs_confirmation {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete {} directories?", removable))
            .default(false)
            .interact()?;
        if !confirmed {
            return Err(DeployError::Aborted.into());
        }
    }

    let results = if args.dry_run || removable == 0 {
        previews
    } else {
        layouts
            .iter()
            .map(|layout| use_case.execute_confirmed(layout, &options))
            .collect::<Result<Vec<_>, _>>()?
    };

    if ui.json {
        for result in &results {
            json::emit(&result_to_json(result))?;
        }
        json::emit(&serde_json::json!({
            "event": "complete",
            "command": "clean",
            "removed": results.iter().map(|r| r.removed.len()).sum::<usize>(),
            "dry_run": args.dry_run,
        }))?;
    } else {
        print!(
            "{}",
            render_clean_result(&results, args.dry_run, ui.color, ui.unicode)
        );
    }

    Ok(())
}

fn result_to_json(result: &CleanResult) -> serde_json::Value {
    let skipped: Vec<serde_json::Value> = result
        .skipped
        .iter()
        .map(|s| {
            serde_json::json!({
                "path": s.path.display().to_string(),
                "reason": s.reason.to_string(),
            })
        })
        .collect();

    serde_json::json!({
        "event": "cleaned",
        "command": "clean",
        "artifact": result.artifact,
        "removed": result.removed.iter().map(|p| p.display().to_string()).collect::<Vec<_>>(),
        "skipped": skipped,
        "dry_run": result.dry_run,
    })
}
