//! List command handler

use std::path::Path;

use anyhow::Result;

use livecity_deploy::domain::value_objects::DeployLayout;
use livecity_deploy::CommandBuildRunner;

use super::Workspace;
use crate::ui::json;
use crate::ui::views::list::{render_artifact, render_list_header};

/// Execute the list command. A missing resource root is shown, never fatal.
pub fn cmd_list(ws: &Workspace, resource_root: Option<&Path>) -> Result<()> {
    let artifacts = ws.config.artifacts()?;
    let resource_root = ws.config.resource_root(resource_root).ok();
    let tool = &ws.config.build.tool;
    let tool_found = CommandBuildRunner::check_available(tool);
    let ui = ws.ui;

    if ui.json {
        json::emit(&serde_json::json!({
            "event": "start",
            "command": "list",
            "repo_root": ws.repo_root.display().to_string(),
            "resource_root": resource_root.as_ref().map(|p| p.display().to_string()),
            "build_tool": tool,
            "build_tool_found": tool_found,
        }))?;
    } else {
        print!(
            "{}",
            render_list_header(
                &ws.repo_root,
                resource_root.as_deref(),
                tool,
                tool_found,
                ui.color,
                ui.unicode,
            )
        );
    }

    for artifact in &artifacts {
        let layout = DeployLayout::resolve(
            artifact,
            &ws.repo_root,
            ws.dist_dir(),
            resource_root.as_deref(),
            &ws.config.build.configuration,
        );

        if ui.json {
            json::emit(&layout_to_json(&layout, &artifact.aliases))?;
        } else {
            println!();
            print!(
                "{}",
                render_artifact(&layout, &artifact.aliases, ui.color, ui.unicode)
            );
        }
    }

    if ui.json {
        json::emit(&serde_json::json!({
            "event": "complete",
            "command": "list",
            "artifacts": artifacts.len(),
        }))?;
    }

    Ok(())
}

fn layout_to_json(layout: &DeployLayout, aliases: &[String]) -> serde_json::Value {
    serde_json::json!({
        "event": "artifact",
        "command": "list",
        "name": layout.name,
        "aliases": aliases,
        "project": layout.project_file.display().to_string(),
        "build_output": layout.build_output_dir.display().to_string(),
        "metadata": layout.metadata_source.display().to_string(),
        "dist_dir": layout.dist_dir.display().to_string(),
        "deployed_dir": layout.deployed_dir.as_ref().map(|p| p.display().to_string()),
    })
}
