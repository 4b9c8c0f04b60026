//! Verify command handler

use std::path::Path;

use anyhow::Result;

use livecity_deploy::application::{VerifyReport, VerifyUseCase};
use livecity_deploy::domain::value_objects::DeployLayout;
use livecity_deploy::LocalFs;

use super::Workspace;
use crate::ui::json;
use crate::ui::views::verify::{render_verify_report, render_verify_summary};

/// Execute the verify command
///
/// Fails with `VerifyMismatch` for the first artifact whose trees differ.
pub fn cmd_verify(ws: &Workspace, queries: &[String], resource_root: Option<&Path>) -> Result<()> {
    let artifacts = ws.select(queries)?;
    let resource_root = ws.config.resource_root(resource_root)?;
    let ui = ws.ui;

    let use_case = VerifyUseCase::new(LocalFs::new());
    let mut reports = Vec::with_capacity(artifacts.len());

    for artifact in &artifacts {
        let layout = DeployLayout::resolve(
            artifact,
            &ws.repo_root,
            ws.dist_dir(),
            Some(&resource_root),
            &ws.config.build.configuration,
        );
        let deployed_dir = resource_root.join(&layout.name);
        let report = use_case.execute(&layout.name, &layout.dist_dir, &deployed_dir)?;

        if ui.json {
            json::emit(&report_to_json(&report))?;
        } else {
            print!("{}", render_verify_report(&report, ui.color, ui.unicode));
        }
        reports.push(report);
    }

    if ui.json {
        let status = if reports.iter().all(VerifyReport::is_clean) {
            "success"
        } else {
            "mismatch"
        };
        json::emit(&serde_json::json!({
            "event": "complete",
            "command": "verify",
            "status": status,
            "artifacts": reports.len(),
        }))?;
    } else {
        println!();
        print!("{}", render_verify_summary(&reports, ui.color, ui.unicode));
    }

    if let Some(report) = reports.into_iter().find(|r| !r.is_clean()) {
        report.into_result()?;
    }
    Ok(())
}

fn report_to_json(report: &VerifyReport) -> serde_json::Value {
    let paths = |paths: &[std::path::PathBuf]| -> Vec<String> {
        paths.iter().map(|p| p.display().to_string()).collect()
    };

    serde_json::json!({
        "event": "verified",
        "command": "verify",
        "artifact": report.artifact,
        "clean": report.is_clean(),
        "files": report.files,
        "dist_dir": report.dist_dir.display().to_string(),
        "deployed_dir": report.deployed_dir.display().to_string(),
        "missing": paths(&report.diff.missing),
        "extra": paths(&report.diff.extra),
        "changed": paths(&report.diff.changed),
    })
}
