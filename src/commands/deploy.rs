//! Deploy command handler

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;

use livecity_deploy::domain::ports::DeployEventSink;
use livecity_deploy::domain::value_objects::ReplaceStrategy;
use livecity_deploy::{
    CommandBuildRunner, DeployOptions, DeployReport, DeployUseCase, JsonEventSink, LocalFs,
};

use super::{names, Workspace};
use crate::ui::views::deploy::{render_deploy_header, render_deploy_summary, ConsoleDeploySink};

/// Flags of `livecity-deploy deploy`
#[derive(Debug, Clone, Default)]
pub struct DeployArgs {
    pub artifacts: Vec<String>,
    pub skip_build: bool,
    pub dry_run: bool,
    pub resource_root: Option<PathBuf>,
    pub configuration: Option<String>,
    pub strategy: Option<ReplaceStrategy>,
}

/// Execute the deploy command
///
/// Artifacts are deployed in order; the first failure stops the run.
pub fn cmd_deploy(ws: &Workspace, args: &DeployArgs) -> Result<()> {
    // Everything that can fail on configuration is resolved before any build
    let artifacts = ws.select(&args.artifacts)?;
    let resource_root = ws.config.resource_root(args.resource_root.as_deref())?;
    let exclude = ws.config.exclude_patterns()?;

    let mut options = DeployOptions::from_config(&ws.config, &ws.repo_root, &resource_root)
        .with_skip_build(args.skip_build)
        .with_dry_run(args.dry_run)
        .with_exclude(exclude);
    if let Some(configuration) = &args.configuration {
        options = options.with_configuration(configuration);
    }
    if let Some(strategy) = args.strategy {
        options = options.with_strategy(strategy);
    }

    let ui = ws.ui;
    if !ui.json {
        print!(
            "{}",
            render_deploy_header(
                &names(&artifacts),
                &resource_root,
                &options.configuration,
                &modes(&options),
                ui.color,
                ui.unicode,
            )
        );
        println!();
    }

    let sink: Arc<dyn DeployEventSink> = if ui.json {
        Arc::new(JsonEventSink::stdout())
    } else {
        Arc::new(ConsoleDeploySink::new(ui))
    };

    let runner = CommandBuildRunner::new().with_quiet_stdout(ui.json);
    let use_case = DeployUseCase::new(LocalFs::new(), runner);

    let mut reports: Vec<DeployReport> = Vec::with_capacity(artifacts.len());
    for artifact in &artifacts {
        let report = use_case.execute_with_events(artifact, &options, sink.clone())?;
        reports.push(report);
    }

    if !ui.json {
        println!();
        print!("{}", render_deploy_summary(&reports, ui.color, ui.unicode));
    }

    Ok(())
}

/// Header lines for non-default behavior
fn modes(options: &DeployOptions) -> Vec<String> {
    let mut modes = Vec::new();
    if options.dry_run {
        modes.push("dry run".to_string());
    } else if options.skip_build {
        modes.push("skip build".to_string());
    }
    if options.strategy != ReplaceStrategy::default() {
        modes.push(format!("{} replace", options.strategy));
    }
    modes
}
