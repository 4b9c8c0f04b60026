//! Deploy command UI views

use std::io::{self, Write};
use std::path::Path;

use livecity_deploy::application::DeployReport;
use livecity_deploy::domain::ports::{DeployEvent, DeployEventSink};

use crate::ui::blocks::header::CommandHeader;
use crate::ui::blocks::summary::ResultSummary;
use crate::ui::context::UiContext;
use crate::ui::primitives::glyph::Glyph;
use crate::ui::primitives::text::ColoredText;

pub fn render_deploy_header(
    artifacts: &[&str],
    resource_root: &Path,
    configuration: &str,
    modes: &[String],
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Glyph::Artifact, "LiveCity Deploy")
        .row("Artifacts", artifacts.join(", "))
        .row("Resources", resource_root.display().to_string())
        .row("Configuration", configuration);
    if !modes.is_empty() {
        header = header.row("Mode", modes.join(", "));
    }
    header.render(supports_color, supports_unicode)
}

pub fn render_deploy_summary(
    reports: &[DeployReport],
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let dry_run = reports.iter().any(|r| r.dry_run);
    let mut summary = if dry_run {
        ResultSummary::success("Dry Run Complete")
    } else {
        ResultSummary::success("Deploy Complete")
    };

    summary.add_stat("artifacts", reports.len());
    summary.add_stat(
        if dry_run { "files would be deployed" } else { "files deployed" },
        reports.iter().map(|r| r.deployed_files).sum(),
    );

    for report in reports {
        summary.add_info(format!(
            "{} {} {}",
            report.artifact,
            if dry_run { "would go to" } else { "->" },
            report.deployed_dir.display()
        ));
    }

    if dry_run {
        summary.with_next_step("Run without --dry-run to apply.");
    } else {
        summary.with_next_step("Restart the resources on the alt:V server to load them.");
    }

    summary.render(supports_color, supports_unicode)
}

/// Renders deploy progress lines as events arrive.
pub struct ConsoleDeploySink {
    ui: UiContext,
}

impl ConsoleDeploySink {
    pub fn new(ui: UiContext) -> Self {
        Self { ui }
    }

    fn step(&self, glyph: Glyph, text: impl Into<String>) -> String {
        format!(
            "  {} {}",
            glyph.colored(self.ui.color, self.ui.unicode),
            text.into()
        )
    }

    fn path_suffix(&self, path: &Path) -> String {
        if self.ui.verbose == 0 {
            return String::new();
        }
        format!(
            " {}",
            ColoredText::dim(path.display().to_string()).render(self.ui.color)
        )
    }

    /// Text for one event; `None` when the event is hidden at this verbosity.
    pub fn render_event(&self, event: &DeployEvent) -> Option<String> {
        let line = match event {
            DeployEvent::Started {
                artifact, dry_run, ..
            } => {
                let label = if *dry_run {
                    format!("{} (dry run)", artifact)
                } else {
                    artifact.clone()
                };
                format!(
                    "{} {}",
                    Glyph::Active.colored(self.ui.color, self.ui.unicode),
                    ColoredText::info(label).bold().render(self.ui.color)
                )
            }
            DeployEvent::BuildStarted { command, .. } => {
                if self.ui.verbose < 2 {
                    return None;
                }
                self.step(Glyph::Build, ColoredText::dim(command.as_str()).render(self.ui.color))
            }
            DeployEvent::BuildFinished { .. } => self.step(Glyph::Done, "published"),
            DeployEvent::BuildSkipped { .. } => self.step(Glyph::Skipped, "build skipped"),
            DeployEvent::Replacing { path, .. } => {
                if self.ui.verbose == 0 {
                    return None;
                }
                self.step(Glyph::NextStep, format!("replacing{}", self.path_suffix(path)))
            }
            DeployEvent::Staged { path, files, .. } => self.step(
                Glyph::Done,
                format!("staged {} files{}", files, self.path_suffix(path)),
            ),
            DeployEvent::MetadataCopied { path, .. } => {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                self.step(Glyph::Done, format!("copied {}", name))
            }
            DeployEvent::Deployed { path, files, .. } => self.step(
                Glyph::Done,
                format!("deployed {} files{}", files, self.path_suffix(path)),
            ),
            DeployEvent::Completed { files, dry_run, .. } => {
                if !*dry_run {
                    return None;
                }
                self.step(Glyph::Skipped, format!("would deploy {} files", files))
            }
        };
        Some(line)
    }
}

impl DeployEventSink for ConsoleDeploySink {
    fn on_event(&self, event: DeployEvent) {
        if let Some(line) = self.render_event(&event) {
            let mut out = io::stdout().lock();
            let _ = writeln!(out, "{}", line);
            let _ = out.flush();
        }
    }
}
