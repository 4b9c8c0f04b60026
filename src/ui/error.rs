use livecity_deploy::DeployError;

use crate::ui::blocks::error::ErrorBlock;
use crate::ui::ci::Annotation;
use crate::ui::terminal::TerminalCapabilities;

/// Short machine-readable name for `--json` error events
fn error_kind(err: &DeployError) -> &'static str {
    match err {
        DeployError::MissingEnvVar { .. } => "missing_env_var",
        DeployError::InvalidArtifactName { .. } => "invalid_artifact_name",
        DeployError::UnknownArtifact { .. } => "unknown_artifact",
        DeployError::BuildSpawn { .. } => "build_spawn",
        DeployError::BuildFailed { .. } => "build_failed",
        DeployError::SourceNotFound { .. } => "source_not_found",
        DeployError::Fs { .. } => "filesystem",
        DeployError::InvalidConfig { .. } => "invalid_config",
        DeployError::InvalidPattern { .. } => "invalid_pattern",
        DeployError::VerifyMismatch { .. } => "verify_mismatch",
        DeployError::Aborted => "aborted",
    }
}

fn fix_hint(err: &DeployError) -> Option<String> {
    match err {
        DeployError::MissingEnvVar { var } => Some(format!(
            "Set {} to your alt:V server directory, or pass --resource-root <PATH>.",
            var
        )),
        DeployError::UnknownArtifact { .. } => {
            Some("Run `livecity-deploy list` to see the configured artifacts.".to_string())
        }
        DeployError::BuildSpawn { .. } => Some(
            "Install the .NET SDK, or point LIVECITY_BUILD_TOOL / [build] tool at it.".to_string(),
        ),
        DeployError::BuildFailed { .. } => Some(
            "Publish runs with --no-build; compile the project first, or use --skip-build to \
             deploy the existing output."
                .to_string(),
        ),
        DeployError::SourceNotFound { .. } => Some(
            "Check the project was published there, or set build_output / metadata for the \
             artifact in livecity-deploy.toml."
                .to_string(),
        ),
        DeployError::InvalidConfig { .. } | DeployError::InvalidPattern { .. } => {
            Some("Fix the config file and try again.".to_string())
        }
        DeployError::VerifyMismatch { .. } => {
            Some("Run `livecity-deploy deploy` to redeploy the artifact.".to_string())
        }
        _ => None,
    }
}

pub(crate) fn format_deploy_error(
    err: &DeployError,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut block = ErrorBlock::new(err.to_string());
    if let Some(path) = err.path() {
        block = block.with_path(path);
    }
    if let Some(fix) = fix_hint(err) {
        block = block.with_fix(fix);
    }
    block.render(supports_color, supports_unicode)
}

pub fn format_error(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    if let Some(deploy) = err.downcast_ref::<DeployError>() {
        return format_deploy_error(deploy, supports_color, supports_unicode);
    }

    format!("[ERROR] {:#}\n", err)
}

pub fn print_error(err: &anyhow::Error, json: bool) {
    let deploy = err.downcast_ref::<DeployError>();

    if json {
        let output = serde_json::json!({
            "event": "error",
            "kind": deploy.map(error_kind).unwrap_or("other"),
            "message": format!("{:#}", err),
        });
        let _ = crate::ui::json::emit(&output);
        return;
    }

    let caps = TerminalCapabilities::detect();
    if caps.in_github_actions() {
        let mut annotation = Annotation::error(format!("{:#}", err));
        if let Some(path) = deploy.and_then(DeployError::path) {
            annotation = annotation.file(path.to_string_lossy());
        }
        println!("{}", annotation);
    }

    eprint!("{}", format_error(err, caps.supports_color, caps.supports_unicode));
}
