//! Verify command UI views

use livecity_deploy::application::VerifyReport;

use crate::ui::blocks::summary::ResultSummary;
use crate::ui::primitives::glyph::Glyph;
use crate::ui::primitives::text::ColoredText;

/// One block per artifact: status line plus each differing path.
pub fn render_verify_report(
    report: &VerifyReport,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = String::new();

    if report.is_clean() {
        out.push_str(&format!(
            "{} {} ({} files match)\n",
            Glyph::Done.colored(supports_color, supports_unicode),
            report.artifact,
            report.files
        ));
        return out;
    }

    out.push_str(&format!(
        "{} {} differs from {}\n",
        Glyph::Failed.colored(supports_color, supports_unicode),
        report.artifact,
        report.dist_dir.display()
    ));

    let sections = [
        ("missing", &report.diff.missing),
        ("extra", &report.diff.extra),
        ("changed", &report.diff.changed),
    ];
    for (label, paths) in sections {
        for path in paths {
            out.push_str(&format!(
                "  {} {}\n",
                ColoredText::warning(format!("{:<8}", label)).render(supports_color),
                path.display()
            ));
        }
    }

    out
}

pub fn render_verify_summary(
    reports: &[VerifyReport],
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mismatched: Vec<&VerifyReport> = reports.iter().filter(|r| !r.is_clean()).collect();

    let mut summary = if mismatched.is_empty() {
        ResultSummary::success("Deployed resources match dist/")
    } else {
        ResultSummary::partial("Deployed resources are out of date")
    };

    summary.add_stat("artifacts checked", reports.len());
    summary.add_stat("files compared", reports.iter().map(|r| r.files).sum());

    for report in &mismatched {
        summary.add_warning(format!(
            "{}: {} differences",
            report.artifact,
            report.diff.len()
        ));
    }
    if !mismatched.is_empty() {
        summary.with_next_step("Run `livecity-deploy deploy --skip-build` to resync.");
    }

    summary.render(supports_color, supports_unicode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use livecity_deploy::domain::services::ManifestDiff;
    use std::path::PathBuf;

    fn report(diff: ManifestDiff) -> VerifyReport {
        VerifyReport {
            artifact: "livecity-server".to_string(),
            dist_dir: PathBuf::from("/repo/dist/livecity-server"),
            deployed_dir: PathBuf::from("/srv/resources/livecity-server"),
            files: 4,
            diff,
        }
    }

    #[test]
    fn clean_report_is_one_line() {
        let rendered = render_verify_report(&report(ManifestDiff::default()), false, false);
        assert_eq!(rendered, "[OK] livecity-server (4 files match)\n");
    }

    #[test]
    fn mismatch_lists_paths_by_kind() {
        let diff = ManifestDiff {
            missing: vec![PathBuf::from("resource.toml")],
            extra: vec![PathBuf::from("stale.dll")],
            changed: vec![],
        };
        let rendered = render_verify_report(&report(diff.clone()), false, false);
        assert!(rendered.contains("[FAIL] livecity-server differs"));
        assert!(rendered.contains("missing  resource.toml"));
        assert!(rendered.contains("extra    stale.dll"));

        let summary = render_verify_summary(&[report(diff)], false, false);
        assert!(summary.contains("out of date"));
        assert!(summary.contains("livecity-server: 2 differences"));
    }
}
