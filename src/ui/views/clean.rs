//! Clean command UI views

use livecity_deploy::application::CleanResult;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::blocks::summary::ResultSummary;
use crate::ui::primitives::glyph::Glyph;
use crate::ui::primitives::text::ColoredText;

pub fn render_clean_header(
    artifacts: &[&str],
    dist_only: bool,
    dry_run: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let title = if dry_run {
        "LiveCity Clean (Dry Run)"
    } else {
        "LiveCity Clean"
    };
    CommandHeader::new(Glyph::Clean, title)
        .row("Artifacts", artifacts.join(", "))
        .row("Scope", if dist_only { "dist only" } else { "dist + deployed" })
        .render(supports_color, supports_unicode)
}

/// Directories to be removed and directories skipped
pub fn render_clean_preview(results: &[CleanResult], supports_color: bool) -> String {
    let mut out = String::new();

    let removed: Vec<_> = results.iter().flat_map(|r| r.removed.iter()).collect();
    if !removed.is_empty() {
        out.push_str(
            &ColoredText::warning("Directories to be removed:")
                .bold()
                .render(supports_color),
        );
        out.push('\n');
        for path in removed {
            out.push_str(&format!("  - {}\n", path.display()));
        }
    }

    let skipped: Vec<_> = results.iter().flat_map(|r| r.skipped.iter()).collect();
    if !skipped.is_empty() {
        out.push_str(&ColoredText::dim("Skipped:").render(supports_color));
        out.push('\n');
        for s in skipped {
            if s.path.as_os_str().is_empty() {
                out.push_str(&format!("  - deployed directory ({})\n", s.reason));
            } else {
                out.push_str(&format!("  - {} ({})\n", s.path.display(), s.reason));
            }
        }
    }

    out
}

pub fn render_clean_result(
    results: &[CleanResult],
    dry_run: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let removed: usize = results.iter().map(|r| r.removed.len()).sum();
    let skipped: usize = results.iter().map(|r| r.skipped.len()).sum();

    let title = if dry_run {
        "Clean Preview"
    } else if removed == 0 {
        "Nothing to Clean"
    } else {
        "Clean Complete"
    };

    let mut summary = ResultSummary::success(title);
    summary.add_stat(
        if dry_run {
            "directories would be removed"
        } else {
            "directories removed"
        },
        removed,
    );
    summary.add_stat("skipped", skipped);
    if dry_run && removed > 0 {
        summary.with_next_step("Run without --dry-run to delete.");
    }

    summary.render(supports_color, supports_unicode)
}
