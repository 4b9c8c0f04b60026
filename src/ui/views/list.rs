//! List command UI views

use std::path::Path;

use livecity_deploy::domain::value_objects::DeployLayout;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::glyph::Glyph;
use crate::ui::primitives::text::ColoredText;

/// Shown in place of paths under an unresolved resource root
pub const UNSET: &str = "<unset>";

pub fn render_list_header(
    repo_root: &Path,
    resource_root: Option<&Path>,
    build_tool: &str,
    tool_found: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let resources = resource_root
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| UNSET.to_string());
    let tool = if tool_found {
        build_tool.to_string()
    } else {
        format!("{} (not found)", build_tool)
    };
    CommandHeader::new(Glyph::List, "LiveCity Artifacts")
        .row("Repository", repo_root.display().to_string())
        .row("Resources", resources)
        .row("Build tool", tool)
        .render(supports_color, supports_unicode)
}

pub fn render_artifact(
    layout: &DeployLayout,
    aliases: &[String],
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut title = layout.name.clone();
    if !aliases.is_empty() {
        title.push_str(&format!(" ({})", aliases.join(", ")));
    }

    let deployed = layout
        .deployed_dir
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| UNSET.to_string());

    let mut out = format!(
        "{} {}\n",
        Glyph::Artifact.colored(supports_color, supports_unicode),
        ColoredText::info(title).bold().render(supports_color)
    );
    for (label, value) in [
        ("project", layout.project_file.display().to_string()),
        ("build output", layout.build_output_dir.display().to_string()),
        ("metadata", layout.metadata_source.display().to_string()),
        ("dist", layout.dist_dir.display().to_string()),
        ("deployed", deployed),
    ] {
        out.push_str(&format!(
            "  {} {}\n",
            ColoredText::dim(format!("{:<13}", format!("{}:", label))).render(supports_color),
            value
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use livecity_deploy::Artifact;

    #[test]
    fn unresolved_resource_root_shows_unset() {
        let layout = DeployLayout::resolve(
            &Artifact::client(),
            Path::new("/repo"),
            Path::new("dist"),
            None,
            "DebugLocal",
        );
        let rendered = render_artifact(&layout, &["client".to_string()], false, false);
        assert!(rendered.contains("livecity-client (client)"));
        assert!(rendered.contains("deployed:     <unset>"));
        assert!(rendered.contains("/repo/Client/build/DebugLocal/publish"));
    }

    #[test]
    fn header_marks_missing_tool() {
        let rendered = render_list_header(Path::new("/repo"), None, "dotnet", false, false, false);
        assert!(rendered.contains("Build tool: dotnet (not found)"));
        assert!(rendered.contains("Resources:  <unset>"));
    }
}
