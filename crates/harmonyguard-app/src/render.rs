//! Render use cases: the dialog's renderable conflict and Markdown output.

use harmonyguard_domain::policy::CanonicalLayout;
use harmonyguard_domain::report::ConflictSections;
use harmonyguard_render::{
    RenderableConflict, RenderableConflictKind, RenderableInstall, RenderableReport,
};
use harmonyguard_types::VersionClass;

pub fn render_markdown(report: &RenderableReport) -> String {
    harmonyguard_render::render_markdown(report)
}

/// Convert the domain's conflict sections into the dialog renderer's model.
///
/// At most one section is populated (checker conflicts suppress Harmony
/// analysis), so this picks whichever fired.
pub fn to_renderable_conflict(
    sections: &ConflictSections,
    layout: &CanonicalLayout,
) -> Option<RenderableConflict> {
    let (kind, analysis) = if let Some(analysis) = &sections.checker {
        (RenderableConflictKind::DuplicateChecker, analysis)
    } else if let Some(analysis) = &sections.harmony {
        (RenderableConflictKind::DuplicateHarmony, analysis)
    } else {
        return None;
    };

    Some(RenderableConflict {
        kind,
        installs: analysis
            .findings
            .iter()
            .map(|finding| RenderableInstall {
                version: finding.version.map(|v| v.to_string()),
                display_path: finding.placement.resolved_path.to_string(),
                correct: finding.placement.correct,
                deprecated: matches!(finding.version_class, Some(VersionClass::Deprecated)),
            })
            .collect(),
        right_path_exists: analysis.right_path_exists,
        canonical_path: layout.canonical_path().to_string(),
    })
}
