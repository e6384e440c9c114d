use crate::analysis::InstallFinding;
use crate::fingerprint::fingerprint_for_component;
use harmonyguard_types::{Finding, GamePath, Severity, ids};
use serde_json::json;

/// Build the per-member placement finding shared by both checks.
///
/// Correct copies are reported at `Info` regardless of the check's policy
/// severity: they are part of the picture, not part of the problem.
pub fn placement_finding(
    check_id: &str,
    finding: &InstallFinding,
    canonical: &GamePath,
    severity: Severity,
) -> Finding {
    let (code, severity, message, help) = if finding.placement.correct {
        (
            ids::CODE_CORRECT_LOCATION,
            Severity::Info,
            format!(
                "'{}' is correctly installed in {}",
                finding.name, finding.placement.resolved_path
            ),
            "Keep this copy and remove the other installation(s).".to_string(),
        )
    } else if finding.placement.resolved {
        (
            ids::CODE_WRONG_LOCATION,
            severity,
            format!(
                "'{}' is wrongly installed in {}",
                finding.name, finding.placement.resolved_path
            ),
            format!("Remove this copy; the only supported location is {canonical}."),
        )
    } else {
        (
            ids::CODE_UNRESOLVED_LOCATION,
            severity,
            format!(
                "'{}' is loaded from an unrecognized location: {}",
                finding.name, finding.raw_path
            ),
            format!("Move the installation to {canonical} and remove the stray copy."),
        )
    };

    Finding {
        severity,
        check_id: check_id.to_string(),
        code: code.to_string(),
        message,
        location: Some(finding.raw_path.clone()),
        help: Some(help),
        url: None,
        fingerprint: Some(fingerprint_for_component(
            check_id,
            code,
            &finding.name,
            finding.raw_path.as_str(),
        )),
        data: json!({
            "resolved_path": finding.placement.resolved_path.as_str(),
            "resolved": finding.placement.resolved,
            "canonical_path": canonical.as_str(),
        }),
    }
}
