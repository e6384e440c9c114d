use crate::analysis::{BucketAnalysis, analyze_bucket};
use crate::checks::utils::placement_finding;
use crate::fingerprint::fingerprint_for_component;
use crate::model::ComponentInventory;
use crate::policy::EffectiveConfig;
use harmonyguard_types::{Finding, Severity, VersionClass, ids};
use serde_json::json;

/// Detect duplicate copies of the Harmony library across both release lines.
///
/// Besides placement, every member gets a version classification: anything
/// below 2.0.0.0 is the deprecated v1 line and conflicts with the v2
/// distribution. Version class is independent of placement — a copy can be
/// correctly placed and still deprecated.
pub fn run(
    inventory: &ComponentInventory,
    cfg: &EffectiveConfig,
    out: &mut Vec<Finding>,
) -> Option<BucketAnalysis> {
    let policy = cfg.check_policy(ids::CHECK_INSTALL_DUPLICATE_HARMONY)?;

    if inventory.harmony.len() < 2 {
        return None;
    }

    let analysis = analyze_bucket(&inventory.harmony, &cfg.layout);
    let canonical = cfg.layout.canonical_path();

    for finding in &analysis.findings {
        out.push(placement_finding(
            ids::CHECK_INSTALL_DUPLICATE_HARMONY,
            finding,
            &canonical,
            policy.severity,
        ));

        match (finding.version, finding.version_class) {
            (Some(version), Some(VersionClass::Deprecated)) => {
                out.push(Finding {
                    severity: policy.severity,
                    check_id: ids::CHECK_INSTALL_DUPLICATE_HARMONY.to_string(),
                    code: ids::CODE_DEPRECATED_MAJOR.to_string(),
                    message: format!(
                        "'{}' {} is Harmony v1, which is deprecated and conflicts with Harmony v2",
                        finding.name, version
                    ),
                    location: Some(finding.raw_path.clone()),
                    help: Some(
                        "Remove that mod, and ask its author to ship the community-distributed \
                         Harmony instead."
                            .to_string(),
                    ),
                    url: None,
                    fingerprint: Some(fingerprint_for_component(
                        ids::CHECK_INSTALL_DUPLICATE_HARMONY,
                        ids::CODE_DEPRECATED_MAJOR,
                        &finding.name,
                        finding.raw_path.as_str(),
                    )),
                    data: json!({ "version": version.to_string() }),
                });
            }
            (None, _) => {
                // Unreadable metadata is surfaced, never fatal.
                out.push(Finding {
                    severity: Severity::Warning,
                    check_id: ids::CHECK_INSTALL_DUPLICATE_HARMONY.to_string(),
                    code: ids::CODE_UNRESOLVED_VERSION.to_string(),
                    message: format!("version metadata for '{}' could not be read", finding.name),
                    location: Some(finding.raw_path.clone()),
                    help: Some(
                        "Replace the assembly with an intact copy of the community-distributed \
                         Harmony."
                            .to_string(),
                    ),
                    url: None,
                    fingerprint: Some(fingerprint_for_component(
                        ids::CHECK_INSTALL_DUPLICATE_HARMONY,
                        ids::CODE_UNRESOLVED_VERSION,
                        &finding.name,
                        finding.raw_path.as_str(),
                    )),
                    data: serde_json::Value::Null,
                });
            }
            _ => {}
        }
    }

    Some(analysis)
}
