use crate::analysis::{BucketAnalysis, analyze_bucket};
use crate::checks::utils::placement_finding;
use crate::model::ComponentInventory;
use crate::policy::EffectiveConfig;
use harmonyguard_types::{Finding, ids};

/// Detect duplicate copies of the install checker itself.
///
/// Returns the bucket analysis when the check fired, `None` when the bucket
/// is a singleton (or empty, or the check is disabled).
pub fn run(
    inventory: &ComponentInventory,
    cfg: &EffectiveConfig,
    out: &mut Vec<Finding>,
) -> Option<BucketAnalysis> {
    let policy = cfg.check_policy(ids::CHECK_INSTALL_DUPLICATE_CHECKER)?;

    if inventory.checker.len() < 2 {
        return None;
    }

    let analysis = analyze_bucket(&inventory.checker, &cfg.layout);
    let canonical = cfg.layout.canonical_path();

    for finding in &analysis.findings {
        out.push(placement_finding(
            ids::CHECK_INSTALL_DUPLICATE_CHECKER,
            finding,
            &canonical,
            policy.severity,
        ));
    }

    Some(analysis)
}
