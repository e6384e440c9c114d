use harmonyguard_domain::policy::{CanonicalLayout, CheckPolicy, EffectiveConfig, FailOn};
use harmonyguard_types::{Severity, ids};
use std::collections::BTreeMap;

/// Preset profiles are opinionated defaults.
///
/// `strict` matches the shipped checker: either conflict class blocks the
/// game. `advisory` keeps a duplicated checker as a warning, for integrators
/// who only want the true dependency conflict to block.
pub fn preset(profile: &str) -> EffectiveConfig {
    match profile {
        "advisory" => advisory_profile(),
        // default
        _ => strict_profile(),
    }
}

fn strict_profile() -> EffectiveConfig {
    EffectiveConfig {
        profile: "strict".to_string(),
        fail_on: FailOn::Error,
        layout: CanonicalLayout::default(),
        checks: checks(Severity::Error, Severity::Error),
    }
}

fn advisory_profile() -> EffectiveConfig {
    EffectiveConfig {
        profile: "advisory".to_string(),
        fail_on: FailOn::Error,
        layout: CanonicalLayout::default(),
        checks: checks(Severity::Warning, Severity::Error),
    }
}

fn checks(checker: Severity, harmony: Severity) -> BTreeMap<String, CheckPolicy> {
    let mut m = BTreeMap::new();

    m.insert(
        ids::CHECK_INSTALL_DUPLICATE_CHECKER.to_string(),
        CheckPolicy::enabled(checker),
    );
    m.insert(
        ids::CHECK_INSTALL_DUPLICATE_HARMONY.to_string(),
        CheckPolicy::enabled(harmony),
    );

    m
}
