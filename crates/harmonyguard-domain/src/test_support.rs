use crate::model::LoadedComponent;
use crate::policy::{CanonicalLayout, CheckPolicy, EffectiveConfig, FailOn};
use harmonyguard_types::{GamePath, Severity, ids};
use std::collections::BTreeMap;

pub fn component(name: &str, path: &str, version: Option<&str>) -> LoadedComponent {
    LoadedComponent {
        name: name.to_string(),
        path: GamePath::new(path),
        version: version.map(|v| v.parse().expect("test version must parse")),
    }
}

/// Both checks enabled at `Error`, default layout — the strict profile shape.
pub fn config() -> EffectiveConfig {
    config_with_severities(Severity::Error, Severity::Error)
}

pub fn config_with_severities(checker: Severity, harmony: Severity) -> EffectiveConfig {
    let mut checks = BTreeMap::new();
    checks.insert(
        ids::CHECK_INSTALL_DUPLICATE_CHECKER.to_string(),
        CheckPolicy::enabled(checker),
    );
    checks.insert(
        ids::CHECK_INSTALL_DUPLICATE_HARMONY.to_string(),
        CheckPolicy::enabled(harmony),
    );

    EffectiveConfig {
        profile: "test".to_string(),
        fail_on: FailOn::Error,
        layout: CanonicalLayout::default(),
        checks,
    }
}

pub fn config_with_check(check_id: &str, severity: Severity) -> EffectiveConfig {
    let mut checks = BTreeMap::new();
    checks.insert(check_id.to_string(), CheckPolicy::enabled(severity));

    EffectiveConfig {
        profile: "test".to_string(),
        fail_on: FailOn::Error,
        layout: CanonicalLayout::default(),
        checks,
    }
}
