use harmonyguard_types::{GamePath, Severity, ids};
use std::collections::BTreeMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailOn {
    Error,
    Warning,
}

#[derive(Clone, Debug)]
pub struct CheckPolicy {
    pub enabled: bool,
    pub severity: Severity,
}

impl CheckPolicy {
    pub fn enabled(severity: Severity) -> Self {
        Self {
            enabled: true,
            severity,
        }
    }

    pub fn disabled() -> Self {
        Self {
            enabled: false,
            severity: Severity::Info,
        }
    }
}

/// The single expected install location, fixed for one analysis run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CanonicalLayout {
    pub root_folder: String,
    pub harmony_folder: String,
}

impl Default for CanonicalLayout {
    fn default() -> Self {
        Self {
            root_folder: ids::ROOT_FOLDER.to_string(),
            harmony_folder: ids::HARMONY_FOLDER.to_string(),
        }
    }
}

impl CanonicalLayout {
    /// `<root>/<harmony folder>`, the only path a copy may correctly live in.
    pub fn canonical_path(&self) -> GamePath {
        GamePath::new(&self.root_folder).join(&self.harmony_folder)
    }
}

#[derive(Clone, Debug)]
pub struct EffectiveConfig {
    pub profile: String,
    pub fail_on: FailOn,
    pub layout: CanonicalLayout,
    pub checks: BTreeMap<String, CheckPolicy>,
}

impl EffectiveConfig {
    pub fn check_policy(&self, check_id: &str) -> Option<&CheckPolicy> {
        self.checks.get(check_id).filter(|p| p.enabled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_path_joins_root_and_harmony_folder() {
        let layout = CanonicalLayout::default();
        assert_eq!(layout.canonical_path().as_str(), "GameData/000_Harmony");
    }

    #[test]
    fn disabled_checks_have_no_policy() {
        let mut checks = BTreeMap::new();
        checks.insert("install.duplicate_checker".to_string(), CheckPolicy::disabled());
        let cfg = EffectiveConfig {
            profile: "test".to_string(),
            fail_on: FailOn::Error,
            layout: CanonicalLayout::default(),
            checks,
        };
        assert!(cfg.check_policy("install.duplicate_checker").is_none());
        assert!(cfg.check_policy("install.duplicate_harmony").is_none());
    }
}
