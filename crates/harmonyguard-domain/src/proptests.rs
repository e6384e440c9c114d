//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - Version classification monotonicity at the v2 boundary
//! - Classifier partition exhaustiveness and exclusivity
//! - Evaluation determinism

use crate::analysis::classify_version;
use crate::engine::evaluate;
use crate::model::{LoadedComponent, classify, role_for_name};
use crate::test_support::config;
use harmonyguard_types::{AssemblyVersion, GamePath, VersionClass};
use proptest::prelude::*;

/// Strategy for arbitrary four-component versions.
fn arb_version() -> impl Strategy<Value = AssemblyVersion> {
    (0u32..10, 0u32..100, 0u32..100, 0u32..100)
        .prop_map(|(major, minor, build, revision)| AssemblyVersion::new(major, minor, build, revision))
}

/// Strategy for component names: the known identities plus noise.
fn arb_name() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("HarmonyInstallChecker".to_string()),
        Just("Harmony".to_string()),
        Just("0Harmony".to_string()),
        prop::string::string_regex("[A-Za-z][A-Za-z0-9_]{0,15}").unwrap(),
    ]
}

/// Strategy for load paths, with and without a GameData marker.
fn arb_path() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::string::string_regex("KSP/GameData/[A-Za-z0-9_]{1,12}/[A-Za-z0-9_]{1,12}\\.dll")
            .unwrap(),
        Just("KSP/GameData/000_Harmony/0Harmony.dll".to_string()),
        prop::string::string_regex("[A-Za-z0-9_/]{1,24}\\.dll").unwrap(),
    ]
}

fn arb_component() -> impl Strategy<Value = LoadedComponent> {
    (arb_name(), arb_path(), prop::option::of(arb_version())).prop_map(|(name, path, version)| {
        LoadedComponent {
            name,
            path: GamePath::new(path),
            version,
        }
    })
}

proptest! {
    #[test]
    fn version_class_is_monotonic_at_the_boundary(version in arb_version()) {
        let class = classify_version(version);
        if version < AssemblyVersion::new(2, 0, 0, 0) {
            prop_assert_eq!(class, VersionClass::Deprecated);
        } else {
            prop_assert_eq!(class, VersionClass::Current);
        }
    }

    #[test]
    fn classify_buckets_are_exhaustive_and_exclusive(
        components in prop::collection::vec(arb_component(), 0..12)
    ) {
        let inventory = classify(&components);

        // Every recognized component lands in exactly one bucket.
        let recognized = components
            .iter()
            .filter(|c| role_for_name(&c.name).is_some())
            .count();
        prop_assert_eq!(inventory.checker.len() + inventory.harmony.len(), recognized);

        prop_assert!(inventory.checker.iter().all(|c| c.name == "HarmonyInstallChecker"));
        prop_assert!(inventory.harmony.iter().all(|c| c.name == "Harmony" || c.name == "0Harmony"));
    }

    #[test]
    fn evaluation_is_deterministic(
        components in prop::collection::vec(arb_component(), 0..12)
    ) {
        let first = evaluate(&components, &config());
        let second = evaluate(&components, &config());
        prop_assert_eq!(first.verdict, second.verdict);
        prop_assert_eq!(first.findings, second.findings);
    }

    #[test]
    fn at_most_one_section_fires(
        components in prop::collection::vec(arb_component(), 0..12)
    ) {
        let report = evaluate(&components, &config());
        prop_assert!(!(report.sections.checker.is_some() && report.sections.harmony.is_some()));
    }
}
