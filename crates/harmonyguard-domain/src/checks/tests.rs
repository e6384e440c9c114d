use super::{duplicate_checker, duplicate_harmony, run_all};
use crate::model::classify;
use crate::test_support::{component, config, config_with_check};
use harmonyguard_types::{Severity, ids};

#[test]
fn duplicate_checker_flags_wrong_copy_and_keeps_canonical() {
    // Scenario: two checker assemblies, one canonical, one stray.
    let inventory = classify(&[
        component(
            "HarmonyInstallChecker",
            "KSP/GameData/000_Harmony/checker.dll",
            None,
        ),
        component(
            "HarmonyInstallChecker",
            "KSP/GameData/OtherMod/checker.dll",
            None,
        ),
    ]);

    let cfg = config();
    let mut out = Vec::new();
    let analysis = duplicate_checker::run(&inventory, &cfg, &mut out).expect("check fires");

    assert!(analysis.right_path_exists);
    assert_eq!(out.len(), 2);

    let correct = out
        .iter()
        .find(|f| f.code == ids::CODE_CORRECT_LOCATION)
        .expect("canonical copy reported");
    assert_eq!(correct.severity, Severity::Info);
    assert_eq!(correct.data["resolved_path"], "GameData/000_Harmony");

    let wrong = out
        .iter()
        .find(|f| f.code == ids::CODE_WRONG_LOCATION)
        .expect("stray copy reported");
    assert_eq!(wrong.severity, Severity::Error);
    assert_eq!(wrong.data["resolved_path"], "GameData/OtherMod");
    assert_eq!(wrong.data["canonical_path"], "GameData/000_Harmony");
    assert!(wrong.fingerprint.is_some());
}

#[test]
fn duplicate_checker_skips_singleton_bucket() {
    let inventory = classify(&[component(
        "HarmonyInstallChecker",
        "KSP/GameData/000_Harmony/checker.dll",
        None,
    )]);

    let mut out = Vec::new();
    assert!(duplicate_checker::run(&inventory, &config(), &mut out).is_none());
    assert!(out.is_empty());
}

#[test]
fn duplicate_harmony_classifies_v1_as_deprecated() {
    // Scenario: v1 correctly placed, v2 misplaced.
    let inventory = classify(&[
        component("0Harmony", "KSP/GameData/000_Harmony/0Harmony.dll", Some("1.2.0.0")),
        component("0Harmony", "KSP/GameData/OtherMod/0Harmony.dll", Some("2.1.0.0")),
    ]);

    let cfg = config();
    let mut out = Vec::new();
    let analysis = duplicate_harmony::run(&inventory, &cfg, &mut out).expect("check fires");

    assert!(analysis.right_path_exists);
    // v1: correct placement + deprecated; v2: wrong placement. No finding
    // marks v2 deprecated.
    assert_eq!(out.len(), 3);

    let deprecated = out
        .iter()
        .find(|f| f.code == ids::CODE_DEPRECATED_MAJOR)
        .expect("v1 flagged");
    assert!(deprecated.message.contains("1.2.0.0"));
    assert!(
        deprecated
            .location
            .as_ref()
            .unwrap()
            .as_str()
            .contains("000_Harmony")
    );

    let wrong = out
        .iter()
        .find(|f| f.code == ids::CODE_WRONG_LOCATION)
        .expect("v2 flagged as misplaced");
    assert!(wrong.message.contains("GameData/OtherMod"));
}

#[test]
fn duplicate_harmony_boundary_version_is_not_deprecated() {
    let inventory = classify(&[
        component("0Harmony", "KSP/GameData/A/0Harmony.dll", Some("2.0.0.0")),
        component("0Harmony", "KSP/GameData/B/0Harmony.dll", Some("2.1.0.0")),
    ]);

    let mut out = Vec::new();
    duplicate_harmony::run(&inventory, &config(), &mut out).expect("check fires");
    assert!(out.iter().all(|f| f.code != ids::CODE_DEPRECATED_MAJOR));
}

#[test]
fn duplicate_harmony_surfaces_unreadable_version() {
    let inventory = classify(&[
        component("0Harmony", "KSP/GameData/000_Harmony/0Harmony.dll", Some("2.1")),
        component("0Harmony", "KSP/GameData/Broken/0Harmony.dll", None),
    ]);

    let mut out = Vec::new();
    duplicate_harmony::run(&inventory, &config(), &mut out).expect("check fires");

    let unresolved = out
        .iter()
        .find(|f| f.code == ids::CODE_UNRESOLVED_VERSION)
        .expect("unreadable version surfaced");
    assert_eq!(unresolved.severity, Severity::Warning);
}

#[test]
fn duplicate_harmony_unresolved_path_is_wrong() {
    let inventory = classify(&[
        component("0Harmony", "C:/Downloads/0Harmony.dll", Some("2.1")),
        component("0Harmony", "KSP/GameData/000_Harmony/0Harmony.dll", Some("2.1")),
    ]);

    let mut out = Vec::new();
    let analysis = duplicate_harmony::run(&inventory, &config(), &mut out).expect("check fires");
    assert!(analysis.right_path_exists);

    let unresolved = out
        .iter()
        .find(|f| f.code == ids::CODE_UNRESOLVED_LOCATION)
        .expect("markerless path flagged");
    assert_eq!(unresolved.data["resolved"], false);
}

#[test]
fn run_all_prioritizes_the_checker_bucket() {
    let inventory = classify(&[
        component("HarmonyInstallChecker", "KSP/GameData/A/c.dll", None),
        component("HarmonyInstallChecker", "KSP/GameData/B/c.dll", None),
        component("Harmony", "KSP/GameData/C/Harmony.dll", Some("1.2")),
        component("0Harmony", "KSP/GameData/D/0Harmony.dll", Some("2.1")),
    ]);

    let mut out = Vec::new();
    let sections = run_all(&inventory, &config(), &mut out);
    assert!(sections.checker.is_some());
    assert!(sections.harmony.is_none());
    assert!(
        out.iter()
            .all(|f| f.check_id == ids::CHECK_INSTALL_DUPLICATE_CHECKER)
    );
}

#[test]
fn run_all_analyzes_harmony_when_checker_check_is_disabled() {
    // Only the harmony check is configured; a duplicated checker then has no
    // message to take precedence with.
    let inventory = classify(&[
        component("HarmonyInstallChecker", "KSP/GameData/A/c.dll", None),
        component("HarmonyInstallChecker", "KSP/GameData/B/c.dll", None),
        component("Harmony", "KSP/GameData/C/Harmony.dll", Some("1.2")),
        component("0Harmony", "KSP/GameData/D/0Harmony.dll", Some("2.1")),
    ]);

    let cfg = config_with_check(ids::CHECK_INSTALL_DUPLICATE_HARMONY, Severity::Error);
    let mut out = Vec::new();
    let sections = run_all(&inventory, &cfg, &mut out);
    assert!(sections.checker.is_none());
    assert!(sections.harmony.is_some());
}
