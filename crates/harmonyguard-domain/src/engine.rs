use crate::checks;
use crate::model::{LoadedComponent, classify};
use crate::policy::{EffectiveConfig, FailOn};
use crate::report::{DomainReport, SeverityCounts};
use harmonyguard_types::{Finding, HarmonyguardData, Severity, Verdict};

/// One full analysis pass: classify, check, order, summarize.
///
/// Pure and deterministic: the same snapshot always yields the same report.
pub fn evaluate(components: &[LoadedComponent], cfg: &EffectiveConfig) -> DomainReport {
    let inventory = classify(components);

    let mut findings: Vec<Finding> = Vec::new();
    let sections = checks::run_all(&inventory, cfg, &mut findings);

    // Deterministic ordering regardless of bucket iteration order.
    findings.sort_by(compare_findings);

    let verdict = compute_verdict(&findings, cfg.fail_on);
    let counts = SeverityCounts::from_findings(&findings);

    let data = HarmonyguardData {
        profile: cfg.profile.clone(),
        components_scanned: components.len() as u32,
        checker_instances: inventory.checker.len() as u32,
        harmony_instances: inventory.harmony.len() as u32,
        findings_total: findings.len() as u32,
    };

    DomainReport {
        verdict,
        findings,
        sections,
        data,
        counts,
    }
}

fn compute_verdict(findings: &[Finding], fail_on: FailOn) -> Verdict {
    let has_error = findings.iter().any(|f| f.severity == Severity::Error);
    if has_error {
        return Verdict::Fail;
    }

    let has_warn = findings.iter().any(|f| f.severity == Severity::Warning);
    if has_warn {
        return match fail_on {
            FailOn::Warning => Verdict::Fail,
            FailOn::Error => Verdict::Warn,
        };
    }

    Verdict::Pass
}

fn compare_findings(a: &Finding, b: &Finding) -> std::cmp::Ordering {
    // Ordering priority:
    // 1) severity (error -> warning -> info)
    // 2) location (missing last)
    // 3) check_id
    // 4) code
    // 5) message
    let severity_rank = |sev: Severity| match sev {
        Severity::Error => 0,
        Severity::Warning => 1,
        Severity::Info => 2,
    };
    let ap = a.location.as_ref().map(|l| l.as_str()).unwrap_or("~");
    let bp = b.location.as_ref().map(|l| l.as_str()).unwrap_or("~");

    severity_rank(a.severity)
        .cmp(&severity_rank(b.severity))
        .then(ap.cmp(bp))
        .then(a.check_id.cmp(&b.check_id))
        .then(a.code.cmp(&b.code))
        .then(a.message.cmp(&b.message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{component, config, config_with_severities};
    use harmonyguard_types::ids;

    #[test]
    fn singleton_buckets_produce_empty_passing_report() {
        let components = vec![
            component("HarmonyInstallChecker", "KSP/GameData/000_Harmony/c.dll", None),
            component("0Harmony", "KSP/GameData/000_Harmony/0Harmony.dll", Some("2.1")),
        ];

        let report = evaluate(&components, &config());
        assert_eq!(report.verdict, Verdict::Pass);
        assert!(report.findings.is_empty());
        assert!(!report.sections.any_conflict());
        assert_eq!(report.data.checker_instances, 1);
        assert_eq!(report.data.harmony_instances, 1);
    }

    #[test]
    fn empty_snapshot_is_a_pass() {
        let report = evaluate(&[], &config());
        assert_eq!(report.verdict, Verdict::Pass);
        assert!(report.findings.is_empty());
        assert_eq!(report.data.components_scanned, 0);
    }

    #[test]
    fn duplicate_checker_suppresses_harmony_analysis() {
        let components = vec![
            component("HarmonyInstallChecker", "KSP/GameData/000_Harmony/c.dll", None),
            component("HarmonyInstallChecker", "KSP/GameData/OtherMod/c.dll", None),
            component("Harmony", "KSP/GameData/A/Harmony.dll", Some("1.2")),
            component("0Harmony", "KSP/GameData/B/0Harmony.dll", Some("2.1")),
        ];

        let report = evaluate(&components, &config());
        assert_eq!(report.verdict, Verdict::Fail);
        assert!(report.sections.checker.is_some());
        assert!(report.sections.harmony.is_none());
        assert!(
            report
                .findings
                .iter()
                .all(|f| f.check_id == ids::CHECK_INSTALL_DUPLICATE_CHECKER)
        );
    }

    #[test]
    fn duplicate_harmony_blocks_when_checker_is_a_singleton() {
        let components = vec![
            component("HarmonyInstallChecker", "KSP/GameData/000_Harmony/c.dll", None),
            component("Harmony", "KSP/GameData/000_Harmony/Harmony.dll", Some("1.2")),
            component("0Harmony", "KSP/GameData/OtherMod/0Harmony.dll", Some("2.1")),
        ];

        let report = evaluate(&components, &config());
        assert_eq!(report.verdict, Verdict::Fail);
        assert!(report.sections.checker.is_none());
        assert!(report.sections.harmony.is_some());
    }

    #[test]
    fn evaluate_is_idempotent() {
        let components = vec![
            component("Harmony", "KSP/GameData/000_Harmony/Harmony.dll", Some("1.2")),
            component("0Harmony", "KSP/GameData/OtherMod/0Harmony.dll", Some("2.1")),
        ];

        let first = evaluate(&components, &config());
        let second = evaluate(&components, &config());
        assert_eq!(first.verdict, second.verdict);
        assert_eq!(first.findings, second.findings);
        assert_eq!(first.data, second.data);
    }

    #[test]
    fn findings_are_ordered_by_severity_then_location() {
        let components = vec![
            component("Harmony", "KSP/GameData/ZMod/Harmony.dll", Some("1.2")),
            component("0Harmony", "KSP/GameData/000_Harmony/0Harmony.dll", Some("2.1")),
        ];

        let report = evaluate(&components, &config());
        let ranks: Vec<u8> = report
            .findings
            .iter()
            .map(|f| match f.severity {
                Severity::Error => 0,
                Severity::Warning => 1,
                Severity::Info => 2,
            })
            .collect();
        let mut sorted = ranks.clone();
        sorted.sort();
        assert_eq!(ranks, sorted);
    }

    #[test]
    fn warning_severity_checker_check_downgrades_verdict() {
        let components = vec![
            component("HarmonyInstallChecker", "KSP/GameData/000_Harmony/c.dll", None),
            component("HarmonyInstallChecker", "KSP/GameData/OtherMod/c.dll", None),
        ];

        let cfg = config_with_severities(Severity::Warning, Severity::Error);
        let report = evaluate(&components, &cfg);
        assert_eq!(report.verdict, Verdict::Warn);
        assert!(report.sections.checker.is_some());
    }
}
