use crate::analysis::BucketAnalysis;
use harmonyguard_types::{Finding, HarmonyguardData, Severity, Verdict};

#[derive(Clone, Debug, Default)]
pub struct SeverityCounts {
    pub info: u32,
    pub warning: u32,
    pub error: u32,
}

impl SeverityCounts {
    pub fn from_findings(findings: &[Finding]) -> Self {
        let mut counts = SeverityCounts::default();
        for f in findings {
            match f.severity {
                Severity::Info => counts.info += 1,
                Severity::Warning => counts.warning += 1,
                Severity::Error => counts.error += 1,
            }
        }
        counts
    }
}

/// Structured bucket analyses for the dialog renderer.
///
/// At most one section is populated per run: a duplicated checker suppresses
/// the Harmony section entirely.
#[derive(Clone, Debug, Default)]
pub struct ConflictSections {
    pub checker: Option<BucketAnalysis>,
    pub harmony: Option<BucketAnalysis>,
}

impl ConflictSections {
    pub fn any_conflict(&self) -> bool {
        self.checker.is_some() || self.harmony.is_some()
    }
}

#[derive(Clone, Debug)]
pub struct DomainReport {
    pub verdict: Verdict,
    pub findings: Vec<Finding>,
    pub sections: ConflictSections,
    pub data: HarmonyguardData,
    pub counts: SeverityCounts,
}
