use anyhow::Context;
use harmonyguard_render::{
    RenderableData, RenderableFinding, RenderableReport, RenderableSeverity,
    RenderableVerdictStatus,
};
use harmonyguard_types::{
    Finding, HarmonyguardData, HarmonyguardReport, SCHEMA_REPORT_V1, Severity, ToolMeta, Verdict,
    ids,
};
use time::OffsetDateTime;

pub fn serialize_report(report: &HarmonyguardReport) -> anyhow::Result<Vec<u8>> {
    serde_json::to_vec_pretty(report).context("serialize report")
}

pub fn parse_report_json(text: &str) -> anyhow::Result<HarmonyguardReport> {
    let value: serde_json::Value = serde_json::from_str(text).context("parse report json")?;

    let schema = value
        .get("schema")
        .and_then(|v| v.as_str())
        .unwrap_or_default();
    if schema != SCHEMA_REPORT_V1 {
        anyhow::bail!("unknown report schema: {schema}");
    }

    serde_json::from_value(value).context("parse harmonyguard report")
}

pub fn to_renderable(report: &HarmonyguardReport) -> RenderableReport {
    RenderableReport {
        verdict: match report.verdict {
            Verdict::Pass => RenderableVerdictStatus::Pass,
            Verdict::Warn => RenderableVerdictStatus::Warn,
            Verdict::Fail => RenderableVerdictStatus::Fail,
        },
        findings: report.findings.iter().map(renderable_finding).collect(),
        data: RenderableData {
            components_scanned: report.data.components_scanned,
            findings_total: report.data.findings_total,
        },
    }
}

fn renderable_finding(f: &Finding) -> RenderableFinding {
    RenderableFinding {
        severity: match f.severity {
            Severity::Info => RenderableSeverity::Info,
            Severity::Warning => RenderableSeverity::Warning,
            Severity::Error => RenderableSeverity::Error,
        },
        check_id: f.check_id.clone(),
        code: f.code.clone(),
        message: f.message.clone(),
        location: f.location.as_ref().map(|p| p.as_str().to_string()),
        help: f.help.clone(),
        url: f.url.clone(),
    }
}

/// Report emitted when the tool itself fails before analysis completes.
pub fn runtime_error_report(message: &str) -> HarmonyguardReport {
    let now = OffsetDateTime::now_utc();

    HarmonyguardReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "harmonyguard".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at: now,
        finished_at: now,
        verdict: Verdict::Fail,
        findings: vec![Finding {
            severity: Severity::Error,
            check_id: ids::CHECK_TOOL_RUNTIME.to_string(),
            code: ids::CODE_RUNTIME_ERROR.to_string(),
            message: message.to_string(),
            location: None,
            help: Some("Fix the tool error and re-run harmonyguard.".to_string()),
            url: None,
            fingerprint: None,
            data: serde_json::Value::Null,
        }],
        data: HarmonyguardData {
            profile: "unknown".to_string(),
            components_scanned: 0,
            checker_instances: 0,
            harmony_instances: 0,
            findings_total: 1,
        },
    }
}
