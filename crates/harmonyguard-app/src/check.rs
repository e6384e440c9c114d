//! The `check` use case: analyze a snapshot and produce report + notice.

use anyhow::Context;
use harmonyguard_domain::model::LoadedComponent;
use harmonyguard_render::{DIALOG_TITLE, QUIT_ACTION_LABEL, render_dialog_body, render_plain};
use harmonyguard_settings::{Overrides, ResolvedConfig};
use harmonyguard_types::{
    BlockingNotice, HarmonyguardReport, NoticeAction, SCHEMA_REPORT_V1, ToolMeta, Verdict,
};
use time::OffsetDateTime;

use crate::render::to_renderable_conflict;

/// Input for the check use case.
#[derive(Clone, Debug)]
pub struct CheckInput<'a> {
    /// The host's loaded-component snapshot, in load order.
    pub components: &'a [LoadedComponent],
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
}

/// Output from the check use case.
#[derive(Clone, Debug)]
pub struct CheckOutput {
    /// The generated report.
    pub report: HarmonyguardReport,
    /// Blocking dialog request, present when the verdict blocks.
    pub notice: Option<BlockingNotice>,
    /// Markup-free conflict text for the error log sink, present when any
    /// conflict was found (blocking or not).
    pub log_text: Option<String>,
    /// The resolved configuration used.
    pub resolved_config: ResolvedConfig,
}

/// Run the check use case: resolve config, evaluate the snapshot, assemble
/// the notice and report.
pub fn run_check(input: CheckInput<'_>) -> anyhow::Result<CheckOutput> {
    let started_at = OffsetDateTime::now_utc();

    // Parse config (empty is allowed, defaults apply).
    let cfg = if input.config_text.trim().is_empty() {
        harmonyguard_settings::HarmonyguardConfigV1::default()
    } else {
        harmonyguard_settings::parse_config_toml(input.config_text).context("parse config")?
    };

    let resolved = harmonyguard_settings::resolve_config(cfg, input.overrides.clone())
        .context("resolve config")?;

    let domain_report = harmonyguard_domain::evaluate(input.components, &resolved.effective);

    let conflict = to_renderable_conflict(&domain_report.sections, &resolved.effective.layout);
    let (notice, log_text) = match &conflict {
        Some(conflict) => {
            let body = render_dialog_body(conflict);
            let plain = render_plain(&body);
            let notice = (domain_report.verdict == Verdict::Fail).then(|| BlockingNotice {
                title: DIALOG_TITLE.to_string(),
                body,
                action_label: QUIT_ACTION_LABEL.to_string(),
                action: NoticeAction::QuitHost,
            });
            (notice, Some(plain))
        }
        None => (None, None),
    };

    let finished_at = OffsetDateTime::now_utc();

    let report = HarmonyguardReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "harmonyguard".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at,
        finished_at,
        verdict: domain_report.verdict,
        findings: domain_report.findings,
        data: domain_report.data,
    };

    Ok(CheckOutput {
        report,
        notice,
        log_text,
        resolved_config: resolved,
    })
}

/// Map verdict to exit code: 0 = pass/warn, 2 = fail.
pub fn verdict_exit_code(verdict: Verdict) -> i32 {
    match verdict {
        Verdict::Pass => 0,
        Verdict::Warn => 0,
        Verdict::Fail => 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use harmonyguard_types::GamePath;

    fn component(name: &str, path: &str, version: Option<&str>) -> LoadedComponent {
        LoadedComponent {
            name: name.to_string(),
            path: GamePath::new(path),
            version: version.map(|v| v.parse().expect("test version must parse")),
        }
    }

    #[test]
    fn clean_install_yields_no_notice_and_no_log() {
        let components = vec![
            component("HarmonyInstallChecker", "KSP/GameData/000_Harmony/c.dll", None),
            component("0Harmony", "KSP/GameData/000_Harmony/0Harmony.dll", Some("2.1")),
        ];

        let output = run_check(CheckInput {
            components: &components,
            config_text: "",
            overrides: Overrides::default(),
        })
        .expect("run_check");

        assert_eq!(output.report.verdict, Verdict::Pass);
        assert!(output.notice.is_none());
        assert!(output.log_text.is_none());
        assert_eq!(output.resolved_config.effective.profile, "strict");
    }

    #[test]
    fn duplicate_harmony_produces_blocking_notice_and_plain_log() {
        let components = vec![
            component("Harmony", "KSP/GameData/000_Harmony/Harmony.dll", Some("1.2.0.0")),
            component("0Harmony", "KSP/GameData/OtherMod/0Harmony.dll", Some("2.1.0.0")),
        ];

        let output = run_check(CheckInput {
            components: &components,
            config_text: "",
            overrides: Overrides::default(),
        })
        .expect("run_check");

        assert_eq!(output.report.verdict, Verdict::Fail);

        let notice = output.notice.expect("blocking notice");
        assert_eq!(notice.title, "Harmony installation error");
        assert_eq!(notice.action_label, "Quit KSP");
        assert_eq!(notice.action, NoticeAction::QuitHost);
        assert!(notice.body.contains("please close KSP"));
        assert!(notice.body.contains("<color=red>"));

        let log = output.log_text.expect("log text");
        assert!(!log.contains('<'));
        assert!(!log.contains('>'));
        assert!(log.contains("Harmony 1.2.0.0"));
    }

    #[test]
    fn advisory_profile_logs_checker_conflict_without_blocking() {
        let components = vec![
            component("HarmonyInstallChecker", "KSP/GameData/A/c.dll", None),
            component("HarmonyInstallChecker", "KSP/GameData/B/c.dll", None),
        ];

        let output = run_check(CheckInput {
            components: &components,
            config_text: "",
            overrides: Overrides {
                profile: Some("advisory".to_string()),
                fail_on: None,
            },
        })
        .expect("run_check");

        assert_eq!(output.report.verdict, Verdict::Warn);
        assert!(output.notice.is_none());
        assert!(output.log_text.is_some());
    }

    #[test]
    fn verdict_exit_codes() {
        assert_eq!(verdict_exit_code(Verdict::Pass), 0);
        assert_eq!(verdict_exit_code(Verdict::Warn), 0);
        assert_eq!(verdict_exit_code(Verdict::Fail), 2);
    }
}
