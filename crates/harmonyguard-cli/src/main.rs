//! CLI entry point for harmonyguard.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and
//! exit codes. All business logic lives in the `harmonyguard-app` crate.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use harmonyguard_app::{
    CheckInput, ExplainOutput, parse_report_json, render_markdown, run_check_once, run_explain,
    runtime_error_report, serialize_report, to_renderable, verdict_exit_code,
};
use harmonyguard_settings::Overrides;
use harmonyguard_types::HarmonyguardReport;

#[derive(Parser, Debug)]
#[command(
    name = "harmonyguard",
    version,
    about = "Duplicate Harmony installation sensor for GameData-based installs"
)]
struct Cli {
    /// Path to harmonyguard config TOML.
    #[arg(long, default_value = "harmonyguard.toml")]
    config: Utf8PathBuf,

    /// Override profile (strict|advisory).
    #[arg(long)]
    profile: Option<String>,

    /// Override blocking threshold (error|warn).
    #[arg(long)]
    fail_on: Option<String>,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Analyze a loaded-component snapshot and write artifacts.
    Check {
        /// The host's loaded-component snapshot (harmonyguard.snapshot.v1 JSON).
        #[arg(long)]
        snapshot: Utf8PathBuf,

        /// Where to write the JSON report.
        #[arg(long, default_value = "artifacts/harmonyguard/report.json")]
        report_out: Utf8PathBuf,

        /// Where to write the blocking notice for the presentation layer
        /// (written only when a conflict blocks).
        #[arg(long, default_value = "artifacts/harmonyguard/notice.json")]
        notice_out: Utf8PathBuf,

        /// Write a Markdown report alongside the JSON.
        #[arg(long)]
        write_markdown: bool,

        /// Where to write the Markdown report (if enabled).
        #[arg(long, default_value = "artifacts/harmonyguard/comment.md")]
        markdown_out: Utf8PathBuf,
    },

    /// Render markdown from an existing JSON report.
    Md {
        /// Path to the JSON report file.
        #[arg(long, default_value = "artifacts/harmonyguard/report.json")]
        report: Utf8PathBuf,

        /// Where to write the Markdown output (if not specified, prints to stdout).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },

    /// Explain a check_id or code with remediation guidance.
    Explain {
        /// The check_id (e.g., "install.duplicate_harmony") or code
        /// (e.g., "deprecated_major") to explain.
        identifier: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Check {
            ref snapshot,
            ref report_out,
            ref notice_out,
            write_markdown,
            ref markdown_out,
        } => cmd_check(
            &cli,
            snapshot.clone(),
            report_out.clone(),
            notice_out.clone(),
            write_markdown,
            markdown_out.clone(),
        ),
        Commands::Md { report, output } => cmd_md(report, output),
        Commands::Explain { identifier } => cmd_explain(&identifier),
    }
}

fn cmd_check(
    cli: &Cli,
    snapshot: Utf8PathBuf,
    report_out: Utf8PathBuf,
    notice_out: Utf8PathBuf,
    write_markdown: bool,
    markdown_out: Utf8PathBuf,
) -> anyhow::Result<()> {
    let result = (|| -> anyhow::Result<i32> {
        // Load config if present; missing file is allowed (defaults apply).
        let cfg_text = std::fs::read_to_string(&cli.config).unwrap_or_default();

        let components = harmonyguard_host::load_snapshot(&snapshot)?;

        let overrides = Overrides {
            profile: cli.profile.clone(),
            fail_on: cli.fail_on.clone(),
        };

        let input = CheckInput {
            components: &components,
            config_text: &cfg_text,
            overrides,
        };

        // Duplicate installs can start a second checker in the same host
        // process; the guard turns the extra runs into no-ops.
        let Some(output) = run_check_once(input)? else {
            eprintln!("harmonyguard: analysis already ran in this process; skipping");
            return Ok(0);
        };

        write_report_file(&report_out, &output.report).context("write report json")?;

        if write_markdown {
            let renderable = to_renderable(&output.report);
            let md = render_markdown(&renderable);
            write_text_file(&markdown_out, &md).context("write markdown")?;
        }

        if let Some(notice) = &output.notice {
            let data = serde_json::to_vec_pretty(notice).context("serialize notice")?;
            write_bytes_file(&notice_out, &data).context("write notice json")?;
        }

        // The markup-free conflict text goes to the error log sink.
        if let Some(log) = &output.log_text {
            eprintln!("{log}");
        }

        Ok(verdict_exit_code(output.report.verdict))
    })();

    match result {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
            Ok(())
        }
        Err(err) => {
            let report = runtime_error_report(&format!("{err:#}"));
            let _ = write_report_file(&report_out, &report);
            eprintln!("harmonyguard error: {err:#}");
            std::process::exit(1);
        }
    }
}

fn write_report_file(path: &camino::Utf8Path, report: &HarmonyguardReport) -> anyhow::Result<()> {
    let data = serialize_report(report).context("serialize report")?;
    write_bytes_file(path, &data).with_context(|| format!("write report: {}", path))
}

fn write_bytes_file(path: &camino::Utf8Path, data: &[u8]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    std::fs::write(path, data).with_context(|| format!("write file: {}", path))?;
    Ok(())
}

fn write_text_file(path: &camino::Utf8Path, text: &str) -> anyhow::Result<()> {
    write_bytes_file(path, text.as_bytes())
}

fn cmd_md(report_path: Utf8PathBuf, output: Option<Utf8PathBuf>) -> anyhow::Result<()> {
    let report_text = std::fs::read_to_string(&report_path)
        .with_context(|| format!("read report: {}", report_path))?;
    let report = parse_report_json(&report_text)?;
    let renderable = to_renderable(&report);
    let md = render_markdown(&renderable);

    if let Some(out_path) = output {
        write_text_file(&out_path, &md).context("write markdown output")?;
    } else {
        print!("{}", md);
    }

    Ok(())
}

fn cmd_explain(identifier: &str) -> anyhow::Result<()> {
    match run_explain(identifier) {
        ExplainOutput::Found(exp) => {
            print!("{}", harmonyguard_app::format_explanation(&exp));
            Ok(())
        }
        ExplainOutput::NotFound {
            identifier,
            available_check_ids,
            available_codes,
        } => {
            eprint!(
                "{}",
                harmonyguard_app::format_not_found(&identifier, available_check_ids, available_codes)
            );
            std::process::exit(1);
        }
    }
}
