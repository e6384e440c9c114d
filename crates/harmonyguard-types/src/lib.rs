//! Stable DTOs and IDs used across the harmonyguard workspace.
//!
//! This crate is intentionally boring:
//! - data types for the emitted report and blocking notice
//! - stable string IDs, identity names, and layout constants
//! - canonical game-relative path handling
//! - the assembly version model and its ordering
//! - explain registry for remediation guidance

#![forbid(unsafe_code)]

pub mod explain;
pub mod ids;
pub mod path;
pub mod receipt;
pub mod version;

pub use explain::{ExamplePair, Explanation, lookup_explanation};
pub use path::GamePath;
pub use receipt::{
    BlockingNotice, Finding, HarmonyguardData, HarmonyguardReport, NoticeAction, Severity,
    ToolMeta, Verdict, VersionClass, SCHEMA_REPORT_V1, SCHEMA_SNAPSHOT_V1,
};
pub use version::{AssemblyVersion, ParseVersionError, HARMONY_V2_BOUNDARY};
