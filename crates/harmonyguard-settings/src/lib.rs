//! Configuration parsing and policy resolution for harmonyguard.
//!
//! The file format (`harmonyguard.toml`) is permissive; presets supply the
//! opinionated defaults and CLI overrides win over everything.

#![forbid(unsafe_code)]

mod model;
mod presets;
mod resolve;

use anyhow::Context;

pub use model::{CheckConfig, HarmonyguardConfigV1, LayoutConfig};
pub use presets::preset;
pub use resolve::{Overrides, ResolvedConfig, resolve_config};

pub fn parse_config_toml(text: &str) -> anyhow::Result<HarmonyguardConfigV1> {
    toml::from_str(text).context("parse harmonyguard.toml")
}
