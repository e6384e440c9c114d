//! Stable identifiers for checks, finding codes, and the canonical install layout.
//!
//! `check_id` is a dotted namespace. `code` is a short snake_case discriminator.
//! The identity and folder names are wire-stable: they must match the strings
//! the game's assembly loader reports, byte for byte.

// Checks
pub const CHECK_INSTALL_DUPLICATE_CHECKER: &str = "install.duplicate_checker";
pub const CHECK_INSTALL_DUPLICATE_HARMONY: &str = "install.duplicate_harmony";

// Codes shared by both checks
pub const CODE_WRONG_LOCATION: &str = "wrong_location";
pub const CODE_UNRESOLVED_LOCATION: &str = "unresolved_location";
pub const CODE_CORRECT_LOCATION: &str = "correct_location";

// Codes: install.duplicate_harmony
pub const CODE_DEPRECATED_MAJOR: &str = "deprecated_major";
pub const CODE_UNRESOLVED_VERSION: &str = "unresolved_version";

// Tool-level
pub const CHECK_TOOL_RUNTIME: &str = "tool.runtime";
pub const CODE_RUNTIME_ERROR: &str = "runtime_error";

// Canonical install layout. The dependency folder is prefixed with "000_" so
// the loader picks it up before any mod that bundles its own copy.
pub const ROOT_FOLDER: &str = "GameData";
pub const HARMONY_FOLDER: &str = "000_Harmony";

// Assembly identities recognized by the classifier. Matching is exact and
// case-sensitive.
pub const CHECKER_ASSEMBLY: &str = "HarmonyInstallChecker";
pub const HARMONY_V1_ASSEMBLY: &str = "Harmony";
pub const HARMONY_V2_ASSEMBLY: &str = "0Harmony";
