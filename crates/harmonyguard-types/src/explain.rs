//! Explain registry for checks and codes.
//!
//! Maps check IDs and codes to human-readable explanations with remediation
//! guidance.

use crate::ids;

/// Explanation entry for a check or code.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short description of the check/code.
    pub title: &'static str,
    /// What the check does and why it exists.
    pub description: &'static str,
    /// How to fix violations.
    pub remediation: &'static str,
    /// Before/after install layout examples.
    pub examples: ExamplePair,
}

/// Before and after install layout examples.
#[derive(Debug, Clone)]
pub struct ExamplePair {
    /// Layout that would trigger a finding.
    pub before: &'static str,
    /// Layout that passes the check.
    pub after: &'static str,
}

/// Look up an explanation by check_id or code.
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    // Try check_id first, then code
    match identifier {
        // Check IDs
        ids::CHECK_INSTALL_DUPLICATE_CHECKER => Some(explain_duplicate_checker()),
        ids::CHECK_INSTALL_DUPLICATE_HARMONY => Some(explain_duplicate_harmony()),

        // Codes
        ids::CODE_WRONG_LOCATION => Some(explain_wrong_location()),
        ids::CODE_UNRESOLVED_LOCATION => Some(explain_unresolved_location()),
        ids::CODE_CORRECT_LOCATION => Some(explain_correct_location()),
        ids::CODE_DEPRECATED_MAJOR => Some(explain_deprecated_major()),
        ids::CODE_UNRESOLVED_VERSION => Some(explain_unresolved_version()),

        _ => None,
    }
}

/// List all known check IDs.
pub fn all_check_ids() -> &'static [&'static str] {
    &[
        ids::CHECK_INSTALL_DUPLICATE_CHECKER,
        ids::CHECK_INSTALL_DUPLICATE_HARMONY,
    ]
}

/// List all known codes.
pub fn all_codes() -> &'static [&'static str] {
    &[
        ids::CODE_WRONG_LOCATION,
        ids::CODE_UNRESOLVED_LOCATION,
        ids::CODE_CORRECT_LOCATION,
        ids::CODE_DEPRECATED_MAJOR,
        ids::CODE_UNRESOLVED_VERSION,
    ]
}

// --- Check-level explanations ---

fn explain_duplicate_checker() -> Explanation {
    Explanation {
        title: "Duplicate Install Checker",
        description: "\
Detects more than one loaded copy of the install checker assembly itself.

A duplicated checker means a mod shipped its own copy of this tool, or the
user unpacked the Harmony distribution into more than one folder. Stale
checker code keeps running alongside the current one, and its report can
mask a real Harmony conflict, so this check fires before any Harmony
analysis.",
        remediation: "\
Keep exactly one copy, in the canonical Harmony folder:
- Remove every copy outside GameData/000_Harmony
- If a mod bundles the checker, delete the bundled copy and report it to
  the mod author",
        examples: ExamplePair {
            before: "\
GameData/000_Harmony/HarmonyInstallChecker.dll
GameData/SomeMod/HarmonyInstallChecker.dll",
            after: "GameData/000_Harmony/HarmonyInstallChecker.dll",
        },
    }
}

fn explain_duplicate_harmony() -> Explanation {
    Explanation {
        title: "Duplicate Harmony Installation",
        description: "\
Detects more than one loaded copy of the Harmony patching library, across
both release lines (v1 \"Harmony\", v2 \"0Harmony\").

Two loaded Harmony assemblies patch the same game code independently and
corrupt each other's state. This is a blocking condition: the game must be
closed and the installation fixed before playing.",
        remediation: "\
Keep exactly one Harmony, in the canonical folder:
- Remove every copy outside GameData/000_Harmony
- If a mod bundles Harmony v1, remove that mod and ask its author to ship
  the community-distributed Harmony instead",
        examples: ExamplePair {
            before: "\
GameData/000_Harmony/0Harmony.dll
GameData/SomeMod/0Harmony.dll",
            after: "GameData/000_Harmony/0Harmony.dll",
        },
    }
}

// --- Code-level explanations ---

fn explain_wrong_location() -> Explanation {
    Explanation {
        title: "Wrong Install Location",
        description: "\
The assembly was loaded from a GameData folder other than the canonical
Harmony folder. Only the copy in the canonical folder is supported; extra
copies elsewhere conflict with it.",
        remediation: "Delete the copy at the reported path.",
        examples: ExamplePair {
            before: "GameData/SomeMod/0Harmony.dll",
            after: "GameData/000_Harmony/0Harmony.dll",
        },
    }
}

fn explain_unresolved_location() -> Explanation {
    Explanation {
        title: "Unresolved Install Location",
        description: "\
The assembly's load path contains no GameData marker, so its install
location cannot be proven canonical. Ambiguous installs are treated as
incorrectly placed rather than trusted.",
        remediation: "\
Move the assembly under the game's GameData folder, in the canonical
Harmony subfolder, and remove the stray copy.",
        examples: ExamplePair {
            before: "C:/Downloads/0Harmony.dll",
            after: "GameData/000_Harmony/0Harmony.dll",
        },
    }
}

fn explain_correct_location() -> Explanation {
    Explanation {
        title: "Correct Install Location",
        description: "\
The assembly sits in the canonical Harmony folder. Emitted alongside the
conflict findings so the report names which copy to keep.",
        remediation: "Keep this copy; remove the other installation(s).",
        examples: ExamplePair {
            before: "\
GameData/000_Harmony/0Harmony.dll
GameData/SomeMod/0Harmony.dll",
            after: "GameData/000_Harmony/0Harmony.dll",
        },
    }
}

fn explain_deprecated_major() -> Explanation {
    Explanation {
        title: "Deprecated Harmony Major Version",
        description: "\
The loaded Harmony assembly is below 2.0.0.0, i.e. the deprecated v1
release line. Harmony v1 conflicts with the v2 distribution this checker
protects.",
        remediation: "\
Remove the mod that bundles Harmony v1 and ask its author to depend on the
community-distributed Harmony v2 instead.",
        examples: ExamplePair {
            before: "GameData/SomeMod/Harmony.dll (1.2.0.0)",
            after: "GameData/000_Harmony/0Harmony.dll (2.1.0.0)",
        },
    }
}

fn explain_unresolved_version() -> Explanation {
    Explanation {
        title: "Unresolved Harmony Version",
        description: "\
Version metadata for a loaded Harmony assembly could not be read. The copy
is still reported with its placement verdict, but it cannot be classified
as v1 or v2.",
        remediation: "\
Replace the assembly with an intact copy of the community-distributed
Harmony.",
        examples: ExamplePair {
            before: "GameData/SomeMod/0Harmony.dll (unreadable metadata)",
            after: "GameData/000_Harmony/0Harmony.dll (2.1.0.0)",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_check_id_and_code_has_an_explanation() {
        for id in all_check_ids() {
            assert!(lookup_explanation(id).is_some(), "missing explanation: {id}");
        }
        for code in all_codes() {
            assert!(
                lookup_explanation(code).is_some(),
                "missing explanation: {code}"
            );
        }
    }

    #[test]
    fn unknown_identifier_is_none() {
        assert!(lookup_explanation("install.nope").is_none());
    }
}
