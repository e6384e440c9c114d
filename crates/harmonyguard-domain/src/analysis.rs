//! Placement resolution and version classification.
//!
//! This is the shared half of both conflict checks: given a bucket of
//! same-identity components, resolve where each copy actually sits relative
//! to the game root and how its version classifies.

use crate::model::LoadedComponent;
use crate::policy::CanonicalLayout;
use harmonyguard_types::{AssemblyVersion, GamePath, HARMONY_V2_BOUNDARY, VersionClass};

/// Where one copy resolved to, and whether that proves anything.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Placement {
    /// Root-relative install directory, or the raw path when unresolved.
    pub resolved_path: GamePath,
    /// Whether the root-folder marker was found in the raw path.
    pub resolved: bool,
    /// Exact match against the canonical path. Unresolved copies are never
    /// correct: they cannot be proven canonical.
    pub correct: bool,
}

/// Per-component verdict for one bucket member.
#[derive(Clone, Debug)]
pub struct InstallFinding {
    pub name: String,
    pub raw_path: GamePath,
    pub placement: Placement,
    pub version: Option<AssemblyVersion>,
    pub version_class: Option<VersionClass>,
}

/// Analyzer output for one bucket.
#[derive(Clone, Debug, Default)]
pub struct BucketAnalysis {
    pub findings: Vec<InstallFinding>,
    /// True when at least one member resolved to the canonical path.
    pub right_path_exists: bool,
}

/// Locate `marker` in `haystack`, ignoring ASCII case.
///
/// Byte positions survive the lowercasing because ASCII case folding is
/// 1:1 on bytes.
fn find_marker_ignore_case(haystack: &str, marker: &str) -> Option<usize> {
    haystack
        .to_ascii_lowercase()
        .find(&marker.to_ascii_lowercase())
}

/// Best-effort root-relative install directory for one raw load path.
///
/// Takes everything from the root-folder marker onward and strips the
/// trailing filename. Paths without the marker come back unmodified and
/// flagged unresolved.
pub fn resolve_install_dir(raw: &GamePath, root_folder: &str) -> (GamePath, bool) {
    match find_marker_ignore_case(raw.as_str(), root_folder) {
        Some(idx) => {
            let tail = GamePath::new(&raw.as_str()[idx..]);
            let dir = tail.parent().unwrap_or_else(|| GamePath::new(""));
            (dir, true)
        }
        None => (raw.clone(), false),
    }
}

/// Strictly below 2.0.0.0 is the deprecated v1 release line; the boundary
/// itself is current.
pub fn classify_version(version: AssemblyVersion) -> VersionClass {
    if version < HARMONY_V2_BOUNDARY {
        VersionClass::Deprecated
    } else {
        VersionClass::Current
    }
}

/// Analyze one bucket of same-identity components.
///
/// Ties are not broken: every member on the canonical path is marked
/// correct, and `right_path_exists` only records that a correct copy exists
/// somewhere.
pub fn analyze_bucket(members: &[LoadedComponent], layout: &CanonicalLayout) -> BucketAnalysis {
    let canonical = layout.canonical_path();

    let mut findings = Vec::with_capacity(members.len());
    let mut right_path_exists = false;

    for member in members {
        let (resolved_path, resolved) = resolve_install_dir(&member.path, &layout.root_folder);
        let correct = resolved && resolved_path == canonical;
        if correct {
            right_path_exists = true;
        }

        findings.push(InstallFinding {
            name: member.name.clone(),
            raw_path: member.path.clone(),
            placement: Placement {
                resolved_path,
                resolved,
                correct,
            },
            version: member.version,
            version_class: member.version.map(classify_version),
        });
    }

    BucketAnalysis {
        findings,
        right_path_exists,
    }
}
