use camino::{Utf8Path, Utf8PathBuf};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Path into a game install, used in findings and reports.
///
/// Normalization rules are intentionally simple and deterministic:
/// - always forward slashes (`/`)
/// - no leading `./`
/// - casing is preserved (placement comparison is exact)
#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(transparent)]
pub struct GamePath(String);

impl Default for GamePath {
    fn default() -> Self {
        GamePath::new(".")
    }
}

impl GamePath {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        let mut v = s.as_ref().replace('\\', "/");
        while v.starts_with("./") {
            v = v.trim_start_matches("./").to_string();
        }
        // Avoid empty path; keep it explicit.
        if v.is_empty() {
            v = ".".to_string();
        }
        Self(v)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn to_utf8_pathbuf(&self) -> Utf8PathBuf {
        Utf8PathBuf::from(self.0.clone())
    }

    pub fn join(&self, segment: &str) -> GamePath {
        let base = Utf8Path::new(self.as_str());
        GamePath::new(base.join(segment).as_str())
    }

    /// Directory part of the path: everything before the final segment.
    ///
    /// `None` when the path has a single segment, so callers decide how to
    /// treat a bare filename.
    pub fn parent(&self) -> Option<GamePath> {
        let idx = self.0.rfind('/')?;
        Some(GamePath::new(&self.0[..idx]))
    }
}

impl From<&Utf8Path> for GamePath {
    fn from(value: &Utf8Path) -> Self {
        GamePath::new(value.as_str())
    }
}

impl From<Utf8PathBuf> for GamePath {
    fn from(value: Utf8PathBuf) -> Self {
        GamePath::new(value.as_str())
    }
}

impl std::fmt::Display for GamePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
