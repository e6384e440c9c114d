use anyhow::Context;
use camino::Utf8Path;
use harmonyguard_domain::model::LoadedComponent;
use harmonyguard_types::{GamePath, SCHEMA_SNAPSHOT_V1};
use serde::Deserialize;

/// `harmonyguard.snapshot.v1` document: the host's loaded-assembly listing.
#[derive(Debug, Deserialize)]
struct SnapshotDoc {
    #[serde(default)]
    schema: Option<String>,
    components: Vec<SnapshotComponent>,
}

#[derive(Debug, Deserialize)]
struct SnapshotComponent {
    name: String,
    path: String,
    #[serde(default)]
    version: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("parse snapshot json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported snapshot schema: {0} (expected {SCHEMA_SNAPSHOT_V1})")]
    UnsupportedSchema(String),
}

/// Parse a snapshot document into the domain model.
///
/// Order is preserved. A version string that fails to parse degrades to
/// "no version metadata" — the analysis surfaces it instead of this adapter
/// failing the run.
pub fn parse_snapshot(text: &str) -> Result<Vec<LoadedComponent>, SnapshotError> {
    let doc: SnapshotDoc = serde_json::from_str(text)?;

    if let Some(schema) = &doc.schema {
        if schema != SCHEMA_SNAPSHOT_V1 {
            return Err(SnapshotError::UnsupportedSchema(schema.clone()));
        }
    }

    Ok(doc
        .components
        .into_iter()
        .map(|c| LoadedComponent {
            name: c.name,
            path: GamePath::new(&c.path),
            version: c.version.as_deref().and_then(|v| v.parse().ok()),
        })
        .collect())
}

/// Read and parse a snapshot file.
pub fn load_snapshot(path: &Utf8Path) -> anyhow::Result<Vec<LoadedComponent>> {
    let text =
        std::fs::read_to_string(path).with_context(|| format!("read snapshot: {path}"))?;
    parse_snapshot(&text).with_context(|| format!("parse snapshot: {path}"))
}
