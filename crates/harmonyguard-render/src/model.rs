#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableSeverity {
    Info,
    Warning,
    Error,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableVerdictStatus {
    Pass,
    Warn,
    Fail,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableFinding {
    pub severity: RenderableSeverity,
    pub check_id: String,
    pub code: String,
    pub message: String,
    pub location: Option<String>,
    pub help: Option<String>,
    pub url: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableData {
    pub components_scanned: u32,
    pub findings_total: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableReport {
    pub verdict: RenderableVerdictStatus,
    pub findings: Vec<RenderableFinding>,
    pub data: RenderableData,
}

/// Which bucket the dialog section reports on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableConflictKind {
    DuplicateChecker,
    DuplicateHarmony,
}

/// One installed copy as the dialog presents it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableInstall {
    /// Version string, `None` when metadata was unreadable. Only rendered
    /// for Harmony copies.
    pub version: Option<String>,
    /// Resolved install directory, or the raw path when unresolved.
    pub display_path: String,
    pub correct: bool,
    pub deprecated: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableConflict {
    pub kind: RenderableConflictKind,
    pub installs: Vec<RenderableInstall>,
    pub right_path_exists: bool,
    pub canonical_path: String,
}
