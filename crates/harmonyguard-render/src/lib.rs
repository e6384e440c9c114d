//! Rendering utilities for the user notice and report artifacts.

#![forbid(unsafe_code)]

mod dialog;
mod markdown;
mod model;

pub use dialog::{DIALOG_TITLE, QUIT_ACTION_LABEL, render_dialog_body, render_plain};
pub use markdown::render_markdown;
pub use model::{
    RenderableConflict, RenderableConflictKind, RenderableData, RenderableFinding,
    RenderableInstall, RenderableReport, RenderableSeverity, RenderableVerdictStatus,
};
