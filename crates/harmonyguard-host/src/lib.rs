//! Adapter between the host runtime's view of loaded assemblies and the
//! domain model.
//!
//! The core never discovers components itself; the host hands over a
//! snapshot document and this crate turns it into `LoadedComponent`s.

#![forbid(unsafe_code)]

mod snapshot;

pub use snapshot::{SnapshotError, load_snapshot, parse_snapshot};
