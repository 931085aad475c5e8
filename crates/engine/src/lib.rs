//! `addrmerge-engine` — Address-to-building merge engine.
//!
//! Pure engine crate: receives a working set, pairs address points with
//! the building footprints that contain them, and applies the resulting
//! edits through an injected sink. No CLI or IO dependencies; the host
//! editor is reached only through the [`edit::EditSink`] and
//! [`notify::Notifier`] boundaries.

pub mod edit;
pub mod events;
pub mod layer;
pub mod merge;
pub mod notify;
pub mod preflight;
pub mod query;
pub mod session;

#[cfg(test)]
pub mod harness;

pub use edit::{EditError, EditSink, RecordingSink};
pub use layer::{Layer, Node, Way};
pub use merge::{merge_addresses, MergeOptions, MergeReport};
pub use notify::{Notifier, RecordingNotifier};
pub use preflight::PreflightError;
pub use session::{run_session, SessionError};
