//! The merge session: preflight, query, merge, report.
//!
//! Straight pipeline with no feedback loop. Single-threaded and
//! synchronous; every edit completes before the next pair is tested.
//! There are no retries: the first failure aborts the run, and edits
//! already committed stay committed.

use crate::edit::EditError;
use crate::layer::Layer;
use crate::merge::{merge_addresses, MergeOptions, MergeReport};
use crate::notify::{Notifier, WORKING_SET_NOTICE};
use crate::preflight::{self, PreflightError};

/// Why a merge session aborted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// A precondition failed before any mutation.
    Preflight(PreflightError),
    /// The host rejected an edit command mid-run.
    Edit(EditError),
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Preflight(err) => write!(f, "preflight failed: {err}"),
            Self::Edit(err) => write!(f, "edit rejected: {err}"),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Preflight(err) => Some(err),
            Self::Edit(err) => Some(err),
        }
    }
}

impl From<PreflightError> for SessionError {
    fn from(err: PreflightError) -> Self {
        Self::Preflight(err)
    }
}

impl From<EditError> for SessionError {
    fn from(err: EditError) -> Self {
        Self::Edit(err)
    }
}

/// Run one merge session against the active working set.
///
/// Order of business:
/// 1. Ask the operator to confirm the working set.
/// 2. Preflight the layer (selected, non-empty).
/// 3. Snapshot both queries and preflight them (non-empty).
/// 4. Run the merge pass with the layer as the edit sink.
/// 5. Report the summary line.
pub fn run_session<N: Notifier>(
    layer: Option<&mut Layer>,
    options: &MergeOptions,
    notifier: &mut N,
) -> Result<MergeReport, SessionError> {
    notifier.alert(WORKING_SET_NOTICE);

    let layer = preflight::check_active_layer(layer)?;

    let buildings = layer.unaddressed_buildings();
    let addresses = layer.address_nodes();
    preflight::check_working_sets(&buildings, &addresses)?;

    let report = merge_addresses(&addresses, &buildings, options, layer)?;

    notifier.alert(&report.summary());
    Ok(report)
}
