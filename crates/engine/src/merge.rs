//! The merge pass: pair address points with the buildings containing them.
//!
//! Nested iteration, buildings outer, addresses inner, one containment
//! test per pair. Each positive match issues two edit commands through
//! the sink and counts one merge. Edits apply one at a time; there is no
//! batching and no rollback, so a sink failure aborts the remainder of
//! the pass and everything already applied stays applied.

use serde::Serialize;

use addrmerge_core::{AddressPoint, Building};

use crate::edit::{EditError, EditSink};

/// Knobs for the merge pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeOptions {
    /// Skip an address once it has matched a building.
    ///
    /// With abutting footprints an address point can sit inside two
    /// buildings at once. Consuming on first match attaches and removes
    /// it exactly once, for the lowest-id building. Turning this off
    /// reproduces the classic behavior: the same address is processed
    /// again for every later building that contains it.
    pub consume_matched: bool,
}

impl Default for MergeOptions {
    fn default() -> Self {
        Self {
            consume_matched: true,
        }
    }
}

/// What a merge pass did, in the numbers the operator sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MergeReport {
    /// Buildings considered.
    pub buildings: usize,
    /// Addresses considered.
    pub addresses: usize,
    /// Merges performed.
    pub merged: usize,
}

impl MergeReport {
    /// The operator-facing summary line. Wording is fixed; tests match
    /// the exact string.
    pub fn summary(&self) -> String {
        format!(
            "There were {} buildings and {} addresses. We've changed {} of them.",
            self.buildings, self.addresses, self.merged
        )
    }
}

impl std::fmt::Display for MergeReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.summary())
    }
}

/// Run the merge pass over two query snapshots.
///
/// For every (building, address) pair whose footprint contains the
/// address position: merge the address tags onto the building, delete
/// the address node, count one merge. Mutation order is building-major,
/// address-minor, following the snapshot order. The first sink error
/// propagates immediately.
pub fn merge_addresses<S: EditSink>(
    addresses: &[AddressPoint],
    buildings: &[Building],
    options: &MergeOptions,
    sink: &mut S,
) -> Result<MergeReport, EditError> {
    let mut consumed = vec![false; addresses.len()];
    let mut merged = 0usize;

    for building in buildings {
        for (index, address) in addresses.iter().enumerate() {
            if options.consume_matched && consumed[index] {
                continue;
            }
            if building.footprint.contains(address.position) {
                sink.attach_tags(building.id, &address.tags)?;
                sink.remove_feature(address.id)?;
                consumed[index] = true;
                merged += 1;
            }
        }
    }

    Ok(MergeReport {
        buildings: buildings.len(),
        addresses: addresses.len(),
        merged,
    })
}
