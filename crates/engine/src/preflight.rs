//! Precondition guards.
//!
//! Every failure here aborts the run before any mutation, with a message
//! naming the likely operator mistake.

use addrmerge_core::{AddressPoint, Building};

use crate::layer::Layer;

/// A precondition the session refuses to run without.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreflightError {
    /// No working set is selected at all.
    NoActiveLayer,
    /// The active layer exists but holds no features.
    EmptyLayer { layer: String },
    /// The building query came back empty.
    NoBuildings,
    /// The address query came back empty.
    NoAddresses,
}

impl std::fmt::Display for PreflightError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoActiveLayer => {
                write!(f, "no active layer; set the data layer you want to process as active")
            }
            Self::EmptyLayer { layer } => write!(
                f,
                "active layer '{layer}' has no data to process; set the data layer you want to process as active"
            ),
            Self::NoBuildings => {
                write!(f, "the active layer has no building ways without an address tag")
            }
            Self::NoAddresses => write!(f, "the active layer has no address nodes"),
        }
    }
}

impl std::error::Error for PreflightError {}

/// Require a selected, non-empty working set, and hand it back.
pub fn check_active_layer(layer: Option<&mut Layer>) -> Result<&mut Layer, PreflightError> {
    let layer = layer.ok_or(PreflightError::NoActiveLayer)?;
    if layer.is_empty() {
        return Err(PreflightError::EmptyLayer {
            layer: layer.name().to_string(),
        });
    }
    Ok(layer)
}

/// Require both query snapshots to be non-empty.
///
/// An empty snapshot means the operator picked the wrong layer; aborting
/// beats reporting a zero-merge run on the wrong data.
pub fn check_working_sets(
    buildings: &[Building],
    addresses: &[AddressPoint],
) -> Result<(), PreflightError> {
    if buildings.is_empty() {
        return Err(PreflightError::NoBuildings);
    }
    if addresses.is_empty() {
        return Err(PreflightError::NoAddresses);
    }
    Ok(())
}
