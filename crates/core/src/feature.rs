//! Feature identity and the two feature records the merge pass consumes.
//!
//! Ids are opaque handles into the host dataset. Point features (nodes)
//! and polygon features (ways) live in separate id namespaces, so the two
//! handle types are kept distinct.

use serde::{Deserialize, Serialize};

use crate::geo::{LatLon, Ring};
use crate::tags::Tags;

/// Handle of a point feature in the host dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub u64);

impl NodeId {
    #[inline]
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    #[inline]
    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "n{}", self.0)
    }
}

/// Handle of a polygon (way) feature in the host dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WayId(pub u64);

impl WayId {
    #[inline]
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    #[inline]
    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for WayId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "w{}", self.0)
    }
}

/// A building polygon lacking address tags, snapshotted from the host.
///
/// The footprint is derived from the way's member nodes by the query
/// layer. It may be degenerate; the containment test tolerates that.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Building {
    pub id: WayId,
    pub footprint: Ring,
    pub tags: Tags,
}

/// A point feature carrying address tags, snapshotted from the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddressPoint {
    pub id: NodeId,
    pub position: LatLon,
    pub tags: Tags,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_display() {
        assert_eq!(format!("{}", NodeId::from_raw(42)), "n42");
        assert_eq!(format!("{}", WayId::from_raw(7)), "w7");
    }

    #[test]
    fn id_equality_and_hash() {
        use std::collections::HashSet;

        let mut set = HashSet::new();
        set.insert(NodeId(1));
        set.insert(NodeId(1)); // duplicate
        set.insert(NodeId(2));
        assert_eq!(set.len(), 2);

        assert_ne!(WayId(1).raw(), WayId(2).raw());
    }
}
