//! `addrmerge-core` — Core types for the address-to-building merge engine.
//!
//! Pure data crate: coordinates, polygon rings, tag mappings, and feature
//! records, plus the point-in-ring containment predicate. No I/O and no
//! host dependencies; everything here is deterministic and testable in
//! isolation.

pub mod feature;
pub mod geo;
pub mod tags;

pub use feature::{AddressPoint, Building, NodeId, WayId};
pub use geo::{LatLon, Ring};
pub use tags::Tags;
