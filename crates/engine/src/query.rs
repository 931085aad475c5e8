//! Working-set queries: the read-only half of the host boundary.
//!
//! Both queries return id-sorted snapshots. The merge pass never
//! re-queries, so the snapshots go stale as edits land; the sort order is
//! what fixes the user-visible building-major, address-minor edit order.

use addrmerge_core::{AddressPoint, Building, LatLon, Ring};

use crate::layer::Layer;

/// Tag key identifying a building way.
pub const BUILDING_KEY: &str = "building";

/// Tag key identifying an address. A way carrying it already has an
/// address; a node carrying it is an address point.
pub const ADDRESS_KEY: &str = "addr:housenumber";

impl Layer {
    /// Snapshot of building ways that do not yet carry an address tag.
    ///
    /// A way referencing a node missing from the layer is skipped; data
    /// downloaded from the host routinely references nodes outside the
    /// downloaded area. An explicit closing node (first member repeated
    /// last) is dropped; the ring is implicitly closed. Degenerate
    /// footprints are kept: the containment test classifies them as
    /// containing nothing.
    pub fn unaddressed_buildings(&self) -> Vec<Building> {
        let mut buildings = Vec::new();

        for (id, way) in self.ways() {
            if !way.tags.contains_key(BUILDING_KEY) || way.tags.contains_key(ADDRESS_KEY) {
                continue;
            }

            let mut members = way.nodes.as_slice();
            if members.len() > 1 && members.first() == members.last() {
                members = &members[..members.len() - 1];
            }

            let mut vertices: Vec<LatLon> = Vec::with_capacity(members.len());
            let mut resolved = true;
            for &node_id in members {
                match self.node(node_id) {
                    Some(node) => vertices.push(node.position),
                    None => {
                        eprintln!("[query] skipping way {id}: member node {node_id} is not in layer '{}'", self.name());
                        resolved = false;
                        break;
                    }
                }
            }
            if !resolved {
                continue;
            }

            buildings.push(Building {
                id,
                footprint: Ring::new(vertices),
                tags: way.tags.clone(),
            });
        }

        buildings.sort_by_key(|building| building.id);
        buildings
    }

    /// Snapshot of nodes carrying an address tag.
    pub fn address_nodes(&self) -> Vec<AddressPoint> {
        let mut addresses: Vec<AddressPoint> = self
            .nodes()
            .filter(|(_, node)| node.tags.contains_key(ADDRESS_KEY))
            .map(|(id, node)| AddressPoint {
                id,
                position: node.position,
                tags: node.tags.clone(),
            })
            .collect();

        addresses.sort_by_key(|address| address.id);
        addresses
    }
}
