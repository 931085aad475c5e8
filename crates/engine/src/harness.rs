//! Test harness for merge sessions.
//!
//! Wraps a [`Layer`] and a [`RecordingNotifier`] with fixture-building
//! helpers, so session tests read as scenarios instead of setup.

use addrmerge_core::{LatLon, NodeId, Tags, WayId};

use crate::layer::{Layer, Node, Way};
use crate::merge::{MergeOptions, MergeReport};
use crate::notify::RecordingNotifier;
use crate::session::{run_session, SessionError};

pub struct MergeHarness {
    layer: Layer,
    notifier: RecordingNotifier,
}

impl MergeHarness {
    pub fn new() -> Self {
        Self {
            layer: Layer::new("test layer"),
            notifier: RecordingNotifier::new(),
        }
    }

    pub fn layer(&self) -> &Layer {
        &self.layer
    }

    pub fn layer_mut(&mut self) -> &mut Layer {
        &mut self.layer
    }

    /// Messages alerted so far.
    pub fn alerts(&self) -> &[String] {
        self.notifier.messages()
    }

    /// Insert four untagged corner nodes of an axis-aligned square with
    /// ids `base..base+3`, returning them in ring order.
    pub fn add_square(&mut self, base: u64, lat: f64, lon: f64, size: f64) -> Vec<NodeId> {
        let corners = [
            LatLon::new(lat, lon),
            LatLon::new(lat, lon + size),
            LatLon::new(lat + size, lon + size),
            LatLon::new(lat + size, lon),
        ];
        corners
            .iter()
            .enumerate()
            .map(|(offset, &corner)| {
                let id = NodeId(base + offset as u64);
                self.layer.insert_node(id, Node::new(corner));
                id
            })
            .collect()
    }

    /// Insert an unaddressed building way over the given member nodes.
    pub fn add_building(&mut self, raw_id: u64, members: &[NodeId]) -> WayId {
        let id = WayId(raw_id);
        self.layer.insert_way(
            id,
            Way::new(members.to_vec(), Tags::from_pairs([("building", "yes")])),
        );
        id
    }

    /// Insert an address node.
    pub fn add_address(&mut self, raw_id: u64, lat: f64, lon: f64, housenumber: &str) -> NodeId {
        let id = NodeId(raw_id);
        self.layer.insert_node(
            id,
            Node::with_tags(
                LatLon::new(lat, lon),
                Tags::from_pairs([("addr:housenumber", housenumber)]),
            ),
        );
        id
    }

    /// Run a session against the harness layer.
    pub fn run(&mut self, options: &MergeOptions) -> Result<MergeReport, SessionError> {
        run_session(Some(&mut self.layer), options, &mut self.notifier)
    }
}

impl Default for MergeHarness {
    fn default() -> Self {
        Self::new()
    }
}
