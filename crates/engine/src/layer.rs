//! The working set: an in-memory snapshot of the host editor's live dataset.
//!
//! A [`Layer`] holds the point and polygon features of the currently
//! active editing session. Edit commands mutate it in place, one at a
//! time; each committed command bumps the revision counter. Inserts are
//! setup, not commands, and leave the revision alone.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use addrmerge_core::{LatLon, NodeId, Tags, WayId};

use crate::edit::EditError;

/// A point feature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub position: LatLon,
    #[serde(default)]
    pub tags: Tags,
}

impl Node {
    pub fn new(position: LatLon) -> Self {
        Self {
            position,
            tags: Tags::new(),
        }
    }

    pub fn with_tags(position: LatLon, tags: Tags) -> Self {
        Self { position, tags }
    }
}

/// A way feature: an ordered list of member node references.
///
/// A building way's footprint is derived from its member nodes by the
/// query layer; the way itself stores only the references.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Way {
    pub nodes: Vec<NodeId>,
    #[serde(default)]
    pub tags: Tags,
}

impl Way {
    pub fn new(nodes: Vec<NodeId>, tags: Tags) -> Self {
        Self { nodes, tags }
    }
}

/// A named working set of nodes and ways.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Layer {
    name: String,
    nodes: FxHashMap<NodeId, Node>,
    ways: FxHashMap<WayId, Way>,
    /// Count of committed edit commands. Not part of the on-disk shape.
    #[serde(skip)]
    revision: u64,
}

impl Layer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            nodes: FxHashMap::default(),
            ways: FxHashMap::default(),
            revision: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Revision advances by one per committed edit command.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.ways.is_empty()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn way_count(&self) -> usize {
        self.ways.len()
    }

    pub fn insert_node(&mut self, id: NodeId, node: Node) {
        self.nodes.insert(id, node);
    }

    pub fn insert_way(&mut self, id: WayId, way: Way) {
        self.ways.insert(id, way);
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    pub fn way(&self, id: WayId) -> Option<&Way> {
        self.ways.get(&id)
    }

    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes.iter().map(|(&id, node)| (id, node))
    }

    pub fn ways(&self) -> impl Iterator<Item = (WayId, &Way)> {
        self.ways.iter().map(|(&id, way)| (id, way))
    }

    /// Merge `tags` onto a way's tags, overwriting key collisions, and
    /// commit. The incoming mapping wins on collision.
    pub fn attach_tags(&mut self, way: WayId, tags: &Tags) -> Result<(), EditError> {
        let target = self.ways.get_mut(&way).ok_or(EditError::UnknownWay(way))?;
        target.tags.merge_from(tags);
        self.revision += 1;
        Ok(())
    }

    /// Delete a free-standing node and commit.
    ///
    /// Fails if the node is unknown or still referenced by a way; a
    /// member node cannot be deleted out from under its way.
    pub fn remove_feature(&mut self, node: NodeId) -> Result<(), EditError> {
        if !self.nodes.contains_key(&node) {
            return Err(EditError::UnknownNode(node));
        }
        if self.ways.values().any(|way| way.nodes.contains(&node)) {
            return Err(EditError::NodeInUse(node));
        }
        self.nodes.remove(&node);
        self.revision += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_layer() -> Layer {
        let mut layer = Layer::new("test");
        layer.insert_node(NodeId(1), Node::new(LatLon::new(0.0, 0.0)));
        layer.insert_node(NodeId(2), Node::new(LatLon::new(0.0, 10.0)));
        layer.insert_node(
            NodeId(3),
            Node::with_tags(
                LatLon::new(5.0, 5.0),
                Tags::from_pairs([("addr:housenumber", "12")]),
            ),
        );
        layer.insert_way(
            WayId(10),
            Way::new(
                vec![NodeId(1), NodeId(2)],
                Tags::from_pairs([("building", "yes")]),
            ),
        );
        layer
    }

    #[test]
    fn inserts_do_not_bump_revision() {
        let layer = sample_layer();
        assert_eq!(layer.revision(), 0);
        assert_eq!(layer.node_count(), 3);
        assert_eq!(layer.way_count(), 1);
        assert!(!layer.is_empty());
    }

    #[test]
    fn attach_tags_merges_and_commits() {
        let mut layer = sample_layer();
        let address = Tags::from_pairs([("addr:housenumber", "12"), ("building", "house")]);

        layer.attach_tags(WayId(10), &address).unwrap();

        let way = layer.way(WayId(10)).unwrap();
        assert_eq!(way.tags.get("addr:housenumber"), Some("12"));
        // Incoming value wins on collision
        assert_eq!(way.tags.get("building"), Some("house"));
        assert_eq!(layer.revision(), 1);
    }

    #[test]
    fn attach_tags_unknown_way_fails() {
        let mut layer = sample_layer();
        let err = layer.attach_tags(WayId(99), &Tags::new()).unwrap_err();
        assert_eq!(err, EditError::UnknownWay(WayId(99)));
        assert_eq!(layer.revision(), 0);
    }

    #[test]
    fn remove_feature_deletes_free_node() {
        let mut layer = sample_layer();
        layer.remove_feature(NodeId(3)).unwrap();
        assert!(layer.node(NodeId(3)).is_none());
        assert_eq!(layer.revision(), 1);
    }

    #[test]
    fn remove_feature_refuses_member_node() {
        let mut layer = sample_layer();
        let err = layer.remove_feature(NodeId(1)).unwrap_err();
        assert_eq!(err, EditError::NodeInUse(NodeId(1)));
        assert!(layer.node(NodeId(1)).is_some());
    }

    #[test]
    fn remove_feature_unknown_node_fails() {
        let mut layer = sample_layer();
        let err = layer.remove_feature(NodeId(99)).unwrap_err();
        assert_eq!(err, EditError::UnknownNode(NodeId(99)));
    }
}
