//! The host mutation boundary.
//!
//! The merge pass never reaches into the host editor directly; it is
//! handed an [`EditSink`] and issues its two edit commands through it.
//! [`Layer`] is the live-dataset sink; [`RecordingSink`] is a pure
//! recorder for tests.

use addrmerge_core::{NodeId, Tags, WayId};

use crate::events::{EditEvent, EventCollector};
use crate::layer::Layer;

/// Receiver for the two edit commands the merge pass emits.
///
/// Both commands are transactional per call: on `Ok` the change is
/// committed and immediately visible in the live dataset.
pub trait EditSink {
    /// Merge `tags` onto a building's tag mapping, overwriting key
    /// collisions (the incoming address tags take precedence).
    fn attach_tags(&mut self, building: WayId, tags: &Tags) -> Result<(), EditError>;

    /// Delete the now-redundant address point from the live dataset.
    fn remove_feature(&mut self, address: NodeId) -> Result<(), EditError>;
}

/// A rejected edit command.
///
/// Not caught anywhere in the engine: the first failure aborts the rest
/// of the run, and edits committed before it stay applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditError {
    /// The targeted building way does not exist in the live dataset.
    UnknownWay(WayId),
    /// The targeted node does not exist in the live dataset.
    UnknownNode(NodeId),
    /// The targeted node is still referenced by a way.
    NodeInUse(NodeId),
}

impl std::fmt::Display for EditError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownWay(way) => write!(f, "no way {way} in the active layer"),
            Self::UnknownNode(node) => write!(f, "no node {node} in the active layer"),
            Self::NodeInUse(node) => {
                write!(f, "node {node} is still referenced by a way and cannot be deleted")
            }
        }
    }
}

impl std::error::Error for EditError {}

impl EditSink for Layer {
    fn attach_tags(&mut self, building: WayId, tags: &Tags) -> Result<(), EditError> {
        Layer::attach_tags(self, building, tags)
    }

    fn remove_feature(&mut self, address: NodeId) -> Result<(), EditError> {
        Layer::remove_feature(self, address)
    }
}

/// Sink that records edit commands instead of applying them.
///
/// Never fails, and tolerates repeated removal of the same feature, which
/// makes it the right collaborator for exercising the merge pass in
/// isolation.
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: EventCollector,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &EventCollector {
        &self.events
    }
}

impl EditSink for RecordingSink {
    fn attach_tags(&mut self, building: WayId, tags: &Tags) -> Result<(), EditError> {
        self.events.push(EditEvent::TagsAttached {
            way: building,
            tags: tags.clone(),
        });
        Ok(())
    }

    fn remove_feature(&mut self, address: NodeId) -> Result<(), EditError> {
        self.events.push(EditEvent::FeatureRemoved { node: address });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use addrmerge_core::LatLon;
    use crate::layer::Node;

    #[test]
    fn recording_sink_captures_command_order() {
        let mut sink = RecordingSink::new();
        let tags = Tags::from_pairs([("addr:housenumber", "12")]);

        sink.attach_tags(WayId(10), &tags).unwrap();
        sink.remove_feature(NodeId(3)).unwrap();

        assert_eq!(sink.events().len(), 2);
        assert_eq!(
            sink.events().events()[0],
            EditEvent::TagsAttached {
                way: WayId(10),
                tags: tags.clone()
            }
        );
        assert_eq!(
            sink.events().events()[1],
            EditEvent::FeatureRemoved { node: NodeId(3) }
        );
    }

    #[test]
    fn recording_sink_tolerates_duplicate_removal() {
        let mut sink = RecordingSink::new();
        sink.remove_feature(NodeId(3)).unwrap();
        sink.remove_feature(NodeId(3)).unwrap();
        assert_eq!(sink.events().features_removed().len(), 2);
    }

    #[test]
    fn layer_sink_applies_commands() {
        let mut layer = Layer::new("live");
        layer.insert_node(NodeId(3), Node::new(LatLon::new(5.0, 5.0)));
        layer.insert_way(
            WayId(10),
            crate::layer::Way::new(vec![], Tags::from_pairs([("building", "yes")])),
        );

        let sink: &mut dyn EditSink = &mut layer;
        sink.attach_tags(WayId(10), &Tags::from_pairs([("addr:housenumber", "12")]))
            .unwrap();
        sink.remove_feature(NodeId(3)).unwrap();

        assert_eq!(
            layer.way(WayId(10)).unwrap().tags.get("addr:housenumber"),
            Some("12")
        );
        assert!(layer.node(NodeId(3)).is_none());
        assert_eq!(layer.revision(), 2);
    }
}
