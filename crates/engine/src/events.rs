//! Edit-intent event types.
//!
//! Each positive match produces two events: a tag attachment and a
//! feature removal. The collector exists so tests can verify command
//! ordering without a live dataset.

use addrmerge_core::{NodeId, Tags, WayId};

/// An edit command as observed at the sink boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum EditEvent {
    /// A tag mapping was merged onto a building way.
    TagsAttached { way: WayId, tags: Tags },

    /// An address node was deleted from the live dataset.
    FeatureRemoved { node: NodeId },
}

/// Simple event collector for testing.
#[derive(Debug, Default)]
pub struct EventCollector {
    events: Vec<EditEvent>,
}

impl EventCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: EditEvent) {
        self.events.push(event);
    }

    pub fn events(&self) -> &[EditEvent] {
        &self.events
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Filter to only TagsAttached events, as `(way, tags)` pairs.
    pub fn tags_attached(&self) -> Vec<(WayId, &Tags)> {
        self.events
            .iter()
            .filter_map(|e| match e {
                EditEvent::TagsAttached { way, tags } => Some((*way, tags)),
                _ => None,
            })
            .collect()
    }

    /// Filter to only FeatureRemoved events, as node ids.
    pub fn features_removed(&self) -> Vec<NodeId> {
        self.events
            .iter()
            .filter_map(|e| match e {
                EditEvent::FeatureRemoved { node } => Some(*node),
                _ => None,
            })
            .collect()
    }
}
