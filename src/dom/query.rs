//! DOM queries: by id, class; generic predicate matching.

use super::node::{NodeData, NodeId};
use super::tree::Dom;

impl Dom {
    /// Find the first node whose `id` field matches the given string.
    ///
    /// Iterates all nodes in the arena, including detached ones.
    pub fn query_by_id(&self, id: &str) -> Option<NodeId> {
        self.iter_nodes()
            .find(|(_, data)| data.id.as_deref() == Some(id))
            .map(|(node_id, _)| node_id)
    }

    /// Find all nodes that have the given CSS class, in tree order under `start`.
    pub fn query_by_class(&self, start: NodeId, class: &str) -> Vec<NodeId> {
        self.query_all(start, |data| data.has_class(class))
    }

    /// Find all nodes under `start` (inclusive) matching a predicate, in tree order.
    pub fn query_all(&self, start: NodeId, predicate: impl Fn(&NodeData) -> bool) -> Vec<NodeId> {
        self.walk_depth_first(start)
            .into_iter()
            .filter(|&id| self.get(id).is_some_and(&predicate))
            .collect()
    }

    /// Iterate over all `(NodeId, &NodeData)` pairs in the arena.
    ///
    /// Slotmap order: deterministic but not tree order.
    fn iter_nodes(&self) -> impl Iterator<Item = (NodeId, &NodeData)> {
        self.nodes.iter()
    }
}
