//! The host-tree capability the reconciler writes through.

use crate::dom::{Dom, NodeData, NodeId};
use crate::geometry::Size;

/// Operations the reconciler needs from a retained UI tree.
///
/// Content elements are referenced by [`NodeId`]; the host owns them. Nodes the
/// reconciler creates are structural and may be destroyed freely.
pub trait HostTree {
    /// Create a detached structural node.
    fn create_node(&mut self) -> NodeId;

    /// Destroy a node and its structural descendants.
    ///
    /// Content elements inside it must survive, detached, so they can be
    /// appended elsewhere later.
    fn destroy(&mut self, node: NodeId);

    /// Append `child` as the last child of `parent`, moving it if attached elsewhere.
    fn append_child(&mut self, parent: NodeId, child: NodeId);

    /// Current children of `node`, in order.
    fn child_nodes(&self, node: NodeId) -> Vec<NodeId>;

    /// Whether `node` carries the structural class `class`.
    fn has_class(&self, node: NodeId, class: &str) -> bool;

    /// Tag `node` with `class`.
    fn add_class(&mut self, node: NodeId, class: &str);

    /// Set the flex proportion of `node`.
    fn set_flex(&mut self, node: NodeId, flex: f64);

    /// Set a fixed width and height on `node`.
    fn set_fixed_size(&mut self, node: NodeId, size: Size);
}

impl HostTree for Dom {
    fn create_node(&mut self) -> NodeId {
        self.create(NodeData::structural())
    }

    fn destroy(&mut self, node: NodeId) {
        self.discard(node);
    }

    fn append_child(&mut self, parent: NodeId, child: NodeId) {
        self.reparent(child, parent);
    }

    fn child_nodes(&self, node: NodeId) -> Vec<NodeId> {
        self.children(node).to_vec()
    }

    fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.get(node).is_some_and(|data| data.has_class(class))
    }

    fn add_class(&mut self, node: NodeId, class: &str) {
        Dom::add_class(self, node, class);
    }

    fn set_flex(&mut self, node: NodeId, flex: f64) {
        Dom::set_flex(self, node, flex);
    }

    fn set_fixed_size(&mut self, node: NodeId, size: Size) {
        Dom::set_fixed_size(self, node, size);
    }
}
