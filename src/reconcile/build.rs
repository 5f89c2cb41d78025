//! Full rebuild: render a layout tree into fresh nodes.

use crate::dom::NodeId;
use crate::geometry::Size;
use crate::layout::LayoutNode;

use super::host::HostTree;
use super::{group_class, PANE_CLASS, SPACER_CLASS};

/// Replace everything under `node` with a newly built rendering of `layout`.
///
/// Produces the same shape as [`reconcile`](super::reconcile) but never reuses
/// nodes. Content elements found under `node` are detached, not destroyed.
pub fn build<H: HostTree + ?Sized>(host: &mut H, node: NodeId, layout: &LayoutNode) {
    for child in host.child_nodes(node) {
        host.destroy(child);
    }
    append_fresh(host, node, layout);
}

fn append_fresh<H: HostTree + ?Sized>(host: &mut H, parent: NodeId, layout: &LayoutNode) {
    match layout {
        LayoutNode::Empty => {}
        LayoutNode::Leaf(item) => host.append_child(parent, item.node),
        LayoutNode::Split(split) => {
            let group = create_child(host, parent, group_class(split.orientation));
            let first = create_child(host, group, PANE_CLASS);
            let spacer = create_child(host, group, SPACER_CLASS);
            let second = create_child(host, group, PANE_CLASS);
            host.set_fixed_size(spacer, Size::new(split.gap, split.gap));

            append_fresh(host, first, &split.left);
            append_fresh(host, second, &split.right);

            host.set_flex(first, split.share1);
            host.set_flex(second, split.share2);
        }
    }
}

fn create_child<H: HostTree + ?Sized>(host: &mut H, parent: NodeId, class: &str) -> NodeId {
    let node = host.create_node();
    host.add_class(node, class);
    host.append_child(parent, node);
    node
}
