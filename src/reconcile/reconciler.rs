//! Incremental reconciliation of a host tree against a layout tree.

use tracing::trace;

use crate::dom::NodeId;
use crate::geometry::Size;
use crate::layout::{LayoutNode, Split};

use super::host::HostTree;
use super::{group_class, PANE_CLASS, SPACER_CLASS};

/// Expected classes of a group's children, in order.
const SLOT_CLASSES: [&str; 3] = [PANE_CLASS, SPACER_CLASS, PANE_CLASS];

/// Make the subtree under `node` match `layout`, reusing existing nodes.
///
/// Nothing about the previous layout is needed: reuse is decided from the host
/// tree's current shape. Reconciling the same layout twice leaves the host
/// untouched the second time.
pub fn reconcile<H: HostTree + ?Sized>(host: &mut H, node: NodeId, layout: &LayoutNode) {
    match layout {
        LayoutNode::Empty => {
            for child in host.child_nodes(node) {
                host.destroy(child);
            }
        }
        LayoutNode::Leaf(item) => place_content(host, node, item.node),
        LayoutNode::Split(split) => reconcile_split(host, node, split),
    }
}

/// Leave `content` as the only child of `node`.
fn place_content<H: HostTree + ?Sized>(host: &mut H, node: NodeId, content: NodeId) {
    let children = host.child_nodes(node);
    if children == [content] {
        return;
    }
    for child in children.into_iter().filter(|&c| c != content) {
        trace!(?child, "removing stale leaf child");
        host.destroy(child);
    }
    if host.child_nodes(node) != [content] {
        host.append_child(node, content);
    }
}

fn reconcile_split<H: HostTree + ?Sized>(host: &mut H, node: NodeId, split: &Split) {
    // Everything currently under `node` is a removal candidate until proven otherwise.
    let candidates = host.child_nodes(node);
    let class = group_class(split.orientation);

    let group = match candidates.first() {
        Some(&first) if host.has_class(first, class) => first,
        _ => {
            let group = host.create_node();
            host.add_class(group, class);
            host.append_child(node, group);
            trace!(?group, class, "created group");
            group
        }
    };

    let [first, spacer, second] = ensure_slots(host, group);
    host.set_fixed_size(spacer, Size::new(split.gap, split.gap));

    reconcile(host, first, &split.left);
    reconcile(host, second, &split.right);

    host.set_flex(first, split.share1);
    host.set_flex(second, split.share2);

    // Content may have moved out of a candidate during recursion; only sweep
    // what is still attached here.
    for stale in host.child_nodes(node) {
        if stale != group && candidates.contains(&stale) {
            trace!(?stale, "removing stale child");
            host.destroy(stale);
        }
    }
}

/// Reuse the group's pane / spacer / pane children where their classes match,
/// creating the rest. The first mismatch and everything after it is rebuilt.
fn ensure_slots<H: HostTree + ?Sized>(host: &mut H, group: NodeId) -> [NodeId; 3] {
    let existing = host.child_nodes(group);
    let reusable = existing
        .iter()
        .zip(SLOT_CLASSES)
        .take_while(|&(&child, class)| host.has_class(child, class))
        .count();

    for &stale in &existing[reusable..] {
        trace!(?stale, "removing unusable group child");
        host.destroy(stale);
    }

    std::array::from_fn(|i| {
        if i < reusable {
            return existing[i];
        }
        let slot = host.create_node();
        host.add_class(slot, SLOT_CLASSES[i]);
        host.append_child(group, slot);
        trace!(?slot, class = SLOT_CLASSES[i], "created group child");
        slot
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::content::{AspectRatio, ContentItem};
    use crate::dom::{Dom, NodeData};
    use crate::geometry::Orientation;
    use crate::layout::solve;
    use crate::reconcile::{build, COL_CLASS, ROW_CLASS};
    use crate::testing::dom_to_string;

    /// `app` plus a `contents` list holding `n` panels, like a page before first layout.
    fn fixture(n: usize) -> (Dom, NodeId, Vec<ContentItem>) {
        let mut dom = Dom::new();
        let app = dom.insert(NodeData::new("App").with_id("app"));
        let contents = dom.create(NodeData::new("List").with_id("contents"));
        let items = (0..n)
            .map(|i| {
                let panel = dom.insert_child(contents, NodeData::new("Panel").with_id(format!("p{i}")));
                ContentItem::new(panel)
            })
            .collect();
        (dom, app, items)
    }

    /// Check the host subtree under `node` has exactly the shape of `layout`.
    fn assert_matches(dom: &Dom, node: NodeId, layout: &LayoutNode) {
        match layout {
            LayoutNode::Empty => assert!(dom.children(node).is_empty()),
            LayoutNode::Leaf(item) => assert_eq!(dom.children(node), &[item.node]),
            LayoutNode::Split(split) => {
                let &[group] = dom.children(node) else {
                    panic!("expected a single group under {node:?}");
                };
                assert!(dom.get(group).unwrap().has_class(group_class(split.orientation)));
                let &[first, spacer, second] = dom.children(group) else {
                    panic!("expected pane, spacer, pane under {group:?}");
                };
                assert_eq!(dom.get(first).unwrap().flex, Some(split.share1));
                assert_eq!(dom.get(second).unwrap().flex, Some(split.share2));
                assert_eq!(
                    dom.get(spacer).unwrap().fixed_size,
                    Some(Size::new(split.gap, split.gap))
                );
                assert_matches(dom, first, &split.left);
                assert_matches(dom, second, &split.right);
            }
        }
    }

    fn group_of(dom: &Dom, node: NodeId) -> (NodeId, [NodeId; 3]) {
        let group = dom.children(node)[0];
        let kids = dom.children(group);
        (group, [kids[0], kids[1], kids[2]])
    }

    #[test]
    fn leaf_becomes_sole_child() {
        let (mut dom, app, items) = fixture(1);
        let stray = dom.insert_child(app, NodeData::structural());
        reconcile(&mut dom, app, &LayoutNode::Leaf(items[0]));
        assert_eq!(dom.children(app), &[items[0].node]);
        assert!(!dom.contains(stray));
    }

    #[test]
    fn split_matches_solved_tree() {
        let (mut dom, app, items) = fixture(3);
        let tree = solve(300.0, 100.0, 10.0, &items, None).tree;
        reconcile(&mut dom, app, &tree);
        assert_matches(&dom, app, &tree);
    }

    #[test]
    fn snapshot_of_two_panels() {
        let (mut dom, app, items) = fixture(2);
        let tree = solve(300.0, 100.0, 10.0, &items, None).tree;
        reconcile(&mut dom, app, &tree);
        insta::assert_snapshot!(dom_to_string(&dom, app), @r"
        App#app
          div.row
            div.item flex=145
              Panel#p0
            div.spacer size=10x10
            div.item flex=145
              Panel#p1
        ");
    }

    #[test]
    fn second_reconcile_is_a_no_op() {
        let (mut dom, app, items) = fixture(4);
        let tree = solve(640.0, 480.0, 10.0, &items, None).tree;
        reconcile(&mut dom, app, &tree);
        let before = dom.mutations();
        reconcile(&mut dom, app, &tree);
        assert_eq!(dom.mutations(), before);
    }

    #[test]
    fn same_orientation_keeps_group_and_spacer() {
        let (mut dom, app, items) = fixture(2);
        let t1 = solve(300.0, 100.0, 10.0, &items, None).tree;
        let t2 = solve(500.0, 100.0, 10.0, &items, None).tree;
        reconcile(&mut dom, app, &t1);
        let (group1, slots1) = group_of(&dom, app);

        reconcile(&mut dom, app, &t2);
        let (group2, slots2) = group_of(&dom, app);
        assert_eq!(group1, group2);
        assert_eq!(slots1, slots2);
        assert_eq!(dom.get(slots2[0]).unwrap().flex, Some(245.0));
        assert_matches(&dom, app, &t2);
    }

    #[test]
    fn orientation_change_replaces_group_and_keeps_content() {
        let (mut dom, app, items) = fixture(3);
        let square = AspectRatio::new(1.0, 1.0).unwrap();
        let items: Vec<_> = items.into_iter().map(|i| i.with_aspect(square)).collect();
        let wide = solve(900.0, 100.0, 10.0, &items, None).tree;
        let tall = solve(100.0, 900.0, 10.0, &items, None).tree;
        reconcile(&mut dom, app, &wide);
        let (old_group, _) = group_of(&dom, app);
        assert!(dom.get(old_group).unwrap().has_class(ROW_CLASS));

        reconcile(&mut dom, app, &tall);
        let (new_group, _) = group_of(&dom, app);
        assert_ne!(old_group, new_group);
        assert!(!dom.contains(old_group));
        assert!(dom.get(new_group).unwrap().has_class(COL_CLASS));
        for item in &items {
            assert!(dom.contains(item.node));
        }
        assert_matches(&dom, app, &tall);
    }

    #[test]
    fn leaf_pane_turning_into_split() {
        let (mut dom, app, items) = fixture(2);
        reconcile(&mut dom, app, &LayoutNode::Leaf(items[0]));
        let tree = solve(300.0, 100.0, 10.0, &items, Some(Orientation::Horizontal)).tree;
        reconcile(&mut dom, app, &tree);
        assert_matches(&dom, app, &tree);
    }

    #[test]
    fn mismatched_group_children_are_rebuilt() {
        let (mut dom, app, items) = fixture(2);
        let tree = solve(300.0, 100.0, 10.0, &items, None).tree;
        reconcile(&mut dom, app, &tree);
        let (group, [first, spacer, second]) = group_of(&dom, app);

        // Someone else strips the spacer's class and adds a trailing node.
        dom.get_mut(spacer).unwrap().remove_class(SPACER_CLASS);
        let extra = dom.insert_child(group, NodeData::structural());

        reconcile(&mut dom, app, &tree);
        let (same_group, [first2, spacer2, second2]) = group_of(&dom, app);
        assert_eq!(same_group, group);
        assert_eq!(first2, first);
        assert_ne!(spacer2, spacer);
        assert_ne!(second2, second);
        assert!(!dom.contains(extra));
        assert_matches(&dom, app, &tree);
    }

    #[test]
    fn empty_clears_children() {
        let (mut dom, app, items) = fixture(2);
        let tree = solve(300.0, 100.0, 10.0, &items, None).tree;
        reconcile(&mut dom, app, &tree);
        reconcile(&mut dom, app, &LayoutNode::Empty);
        assert!(dom.children(app).is_empty());
        assert!(dom.contains(items[0].node));
    }

    #[test]
    fn reconcile_after_build_is_a_no_op() {
        let (mut dom, app, items) = fixture(3);
        let square = AspectRatio::new(1.0, 1.0).unwrap();
        let items: Vec<_> = items.into_iter().map(|i| i.with_aspect(square)).collect();
        let tree = solve(320.0, 100.0, 10.0, &items, None).tree;

        build(&mut dom, app, &tree);
        assert_matches(&dom, app, &tree);
        let before = dom.mutations();
        reconcile(&mut dom, app, &tree);
        assert_eq!(dom.mutations(), before);
    }
}
