//! TaffyTree wrapper for measuring a reconciled DOM.
//!
//! [`LayoutEngine`] mirrors a DOM subtree into a taffy layout tree, runs flexbox
//! layout, and reports results as absolute [`Region`]s. The driver uses it to
//! measure the container before solving, and tests use it to check that the
//! flex proportions written by the reconciler produce the solver's rectangles.

use std::collections::{HashMap, HashSet};

use taffy::prelude::*;

use crate::dom::node::NodeId;
use crate::dom::tree::Dom;
use crate::geometry::{Region, Size as Extent};

use super::resolve::{resolve_node_style, resolve_root_style};

/// Wraps a [`TaffyTree`] and maintains a mapping from DOM [`NodeId`]s to
/// taffy node ids.
pub struct LayoutEngine {
    /// The taffy tree, parameterized with our DOM NodeId as context data.
    tree: TaffyTree<NodeId>,
    /// Maps DOM NodeId -> taffy NodeId for quick lookup.
    node_map: HashMap<NodeId, taffy::prelude::NodeId>,
    /// The synced DOM root and its taffy node.
    root: Option<(NodeId, taffy::prelude::NodeId)>,
}

impl LayoutEngine {
    /// Create a new, empty layout engine.
    pub fn new() -> Self {
        Self {
            tree: TaffyTree::new(),
            node_map: HashMap::new(),
            root: None,
        }
    }

    /// Synchronize the taffy tree with the DOM subtree under `root`.
    ///
    /// Creates or restyles a taffy node per live DOM node, drops taffy nodes
    /// whose DOM node left the subtree, and mirrors the child lists. `root` is
    /// sized to `viewport`.
    pub fn sync(&mut self, dom: &Dom, root: NodeId, viewport: Extent) {
        if !dom.contains(root) {
            self.clear();
            return;
        }

        let live_nodes = dom.walk_depth_first(root);
        let live_set: HashSet<NodeId> = live_nodes.iter().copied().collect();

        let stale_keys: Vec<NodeId> = self
            .node_map
            .keys()
            .filter(|k| !live_set.contains(k))
            .copied()
            .collect();
        for key in stale_keys {
            if let Some(taffy_id) = self.node_map.remove(&key) {
                let _ = self.tree.remove(taffy_id);
            }
        }

        for &dom_id in &live_nodes {
            let Some(data) = dom.get(dom_id) else {
                continue;
            };
            let style = if dom_id == root {
                resolve_root_style(data, viewport)
            } else {
                resolve_node_style(data)
            };

            if let Some(&taffy_id) = self.node_map.get(&dom_id) {
                let _ = self.tree.set_style(taffy_id, style);
            } else if let Ok(taffy_id) = self.tree.new_leaf_with_context(style, dom_id) {
                self.node_map.insert(dom_id, taffy_id);
            }
        }

        for &dom_id in &live_nodes {
            let taffy_children: Vec<taffy::prelude::NodeId> = dom
                .children(dom_id)
                .iter()
                .filter_map(|child_id| self.node_map.get(child_id).copied())
                .collect();
            if let Some(&taffy_id) = self.node_map.get(&dom_id) {
                let _ = self.tree.set_children(taffy_id, &taffy_children);
            }
        }

        self.root = self.node_map.get(&root).map(|&taffy_id| (root, taffy_id));
    }

    /// Run taffy layout computation on the synced root.
    pub fn compute(&mut self, viewport: Extent) {
        if let Some((_, root)) = self.root {
            let _ = self.tree.compute_layout(
                root,
                taffy::geometry::Size {
                    width: AvailableSpace::Definite(viewport.width as f32),
                    height: AvailableSpace::Definite(viewport.height as f32),
                },
            );
        }
    }

    /// Computed size of a node.
    ///
    /// This is the container measurement handed to the solver.
    pub fn measure(&self, node: NodeId) -> Option<Extent> {
        let taffy_id = self.node_map.get(&node)?;
        let layout = self.tree.layout(*taffy_id).ok()?;
        Some(Extent::new(
            f64::from(layout.size.width),
            f64::from(layout.size.height),
        ))
    }

    /// Absolute region of a node relative to the synced root.
    ///
    /// Returns `None` if the node is not in the layout tree.
    pub fn region(&self, dom: &Dom, node: NodeId) -> Option<Region> {
        let (root, _) = self.root?;
        let layout = self.tree.layout(*self.node_map.get(&node)?).ok()?;

        let (mut x, mut y) = (layout.location.x, layout.location.y);
        if node != root {
            for ancestor in dom.ancestors(node) {
                let ancestor_layout = self.tree.layout(*self.node_map.get(&ancestor)?).ok()?;
                x += ancestor_layout.location.x;
                y += ancestor_layout.location.y;
                if ancestor == root {
                    break;
                }
            }
        }

        Some(Region::new(
            x.round() as i32,
            y.round() as i32,
            layout.size.width.round() as i32,
            layout.size.height.round() as i32,
        ))
    }

    /// Absolute regions for every synced node.
    pub fn regions(&self, dom: &Dom) -> HashMap<NodeId, Region> {
        self.node_map
            .keys()
            .filter_map(|&id| Some((id, self.region(dom, id)?)))
            .collect()
    }

    /// Clear all state, removing all taffy nodes and mappings.
    fn clear(&mut self) {
        let keys: Vec<_> = self.node_map.drain().map(|(_, v)| v).collect();
        for taffy_id in keys {
            let _ = self.tree.remove(taffy_id);
        }
        self.root = None;
    }
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self::new()
    }
}
