//! Tree operations: create, insert, remove, detach, reparent, walk.

use std::collections::VecDeque;

use slotmap::{SecondaryMap, SlotMap};

use super::node::{NodeData, NodeId};
use crate::geometry::Size;

/// Empty slice constant for returning when a node has no children.
const EMPTY_CHILDREN: &[NodeId] = &[];

/// The central DOM tree, backed by a slotmap arena.
///
/// All nodes live in a single `SlotMap`. Parent/child relationships are stored
/// in secondary maps so that node removal is O(subtree size) and lookup is O(1).
/// Nodes may exist without a parent (detached); they stay in the arena until
/// removed.
///
/// Every structural or style change bumps [`Dom::mutations`]. Setters that
/// would write the current value again do not count.
pub struct Dom {
    pub(crate) nodes: SlotMap<NodeId, NodeData>,
    children: SecondaryMap<NodeId, Vec<NodeId>>,
    parent: SecondaryMap<NodeId, NodeId>,
    root: Option<NodeId>,
    mutations: u64,
}

impl Dom {
    /// Create an empty DOM.
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            children: SecondaryMap::new(),
            parent: SecondaryMap::new(),
            root: None,
            mutations: 0,
        }
    }

    /// Create a detached node. Never changes the root.
    pub fn create(&mut self, data: NodeData) -> NodeId {
        let id = self.nodes.insert(data);
        self.children.insert(id, Vec::new());
        self.mutations += 1;
        id
    }

    /// Insert a root-level node (no parent).
    ///
    /// If no root has been set yet, this node becomes the root.
    pub fn insert(&mut self, data: NodeData) -> NodeId {
        let id = self.create(data);
        if self.root.is_none() {
            self.root = Some(id);
        }
        id
    }

    /// Insert a node as the last child of `parent`.
    ///
    /// # Panics
    ///
    /// Panics (debug) if `parent` does not exist in the tree.
    pub fn insert_child(&mut self, parent: NodeId, data: NodeData) -> NodeId {
        debug_assert!(
            self.nodes.contains_key(parent),
            "parent node does not exist"
        );
        let id = self.create(data);
        self.parent.insert(id, parent);
        if let Some(siblings) = self.children.get_mut(parent) {
            siblings.push(id);
        }
        id
    }

    /// Remove a node and all its descendants recursively.
    ///
    /// Returns the `NodeData` for the removed node, or `None` if it didn't exist.
    pub fn remove(&mut self, id: NodeId) -> Option<NodeData> {
        if !self.nodes.contains_key(id) {
            return None;
        }

        self.unlink(id);

        // Clear root if we're removing it.
        if self.root == Some(id) {
            self.root = None;
        }

        // Collect all descendants (BFS) to remove them.
        let mut to_remove = VecDeque::new();
        to_remove.push_back(id);
        let mut removed_root_data = None;

        while let Some(current) = to_remove.pop_front() {
            if let Some(kids) = self.children.remove(current) {
                to_remove.extend(kids);
            }
            self.parent.remove(current);
            let data = self.nodes.remove(current);
            if current == id {
                removed_root_data = data;
            }
        }

        self.mutations += 1;
        removed_root_data
    }

    /// Remove a transient subtree while keeping application-owned nodes alive.
    ///
    /// Every non-transient node whose parent is transient is detached first, so
    /// content placed inside structural wrappers survives and can be re-parented
    /// later. If `id` itself is not transient it is only detached.
    pub fn discard(&mut self, id: NodeId) {
        let Some(data) = self.nodes.get(id) else {
            return;
        };
        if !data.transient {
            self.detach(id);
            return;
        }

        let survivors: Vec<NodeId> = self
            .walk_depth_first(id)
            .into_iter()
            .filter(|&node| {
                let owned = self.nodes.get(node).is_some_and(|d| !d.transient);
                let under_transient = self
                    .parent(node)
                    .and_then(|p| self.nodes.get(p))
                    .is_some_and(|d| d.transient);
                owned && under_transient
            })
            .collect();
        for node in survivors {
            self.detach(node);
        }
        self.remove(id);
    }

    /// Detach `node` from its parent, keeping it (and its subtree) in the arena.
    ///
    /// No-op if the node has no parent.
    pub fn detach(&mut self, node: NodeId) {
        if self.unlink(node) {
            self.mutations += 1;
        }
    }

    /// Move `node` to become the last child of `new_parent`.
    ///
    /// The node keeps its subtree intact. If `node` was previously a child of
    /// another parent, it is detached first.
    ///
    /// # Panics
    ///
    /// Panics (debug) if either `node` or `new_parent` does not exist.
    pub fn reparent(&mut self, node: NodeId, new_parent: NodeId) {
        debug_assert!(self.nodes.contains_key(node), "node does not exist");
        debug_assert!(
            self.nodes.contains_key(new_parent),
            "new_parent does not exist"
        );

        self.unlink(node);
        self.parent.insert(node, new_parent);
        if let Some(siblings) = self.children.get_mut(new_parent) {
            siblings.push(node);
        }
        self.mutations += 1;
    }

    /// Add a CSS class to `node`, counting a mutation only if it was absent.
    pub fn add_class(&mut self, node: NodeId, class: &str) {
        if let Some(data) = self.nodes.get_mut(node) {
            if data.add_class(class) {
                self.mutations += 1;
            }
        }
    }

    /// Set the flex proportion of `node`.
    pub fn set_flex(&mut self, node: NodeId, flex: f64) {
        if let Some(data) = self.nodes.get_mut(node) {
            if data.flex != Some(flex) {
                data.flex = Some(flex);
                self.mutations += 1;
            }
        }
    }

    /// Set the fixed size of `node`.
    pub fn set_fixed_size(&mut self, node: NodeId, size: Size) {
        if let Some(data) = self.nodes.get_mut(node) {
            if data.fixed_size != Some(size) {
                data.fixed_size = Some(size);
                self.mutations += 1;
            }
        }
    }

    /// Get the parent of a node, if it has one.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.parent.get(id).copied()
    }

    /// Get the children of a node. Returns an empty slice if the node has no children
    /// or does not exist.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.children
            .get(id)
            .map(Vec::as_slice)
            .unwrap_or(EMPTY_CHILDREN)
    }

    /// Walk from `id` up to the root, collecting ancestor node ids.
    ///
    /// The returned vec does **not** include `id` itself; it starts with the
    /// immediate parent and ends at the topmost ancestor.
    pub fn ancestors(&self, id: NodeId) -> Vec<NodeId> {
        let mut result = Vec::new();
        let mut current = id;
        while let Some(p) = self.parent.get(current).copied() {
            result.push(p);
            current = p;
        }
        result
    }

    /// Immutable access to a node's data.
    pub fn get(&self, id: NodeId) -> Option<&NodeData> {
        self.nodes.get(id)
    }

    /// Mutable access to a node's data.
    ///
    /// Changes made through this reference are not counted in [`Dom::mutations`].
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut NodeData> {
        self.nodes.get_mut(id)
    }

    /// The current root node, if set.
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Number of nodes in the arena, attached or not.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the DOM is empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether the DOM contains a node with the given id.
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Total number of counted mutations since the DOM was created.
    pub fn mutations(&self) -> u64 {
        self.mutations
    }

    /// Pre-order depth-first traversal starting from `start`.
    pub fn walk_depth_first(&self, start: NodeId) -> Vec<NodeId> {
        let mut result = Vec::new();
        let mut stack = vec![start];
        while let Some(current) = stack.pop() {
            if !self.nodes.contains_key(current) {
                continue;
            }
            result.push(current);
            // Push children in reverse so the first child is visited first.
            for &child in self.children(current).iter().rev() {
                stack.push(child);
            }
        }
        result
    }

    /// Drop the parent link of `node`. Returns whether it had a parent.
    fn unlink(&mut self, node: NodeId) -> bool {
        match self.parent.remove(node) {
            Some(old_parent) => {
                if let Some(siblings) = self.children.get_mut(old_parent) {
                    siblings.retain(|&child| child != node);
                }
                true
            }
            None => false,
        }
    }
}

impl Default for Dom {
    fn default() -> Self {
        Self::new()
    }
}
