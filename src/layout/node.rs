//! Layout tree: the solver's output.

use crate::content::ContentItem;
use crate::geometry::Orientation;

/// A recursive partition of a rectangle among content items.
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutNode {
    /// No items to place.
    Empty,
    /// A single item filling its rectangle.
    Leaf(ContentItem),
    /// A binary split into two gap-separated halves.
    Split(Box<Split>),
}

/// Two panes separated by a gap along one axis.
///
/// The parent's span along `orientation` is `share1 + gap + share2`.
#[derive(Debug, Clone, PartialEq)]
pub struct Split {
    pub orientation: Orientation,
    pub gap: f64,
    /// Span given to `left` (flex proportion of the first pane).
    pub share1: f64,
    /// Span given to `right` (flex proportion of the second pane).
    pub share2: f64,
    pub left: LayoutNode,
    pub right: LayoutNode,
}

impl LayoutNode {
    /// Build a split node.
    pub fn split(
        orientation: Orientation,
        gap: f64,
        (share1, share2): (f64, f64),
        left: LayoutNode,
        right: LayoutNode,
    ) -> Self {
        LayoutNode::Split(Box::new(Split {
            orientation,
            gap,
            share1,
            share2,
            left,
            right,
        }))
    }

    /// Leaves in order (left to right, top to bottom).
    pub fn leaves(&self) -> Vec<&ContentItem> {
        let mut out = Vec::new();
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves<'a>(&'a self, out: &mut Vec<&'a ContentItem>) {
        match self {
            LayoutNode::Empty => {}
            LayoutNode::Leaf(item) => out.push(item),
            LayoutNode::Split(split) => {
                split.left.collect_leaves(out);
                split.right.collect_leaves(out);
            }
        }
    }

    /// Number of split nodes in the tree.
    pub fn split_count(&self) -> usize {
        match self {
            LayoutNode::Split(split) => 1 + split.left.split_count() + split.right.split_count(),
            _ => 0,
        }
    }

    /// Whether this is the empty layout.
    pub fn is_empty(&self) -> bool {
        matches!(self, LayoutNode::Empty)
    }
}

impl Split {
    /// Total span along the split axis.
    pub fn span(&self) -> f64 {
        self.share1 + self.gap + self.share2
    }
}
