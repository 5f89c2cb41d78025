//! Reconciliation: applying a layout tree to a retained host tree.
//!
//! A split is rendered as a group node (`row` or `col`) holding three
//! children: the first pane, a fixed-size spacer, and the second pane. Panes
//! carry the split's shares as flex proportions; a leaf's content element is
//! placed directly inside its pane.
//!
//! [`reconcile`] edits an existing structure in place, reusing whatever still
//! fits. [`build`] always creates fresh nodes and is meant for first paint.

pub mod build;
pub mod host;
pub mod reconciler;

pub use build::build;
pub use host::HostTree;
pub use reconciler::reconcile;

use crate::geometry::Orientation;

/// Class of a group whose panes sit side by side.
pub const ROW_CLASS: &str = "row";
/// Class of a group whose panes are stacked.
pub const COL_CLASS: &str = "col";
/// Class of a pane holding one side of a split.
pub const PANE_CLASS: &str = "item";
/// Class of the gap between two panes.
pub const SPACER_CLASS: &str = "spacer";

/// The group class for a split orientation.
pub fn group_class(orientation: Orientation) -> &'static str {
    match orientation {
        Orientation::Horizontal => ROW_CLASS,
        Orientation::Vertical => COL_CLASS,
    }
}
