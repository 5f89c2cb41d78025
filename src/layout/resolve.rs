//! DOM node -> taffy Style conversion.
//!
//! Maps the structural classes and sizing fields of a [`NodeData`] to taffy's
//! flexbox [`taffy::Style`]:
//!
//! - `row` -> `FlexDirection::Row`, `col` -> `FlexDirection::Column`
//! - `flex: N` -> grow `N`, shrink 1, basis 0, no minimum size
//! - fixed size -> that size, no shrinking
//! - anything else fills its parent (100% x 100%)

use taffy::prelude::*;

use crate::dom::node::NodeData;
use crate::geometry::Size as Extent;
use crate::reconcile::{COL_CLASS, ROW_CLASS};

/// Style for a node inside the synced subtree.
pub fn resolve_node_style(data: &NodeData) -> taffy::Style {
    let mut style = taffy::Style {
        display: Display::Flex,
        flex_direction: if data.has_class(COL_CLASS) {
            FlexDirection::Column
        } else {
            FlexDirection::Row
        },
        ..taffy::Style::default()
    };
    debug_assert!(
        !(data.has_class(ROW_CLASS) && data.has_class(COL_CLASS)),
        "node is both a row and a column"
    );

    if let Some(flex) = data.flex {
        style.flex_grow = flex as f32;
        style.flex_shrink = 1.0;
        style.flex_basis = Dimension::from_length(0.0);
        style.min_size = taffy::geometry::Size {
            width: Dimension::from_length(0.0),
            height: Dimension::from_length(0.0),
        };
    } else if let Some(size) = data.fixed_size {
        style.flex_shrink = 0.0;
        style.size = taffy::geometry::Size {
            width: Dimension::from_length(size.width as f32),
            height: Dimension::from_length(size.height as f32),
        };
    } else {
        style.size = taffy::geometry::Size {
            width: Dimension::from_percent(1.0),
            height: Dimension::from_percent(1.0),
        };
    }

    style
}

/// Style for the synced root: its own node style, sized to the viewport.
pub fn resolve_root_style(data: &NodeData, viewport: Extent) -> taffy::Style {
    let mut style = resolve_node_style(data);
    style.size = taffy::geometry::Size {
        width: Dimension::from_length(viewport.width as f32),
        height: Dimension::from_length(viewport.height as f32),
    };
    style
}
