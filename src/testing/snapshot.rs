//! Snapshot rendering helpers.
//!
//! Converts a DOM subtree into an indented plain-text outline suitable for
//! snapshot testing and assertions.

use std::fmt::Write;

use crate::dom::node::{NodeData, NodeId};
use crate::dom::tree::Dom;

/// Render the subtree under `node` as an indented outline.
///
/// One line per node, two spaces of indentation per level:
/// `type#id.class1.class2 flex=N size=WxH`. Lines are separated by `'\n'`
/// with no trailing newline.
///
/// # Examples
///
/// ```ignore
/// App#app
///   div.row
///     div.item flex=145
///       Panel#p0
///     div.spacer size=10x10
///     div.item flex=145
///       Panel#p1
/// ```
pub fn dom_to_string(dom: &Dom, node: NodeId) -> String {
    let mut lines = Vec::new();
    outline(dom, node, 0, &mut lines);
    lines.join("\n")
}

fn outline(dom: &Dom, node: NodeId, depth: usize, lines: &mut Vec<String>) {
    let Some(data) = dom.get(node) else {
        return;
    };
    lines.push(format!("{}{}", "  ".repeat(depth), describe(data)));
    for &child in dom.children(node) {
        outline(dom, child, depth + 1, lines);
    }
}

/// One-line description of a node.
pub fn describe(data: &NodeData) -> String {
    let mut line = data.widget_type.clone();
    if let Some(id) = &data.id {
        let _ = write!(line, "#{id}");
    }
    for class in &data.classes {
        let _ = write!(line, ".{class}");
    }
    if let Some(flex) = data.flex {
        let _ = write!(line, " flex={flex}");
    }
    if let Some(size) = data.fixed_size {
        let _ = write!(line, " size={}x{}", size.width, size.height);
    }
    line
}
