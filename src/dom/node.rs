//! Node types: NodeId, NodeData.

use slotmap::new_key_type;

use crate::geometry::Size;

new_key_type! {
    /// Unique identifier for a DOM node. Copy, lightweight (u64).
    pub struct NodeId;
}

/// Data associated with a single DOM node.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeData {
    /// Element type name (e.g. "div", "Panel").
    pub widget_type: String,
    /// Optional unique id (CSS #id selector).
    pub id: Option<String>,
    /// CSS classes. Structural classes (`row`, `col`, `item`, `spacer`) live here too.
    pub classes: Vec<String>,
    /// `data-*` style attributes, in insertion order.
    pub attributes: Vec<(String, String)>,
    /// Flex proportion (`flex: N`), if set.
    pub flex: Option<f64>,
    /// Fixed width and height, if set.
    pub fixed_size: Option<Size>,
    /// Structural node owned by the tree itself rather than by the application.
    ///
    /// Removing a transient subtree detaches the non-transient nodes inside it.
    pub transient: bool,
}

impl NodeData {
    /// Create a new `NodeData` with the given element type and sensible defaults.
    pub fn new(widget_type: impl Into<String>) -> Self {
        Self {
            widget_type: widget_type.into(),
            id: None,
            classes: Vec::new(),
            attributes: Vec::new(),
            flex: None,
            fixed_size: None,
            transient: false,
        }
    }

    /// A plain structural `div`, marked transient.
    pub fn structural() -> Self {
        Self {
            transient: true,
            ..Self::new("div")
        }
    }

    /// Set the CSS id (builder).
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Add a single CSS class (builder).
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        if !self.classes.contains(&class) {
            self.classes.push(class);
        }
        self
    }

    /// Set an attribute (builder). Replaces an existing value with the same name.
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Check whether this node has a given CSS class.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Add a CSS class. Returns `false` if it was already present.
    pub fn add_class(&mut self, class: &str) -> bool {
        if self.has_class(class) {
            return false;
        }
        self.classes.push(class.to_owned());
        true
    }

    /// Remove a CSS class. No-op if not present.
    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    /// Look up an attribute value by name.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Set an attribute, replacing any existing value.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(key, _)| *key == name) {
            Some(slot) => slot.1 = value,
            None => self.attributes.push((name, value)),
        }
    }
}
