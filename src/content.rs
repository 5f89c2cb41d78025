//! Content items: the ordered panels being tiled, with weight and aspect hints.
//!
//! Items are read from DOM attributes once, when the driver is set up.
//! [`ContentItem`] stores already-parsed values, so the solver never sees a
//! malformed hint.

use std::fmt;
use std::str::FromStr;

use crate::dom::{Dom, NodeId};

/// Attribute holding an item's relative weight (`"2"`, `"0.5"`).
pub const WEIGHT_ATTR: &str = "data-weight";
/// Attribute holding an item's preferred aspect ratio (`"16:9"`).
pub const ASPECT_ATTR: &str = "data-aspect";

/// Errors from reading item hints.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ContentError {
    #[error("invalid aspect ratio {value:?}: {message}")]
    InvalidAspect { value: String, message: String },
    #[error("invalid weight {value:?}: expected a positive number")]
    InvalidWeight { value: String },
    #[error("content node does not exist")]
    MissingNode,
}

// ---------------------------------------------------------------------------
// AspectRatio
// ---------------------------------------------------------------------------

/// A `width:height` ratio with both sides finite and positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AspectRatio {
    width: f64,
    height: f64,
}

impl AspectRatio {
    /// Create a ratio, rejecting zero, negative and non-finite sides.
    pub fn new(width: f64, height: f64) -> Result<Self, ContentError> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(width) || !valid(height) {
            return Err(ContentError::InvalidAspect {
                value: format!("{width}:{height}"),
                message: "both sides must be positive".into(),
            });
        }
        Ok(Self { width, height })
    }

    /// The ratio as a single number (`width / height`).
    pub fn value(self) -> f64 {
        self.width / self.height
    }
}

impl FromStr for AspectRatio {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |message: &str| ContentError::InvalidAspect {
            value: s.to_owned(),
            message: message.to_owned(),
        };
        let (w, h) = s.split_once(':').ok_or_else(|| invalid("expected <width>:<height>"))?;
        let w: f64 = w.trim().parse().map_err(|_| invalid("width is not a number"))?;
        let h: f64 = h.trim().parse().map_err(|_| invalid("height is not a number"))?;
        Self::new(w, h).map_err(|_| invalid("both sides must be positive"))
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.width, self.height)
    }
}

/// Parse a weight hint.
pub fn parse_weight(s: &str) -> Result<f64, ContentError> {
    match s.trim().parse::<f64>() {
        Ok(w) if w.is_finite() && w > 0.0 => Ok(w),
        _ => Err(ContentError::InvalidWeight { value: s.to_owned() }),
    }
}

// ---------------------------------------------------------------------------
// ContentItem
// ---------------------------------------------------------------------------

/// One panel to be placed by the solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContentItem {
    /// The host element this item places.
    pub node: NodeId,
    /// Relative weight; `None` means 1.
    pub weight: Option<f64>,
    /// Preferred aspect ratio; `None` means whatever rectangle it gets is ideal.
    pub target_aspect: Option<AspectRatio>,
}

impl ContentItem {
    /// An item with no hints.
    pub fn new(node: NodeId) -> Self {
        Self {
            node,
            weight: None,
            target_aspect: None,
        }
    }

    /// Set the weight (builder).
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }

    /// Set the target aspect ratio (builder).
    pub fn with_aspect(mut self, aspect: AspectRatio) -> Self {
        self.target_aspect = Some(aspect);
        self
    }

    /// Read an item from a DOM node's `data-weight` / `data-aspect` attributes.
    pub fn from_node(dom: &Dom, node: NodeId) -> Result<Self, ContentError> {
        let data = dom.get(node).ok_or(ContentError::MissingNode)?;
        let weight = data.attr(WEIGHT_ATTR).map(parse_weight).transpose()?;
        let target_aspect = data
            .attr(ASPECT_ATTR)
            .map(AspectRatio::from_str)
            .transpose()?;
        Ok(Self {
            node,
            weight,
            target_aspect,
        })
    }

    /// Weight used by the solver (default 1).
    #[inline]
    pub fn effective_weight(&self) -> f64 {
        self.weight.unwrap_or(1.0)
    }
}

/// Read every child of `container` as a content item, in child order.
pub fn collect_items(dom: &Dom, container: NodeId) -> Result<Vec<ContentItem>, ContentError> {
    dom.children(container)
        .iter()
        .map(|&child| ContentItem::from_node(dom, child))
        .collect()
}
