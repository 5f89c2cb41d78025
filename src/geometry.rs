//! Core geometry types: Size, Orientation, Region.
//!
//! [`Size`] and [`Orientation`] are the continuous layout-space types the solver
//! works in. [`Region`] is the integer cell rectangle the measurement engine
//! reports back after flexbox layout.

// ---------------------------------------------------------------------------
// Size
// ---------------------------------------------------------------------------

/// A width and height in layout units (pixels, cells, ...).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    /// Create a new size.
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Width divided by height.
    ///
    /// Degenerate sizes give `inf` or `NaN`; callers that care must check.
    #[inline]
    pub fn aspect(self) -> f64 {
        self.width / self.height
    }

    /// Extent along the axis that `orientation` splits.
    #[inline]
    pub fn span(self, orientation: Orientation) -> f64 {
        match orientation {
            Orientation::Horizontal => self.width,
            Orientation::Vertical => self.height,
        }
    }

    /// Copy of this size with the extent along `orientation` replaced.
    #[inline]
    pub fn with_span(self, orientation: Orientation, span: f64) -> Self {
        match orientation {
            Orientation::Horizontal => Self::new(span, self.height),
            Orientation::Vertical => Self::new(self.width, span),
        }
    }
}

// ---------------------------------------------------------------------------
// Orientation
// ---------------------------------------------------------------------------

/// Axis of a split.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Side by side: the split divides the width.
    Horizontal,
    /// Stacked: the split divides the height.
    Vertical,
}

impl Orientation {
    /// Both orientations in the order the solver tries them.
    pub const ALL: [Orientation; 2] = [Orientation::Horizontal, Orientation::Vertical];

    /// The other orientation.
    #[inline]
    pub fn orthogonal(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }
}

// ---------------------------------------------------------------------------
// Region
// ---------------------------------------------------------------------------

/// A rectangular area in integer cells: position + size.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Region {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Region {
    /// Create a new region.
    #[inline]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// Exclusive right edge (`x + width`).
    #[inline]
    pub fn right(self) -> i32 {
        self.x + self.width
    }

    /// Exclusive bottom edge (`y + height`).
    #[inline]
    pub fn bottom(self) -> i32 {
        self.y + self.height
    }

    /// The same region moved by `(dx, dy)`.
    #[inline]
    pub fn translate(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.width, self.height)
    }

    /// Returns `true` if width or height is zero or negative.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.width <= 0 || self.height <= 0
    }
}
