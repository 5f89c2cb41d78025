//! # tessellate
//!
//! Optimal recursive split layouts for a fixed, ordered set of panels, applied
//! to a retained DOM with minimal churn.
//!
//! Given a container size, a gap, and panels with optional weights and
//! preferred aspect ratios, tessellate searches every binary split tree that
//! keeps the panels in order and picks the one whose rectangles best match the
//! preferred aspects. The result is then reconciled into a DOM of flex
//! containers, reusing existing nodes wherever the new tree still fits.
//!
//! ## Core Systems
//!
//! - **[`layout`]**: Split-tree solver, layout tree, taffy-powered measurement
//! - **[`reconcile`]**: Incremental reconciler and full rebuild over a [`reconcile::HostTree`]
//! - **[`dom`]**: Slotmap-backed DOM arena with tree operations and queries
//! - **[`content`]**: Content items and their weight / aspect hints
//! - **[`tiler`]**: Driver tying measurement, solving and reconciliation together
//! - **[`testing`]**: Snapshot helpers
//! - **[`geometry`]**: Size, Orientation, Region primitives

// Foundation
pub mod geometry;

// Core systems
pub mod content;
pub mod dom;
pub mod layout;
pub mod reconcile;

// Driver
pub mod tiler;

// Test support
pub mod testing;

pub use content::{AspectRatio, ContentError, ContentItem};
pub use geometry::{Orientation, Region, Size};
pub use layout::{solve, solve_memoized, LayoutNode, Solution};
pub use reconcile::{build, reconcile, HostTree};
pub use tiler::{Tiler, TilerConfig, TilerError};
