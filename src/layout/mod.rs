//! Layout: the split-tree solver and the taffy-backed measurement engine.

pub mod engine;
pub mod node;
pub mod resolve;
pub mod solve;

pub use engine::LayoutEngine;
pub use node::{LayoutNode, Split};
pub use solve::{solve, solve_memoized, Solution};
