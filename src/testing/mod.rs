//! Headless testing helpers: DOM outlines for snapshot-style assertions.
//!
//! Use [`dom_to_string`] to capture a reconciled subtree as plain text and
//! compare it with `insta` inline snapshots.

pub mod snapshot;

pub use snapshot::dom_to_string;
