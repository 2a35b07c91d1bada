//! FP-tree: frequency-ordered prefix tree plus header table.
//!
//! Nodes live in an arena addressed by `NodeId`. Children are owned by
//! index; the parent link is a plain index used only to walk prefix paths.

pub mod header;
pub mod node;
pub mod tree;

pub use header::{HeaderEntry, HeaderTable};
pub use node::{FpNode, NodeId};
pub use tree::{FpTree, WeightedPath};
