//! Data structures and label interning.

pub mod collections;
pub mod interning;

pub use collections::FxHashMap;
pub use interning::ItemInterner;
