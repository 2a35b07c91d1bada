//! Re-exports of performance-oriented collection types.

pub use rustc_hash::FxHashMap;
pub use smallvec::SmallVec;

/// SmallVec optimized for tree node children (usually <4).
pub type SmallVec4<T> = SmallVec<[T; 4]>;

/// SmallVec optimized for basket-sized item lists (usually <8).
pub type SmallVec8<T> = SmallVec<[T; 8]>;
