//! String interning for item labels.
//!
//! Uses `lasso::Rodeo` while a universe is being built and
//! `lasso::RodeoReader` for contention-free lookups afterwards.

use lasso::{Rodeo, RodeoReader, Spur};

/// Interner for item labels.
///
/// Labels are interned verbatim: trimming and normalization belong to the
/// loader that produced them.
#[derive(Debug, Default)]
pub struct ItemInterner {
    inner: Rodeo,
}

impl ItemInterner {
    pub fn new() -> Self {
        Self {
            inner: Rodeo::default(),
        }
    }

    /// Intern a label, returning its key.
    pub fn intern(&mut self, label: &str) -> Spur {
        self.inner.get_or_intern(label)
    }

    /// Look up a previously interned label without inserting.
    pub fn get(&self, label: &str) -> Option<Spur> {
        self.inner.get(label)
    }

    /// Resolve a key back to its label.
    pub fn resolve(&self, key: &Spur) -> &str {
        self.inner.resolve(key)
    }

    /// Number of distinct labels interned so far.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Freeze the interner into a read-only `RodeoReader`.
    pub fn into_reader(self) -> RodeoReader {
        self.inner.into_reader()
    }
}
