//! Cooperative cancellation for mining runs.
//!
//! FP-growth checks the token once per top-level header item, between two
//! complete conditional-tree expansions. A run cancelled there returns
//! `MiningError::Cancelled` and discards partial itemsets.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Stop signal a mining run can poll.
pub trait Cancellable {
    /// Whether the run should stop at its next top-level item.
    fn is_cancelled(&self) -> bool;

    /// Ask every run polling this signal to stop.
    fn cancel(&self);
}

/// Shared stop flag handed to `MiningEngine::with_cancellation`.
///
/// Clones share the flag: a caller enforcing a wall-clock budget keeps one
/// clone and cancels while the engine mines on another thread. The flag is
/// never reset, so a cancelled token fails every later run it is attached to.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    stop: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Cancellable for CancellationToken {
    fn is_cancelled(&self) -> bool {
        self.stop.load(Ordering::Acquire)
    }

    fn cancel(&self) {
        self.stop.store(true, Ordering::Release);
    }
}
