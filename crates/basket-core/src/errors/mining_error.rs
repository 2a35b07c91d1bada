//! Mining errors.

use super::error_code::{self, BasketErrorCode};
use super::ConfigError;

/// Errors that can occur while encoding, building, mining, or deriving rules.
#[derive(Debug, thiserror::Error)]
pub enum MiningError {
    /// Empty or ill-formed transactions, or an out-of-range threshold.
    #[error("Invalid input: {reason}")]
    InvalidInput { reason: String },

    /// No item reaches the minimum support count. Callers treat this as
    /// "zero frequent itemsets", not as a failure.
    #[error("No item reaches the minimum support count of {min_count}")]
    EmptyTree { min_count: u64 },

    /// A support lookup guaranteed by anti-monotonicity was missing or zero.
    #[error("Metric undefined for itemset {itemset}")]
    MetricUndefined { itemset: String },

    #[error("Mining cancelled")]
    Cancelled,

    #[error("Configuration error: {0}")]
    InvalidConfig(#[from] ConfigError),
}

impl MiningError {
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Whether the caller can continue with an empty result.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::EmptyTree { .. })
    }
}

impl BasketErrorCode for MiningError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidInput { .. } => error_code::INVALID_INPUT,
            Self::EmptyTree { .. } => error_code::EMPTY_TREE,
            Self::MetricUndefined { .. } => error_code::METRIC_UNDEFINED,
            Self::Cancelled => error_code::CANCELLED,
            Self::InvalidConfig(e) => e.error_code(),
        }
    }
}
