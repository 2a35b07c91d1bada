//! Frequent itemset mining configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_MIN_SUPPORT;

/// Configuration for the itemset miner.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct MiningConfig {
    /// Minimum support as a fraction in (0, 1]. Default: 0.2.
    pub min_support: Option<f64>,
    /// Maximum itemset cardinality. Default: unlimited.
    pub max_len: Option<usize>,
}

impl MiningConfig {
    /// Returns the effective minimum support, defaulting to 0.2.
    pub fn effective_min_support(&self) -> f64 {
        self.min_support.unwrap_or(DEFAULT_MIN_SUPPORT)
    }

    /// Returns the effective maximum itemset length (`None` = unlimited).
    pub fn effective_max_len(&self) -> Option<usize> {
        self.max_len
    }
}
