//! Shared constants for the basket pattern miner.

/// Crate version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default minimum support as a fraction of all transactions.
pub const DEFAULT_MIN_SUPPORT: f64 = 0.2;

/// Default minimum threshold for the rule filter metric (confidence).
pub const DEFAULT_MIN_CONFIDENCE: f64 = 0.4;

// ---- Demo fallback ----

/// Maximum number of placeholder rules emitted by the demo fallback.
pub const DEMO_FALLBACK_LIMIT: usize = 3;

/// Literal antecedent label of every placeholder rule.
pub const DEMO_ANTECEDENT_LABEL: &str = "Single item";

/// Literal consequent label of every placeholder rule.
pub const DEMO_CONSEQUENT_LABEL: &str = "Buy together";

// ---- Limits ----

/// Largest itemset cardinality for which rule splits are enumerated.
/// Splits are enumerated as bitmasks over a `u64`.
pub const MAX_RULE_ITEMSET_LEN: usize = 63;

/// Human-readable banner with the crate version.
pub fn banner() -> String {
    format!("basket {} (fp-growth association rule miner)", VERSION)
}
