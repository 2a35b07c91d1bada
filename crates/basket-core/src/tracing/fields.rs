//! Structured span field names.
//!
//! Every mining span and summary event uses these names so log queries can
//! rely on them.

/// Number of input transactions.
pub const TRANSACTION_COUNT: &str = "transaction_count";

/// Number of distinct items in the universe.
pub const UNIVERSE_SIZE: &str = "universe_size";

/// Nodes in the top-level FP-tree, root excluded.
pub const TREE_NODE_COUNT: &str = "tree_node_count";

/// Frequent itemsets emitted by the miner.
pub const ITEMSET_COUNT: &str = "itemset_count";

/// Rules surviving the filter.
pub const RULE_COUNT: &str = "rule_count";

/// Wall-clock duration of one mining run in milliseconds.
pub const MINE_TIME_MS: &str = "mine_time_ms";
