//! # basket-mining
//!
//! Frequent itemset mining and association rules over in-memory baskets.
//!
//! Pipeline: transactions → encoder (item universe + encoded baskets) →
//! FP-tree → FP-growth miner (frequent itemsets) → rule generator, with the
//! metric annotator running over the same itemset list.

pub mod encoder;
pub mod engine;
pub mod fptree;
pub mod growth;
pub mod metrics;
pub mod rules;

pub use encoder::{encode, EncodedTransaction, EncodedTransactions, ItemId, ItemUniverse};
pub use engine::{MiningDiagnostics, MiningEngine, MiningOutcome, RuleMode};
pub use fptree::{FpTree, HeaderEntry, HeaderTable, NodeId};
pub use growth::{mine_itemsets, FpGrowth, Itemset, ItemsetRecord};
pub use metrics::{annotate, demo_fallback_rules, AnnotatedItemset};
pub use rules::{generate_rules, RuleDetail, RuleFilter, RuleRecord};
