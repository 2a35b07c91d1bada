//! Engine result types.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::growth::ItemsetRecord;
use crate::metrics::AnnotatedItemset;
use crate::rules::RuleRecord;

/// How the rule list of an outcome was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleMode {
    /// Rules were mined and filtered. May be empty.
    Discovered,
    /// No rule survived; the list holds labelled placeholders.
    DemoFallback,
}

impl RuleMode {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Discovered => "discovered",
            Self::DemoFallback => "demo_fallback",
        }
    }
}

impl fmt::Display for RuleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Counters describing one run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MiningDiagnostics {
    pub transaction_count: u64,
    pub universe_size: usize,
    /// Absolute count threshold derived from `min_support`.
    pub min_count: u64,
    /// Single items at or above `min_count`.
    pub frequent_item_count: usize,
    /// Nodes of the top-level FP-tree, root excluded.
    pub tree_node_count: usize,
    pub itemset_count: usize,
    pub rule_count: usize,
    /// Set when no item reached `min_count`.
    pub empty_tree: bool,
    pub elapsed_ms: u64,
}

/// Everything one mining run produces.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MiningOutcome {
    pub itemsets: Vec<AnnotatedItemset>,
    pub rules: Vec<RuleRecord>,
    pub rule_mode: RuleMode,
    pub diagnostics: MiningDiagnostics,
}

impl MiningOutcome {
    pub(crate) fn empty(diagnostics: MiningDiagnostics) -> Self {
        Self {
            itemsets: Vec::new(),
            rules: Vec::new(),
            rule_mode: RuleMode::Discovered,
            diagnostics,
        }
    }

    /// The plain itemset records, without relative metrics.
    pub fn itemset_records(&self) -> impl Iterator<Item = &ItemsetRecord> {
        self.itemsets.iter().map(|a| &a.record)
    }

    pub fn is_demo_fallback(&self) -> bool {
        self.rule_mode == RuleMode::DemoFallback
    }
}
