//! MiningEngine: runs one complete mining pass over in-memory baskets.

use std::path::Path;
use std::time::Instant;

use basket_core::config::{BasketConfig, ConfigOverrides, FallbackMode};
use basket_core::errors::MiningError;
use basket_core::traits::{Cancellable, CancellationToken};
use basket_core::tracing::fields;
use tracing::{debug, info, info_span, warn};

use super::types::{MiningDiagnostics, MiningOutcome, RuleMode};
use crate::encoder::encode;
use crate::fptree::FpTree;
use crate::growth::{self, min_count_for, validate_min_support, FpGrowth};
use crate::metrics::{annotate, demo_fallback_rules};
use crate::rules::{generate_rules, RuleFilter};

/// The mining engine.
///
/// Holds configuration only; every `run` owns its own trees, so one engine
/// can serve many runs.
pub struct MiningEngine {
    config: BasketConfig,
    cancellation: Option<CancellationToken>,
}

impl MiningEngine {
    pub fn new(config: BasketConfig) -> Self {
        Self {
            config,
            cancellation: None,
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(BasketConfig::default())
    }

    /// Engine with explicit `min_support` and `min_confidence`, other
    /// settings at their defaults.
    pub fn with_thresholds(min_support: f64, min_confidence: f64) -> Self {
        Self::new(BasketConfig::with_thresholds(min_support, min_confidence))
    }

    /// Engine configured from `basket.toml` under `root`, the user config,
    /// `BASKET_*` variables, and `overrides`.
    pub fn from_project(root: &Path, overrides: Option<&ConfigOverrides>) -> Result<Self, MiningError> {
        Ok(Self::new(BasketConfig::load(root, overrides)?))
    }

    /// Attach a token polled between top-level mining iterations.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    pub fn config(&self) -> &BasketConfig {
        &self.config
    }

    /// Mine frequent itemsets and association rules from `transactions`.
    ///
    /// When no item reaches the support threshold the outcome is empty and
    /// `diagnostics.empty_tree` is set; this is not an error.
    pub fn run<T, S>(&self, transactions: &[T]) -> Result<MiningOutcome, MiningError>
    where
        T: AsRef<[S]>,
        S: AsRef<str>,
    {
        let started = Instant::now();
        let min_support = self.config.mining.effective_min_support();
        let max_len = self.config.mining.effective_max_len();
        let filter = RuleFilter::from_config(&self.config.rules);

        validate_min_support(min_support)?;
        filter.validate()?;
        if max_len == Some(0) {
            return Err(MiningError::invalid_input("max_len must be at least 1"));
        }

        let span = info_span!(
            "basket.mine",
            transaction_count = transactions.len(),
            min_support,
            metric = %filter.metric,
            min_threshold = filter.min_threshold,
        );
        let _guard = span.enter();

        let encoded = encode(transactions)?;
        let transaction_count = encoded.transaction_count();
        let min_count = min_count_for(min_support, transaction_count);

        let mut diagnostics = MiningDiagnostics {
            transaction_count,
            universe_size: encoded.universe().len(),
            min_count,
            ..Default::default()
        };

        let tree = match FpTree::from_encoded(&encoded, min_count) {
            Ok(tree) => tree,
            Err(e) if e.is_recoverable() => {
                warn!(min_count, "no item reaches the support threshold");
                diagnostics.empty_tree = true;
                diagnostics.elapsed_ms = started.elapsed().as_millis() as u64;
                return Ok(MiningOutcome::empty(diagnostics));
            }
            Err(e) => return Err(e),
        };
        diagnostics.frequent_item_count = tree.header().len();
        diagnostics.tree_node_count = tree.node_count();
        debug!(
            nodes = tree.node_count(),
            frequent_items = tree.header().len(),
            "built fp-tree"
        );

        let token = self.cancellation.as_ref().map(|t| t as &dyn Cancellable);
        let raw = FpGrowth::new(min_count)
            .with_max_len(max_len)
            .with_cancellation(token)
            .mine(&tree)?;
        drop(tree);
        let records = growth::into_records(raw, encoded.universe());
        debug!(itemsets = records.len(), "mined frequent itemsets");

        let mut rules = generate_rules(&records, &filter)?;
        let itemsets = annotate(records);

        let mut rule_mode = RuleMode::Discovered;
        if rules.is_empty() && !itemsets.is_empty() {
            match self.config.rules.effective_fallback() {
                FallbackMode::Demo => {
                    warn!("no rule reaches the threshold, emitting demo placeholder rules");
                    rules = demo_fallback_rules(&itemsets);
                    rule_mode = RuleMode::DemoFallback;
                }
                FallbackMode::Disabled => {}
            }
        }

        diagnostics.itemset_count = itemsets.len();
        diagnostics.rule_count = rules.len();
        diagnostics.elapsed_ms = started.elapsed().as_millis() as u64;

        info!(
            { fields::TRANSACTION_COUNT } = diagnostics.transaction_count,
            { fields::UNIVERSE_SIZE } = diagnostics.universe_size,
            { fields::TREE_NODE_COUNT } = diagnostics.tree_node_count,
            { fields::ITEMSET_COUNT } = diagnostics.itemset_count,
            { fields::RULE_COUNT } = diagnostics.rule_count,
            { fields::MINE_TIME_MS } = diagnostics.elapsed_ms,
            rule_mode = %rule_mode,
            "mining complete"
        );

        Ok(MiningOutcome {
            itemsets,
            rules,
            rule_mode,
            diagnostics,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_textbook() {
        let engine = MiningEngine::with_thresholds(0.5, 0.5);
        let input = vec![vec!["A", "B"], vec!["A", "B", "C"], vec!["A"], vec!["B", "C"]];
        let outcome = engine.run(&input).unwrap();

        assert_eq!(outcome.itemsets.len(), 5);
        assert_eq!(outcome.rule_mode, RuleMode::Discovered);
        assert_eq!(outcome.rules.len(), 4);
        assert_eq!(outcome.diagnostics.min_count, 2);
        assert_eq!(outcome.diagnostics.frequent_item_count, 3);
        assert!(!outcome.diagnostics.empty_tree);
    }

    #[test]
    fn test_empty_tree_is_not_an_error() {
        let engine = MiningEngine::with_thresholds(0.9, 0.5);
        let input = vec![vec!["A"], vec!["B"]];
        let outcome = engine.run(&input).unwrap();
        assert!(outcome.diagnostics.empty_tree);
        assert!(outcome.itemsets.is_empty());
        assert!(outcome.rules.is_empty());
        assert!(!outcome.is_demo_fallback());
    }

    #[test]
    fn test_invalid_thresholds() {
        let input = vec![vec!["A"]];
        assert!(matches!(
            MiningEngine::with_thresholds(0.0, 0.5).run(&input),
            Err(MiningError::InvalidInput { .. })
        ));
        assert!(matches!(
            MiningEngine::with_thresholds(0.5, 1.5).run(&input),
            Err(MiningError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_cancelled_run() {
        let token = CancellationToken::new();
        token.cancel();
        let engine = MiningEngine::with_thresholds(0.25, 0.5).with_cancellation(token);
        let input = vec![vec!["A", "B"], vec!["A", "C"], vec!["B", "C"]];
        assert!(matches!(engine.run(&input), Err(MiningError::Cancelled)));
    }
}
