//! Association rule types.

use basket_core::config::{RuleMetric, RulesConfig};
use basket_core::errors::MiningError;
use serde::{Deserialize, Serialize};

use crate::growth::Itemset;

/// Metrics only defined for mined rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleDetail {
    pub antecedent_support: f64,
    pub consequent_support: f64,
    /// `support - antecedent_support * consequent_support`.
    pub leverage: f64,
    /// `(1 - consequent_support) / (1 - confidence)`. `None` when confidence
    /// is 1 and the ratio is unbounded; JSON has no encoding for infinity.
    pub conviction: Option<f64>,
}

/// An association rule `antecedent → consequent`.
///
/// `confidence` and `lift` here are the antecedent/consequent formulas.
/// They are unrelated to the relative metrics on `AnnotatedItemset`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleRecord {
    pub antecedent: Itemset,
    pub consequent: Itemset,
    /// Support of `antecedent ∪ consequent`.
    pub support: f64,
    pub confidence: f64,
    pub lift: f64,
    /// `None` for demo placeholder rules.
    pub detail: Option<RuleDetail>,
}

impl RuleRecord {
    /// Value of `metric` for this rule, if defined.
    pub fn metric(&self, metric: RuleMetric) -> Option<f64> {
        match metric {
            RuleMetric::Support => Some(self.support),
            RuleMetric::Confidence => Some(self.confidence),
            RuleMetric::Lift => Some(self.lift),
            RuleMetric::Leverage => self.detail.as_ref().map(|d| d.leverage),
            // Unbounded conviction clears every finite threshold.
            RuleMetric::Conviction => self
                .detail
                .as_ref()
                .map(|d| d.conviction.unwrap_or(f64::INFINITY)),
        }
    }

    /// The full itemset the rule was split from.
    pub fn itemset(&self) -> Itemset {
        self.antecedent.union(&self.consequent)
    }

    pub fn is_placeholder(&self) -> bool {
        self.detail.is_none()
    }
}

/// Which rules to keep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RuleFilter {
    pub metric: RuleMetric,
    pub min_threshold: f64,
}

impl RuleFilter {
    /// Keep rules with `confidence >= min_confidence`.
    pub fn confidence(min_confidence: f64) -> Self {
        Self {
            metric: RuleMetric::Confidence,
            min_threshold: min_confidence,
        }
    }

    pub fn from_config(config: &RulesConfig) -> Self {
        Self {
            metric: config.effective_metric(),
            min_threshold: config.effective_min_threshold(),
        }
    }

    pub fn validate(&self) -> Result<(), MiningError> {
        if self.metric.accepts_threshold(self.min_threshold) {
            Ok(())
        } else {
            Err(MiningError::invalid_input(format!(
                "min_threshold {} is out of range for metric '{}'",
                self.min_threshold, self.metric
            )))
        }
    }

    pub fn accepts(&self, rule: &RuleRecord) -> bool {
        rule.metric(self.metric)
            .is_some_and(|value| value >= self.min_threshold)
    }
}

impl Default for RuleFilter {
    fn default() -> Self {
        Self::from_config(&RulesConfig::default())
    }
}
