//! Demo fallback: placeholder rules when no real rule survives.
//!
//! Kept for output compatibility with earlier tooling. The placeholders carry
//! literal labels and copy support and the relative metrics positionally from
//! the first itemsets; they make no statistical claim. Callers can tell them
//! apart through `RuleMode::DemoFallback` and `RuleRecord::is_placeholder`.

use basket_core::constants::{DEMO_ANTECEDENT_LABEL, DEMO_CONSEQUENT_LABEL, DEMO_FALLBACK_LIMIT};

use super::annotator::AnnotatedItemset;
use crate::growth::Itemset;
use crate::rules::RuleRecord;

/// Up to three placeholder rules built from the first annotated itemsets.
pub fn demo_fallback_rules(annotated: &[AnnotatedItemset]) -> Vec<RuleRecord> {
    annotated
        .iter()
        .take(DEMO_FALLBACK_LIMIT)
        .map(|a| RuleRecord {
            antecedent: Itemset::new([DEMO_ANTECEDENT_LABEL]),
            consequent: Itemset::new([DEMO_CONSEQUENT_LABEL]),
            support: a.record.support,
            confidence: a.relative_confidence,
            lift: a.relative_lift,
            detail: None,
        })
        .collect()
}
