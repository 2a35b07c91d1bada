//! Rule generation from frequent itemsets.
//!
//! Every itemset of size k ≥ 2 yields 2^k − 2 candidate splits. Supports of
//! both sides are looked up among the mined itemsets; anti-monotonicity
//! guarantees they are there.

use basket_core::constants::MAX_RULE_ITEMSET_LEN;
use basket_core::errors::MiningError;
use basket_core::types::collections::{FxHashMap, SmallVec8};
use tracing::debug;

use super::types::{RuleDetail, RuleFilter, RuleRecord};
use crate::growth::{Itemset, ItemsetRecord};

/// Generate every rule passing `filter`, grouped by source itemset in input
/// order.
///
/// Fails with `MetricUndefined` when a split's antecedent or consequent is
/// missing from `itemsets` or has zero support, which means the list was not
/// produced by a complete miner run.
pub fn generate_rules(
    itemsets: &[ItemsetRecord],
    filter: &RuleFilter,
) -> Result<Vec<RuleRecord>, MiningError> {
    filter.validate()?;

    let index: FxHashMap<Vec<&str>, &ItemsetRecord> = itemsets
        .iter()
        .map(|record| (record.items.iter().collect(), record))
        .collect();

    let mut rules = Vec::new();
    let mut candidates = 0usize;

    for record in itemsets.iter().filter(|r| r.len() >= 2) {
        let labels: SmallVec8<&str> = record.items.iter().collect();
        let k = labels.len();
        if k > MAX_RULE_ITEMSET_LEN {
            return Err(MiningError::invalid_input(format!(
                "itemset of {} items exceeds the rule enumeration limit of {}",
                k, MAX_RULE_ITEMSET_LEN
            )));
        }

        let full: u64 = (1u64 << k) - 1;
        for mask in 1..full {
            candidates += 1;
            let (antecedent, consequent) = split(&labels, mask);
            let ante = lookup(&index, &antecedent)?;
            let cons = lookup(&index, &consequent)?;

            let confidence = record.count as f64 / ante.count as f64;
            let lift = confidence / cons.support;
            let leverage = record.support - ante.support * cons.support;
            let conviction = (confidence < 1.0).then(|| (1.0 - cons.support) / (1.0 - confidence));

            let rule = RuleRecord {
                antecedent: ante.items.clone(),
                consequent: cons.items.clone(),
                support: record.support,
                confidence,
                lift,
                detail: Some(RuleDetail {
                    antecedent_support: ante.support,
                    consequent_support: cons.support,
                    leverage,
                    conviction,
                }),
            };
            if filter.accepts(&rule) {
                rules.push(rule);
            }
        }
    }

    debug!(
        candidates,
        kept = rules.len(),
        metric = %filter.metric,
        threshold = filter.min_threshold,
        "generated rules"
    );
    Ok(rules)
}

/// Split sorted labels by bitmask: set bits form the antecedent.
fn split<'a>(labels: &[&'a str], mask: u64) -> (SmallVec8<&'a str>, SmallVec8<&'a str>) {
    let mut antecedent = SmallVec8::new();
    let mut consequent = SmallVec8::new();
    for (bit, label) in labels.iter().enumerate() {
        if mask & (1u64 << bit) != 0 {
            antecedent.push(*label);
        } else {
            consequent.push(*label);
        }
    }
    (antecedent, consequent)
}

fn lookup<'r, 's>(
    index: &FxHashMap<Vec<&'s str>, &'r ItemsetRecord>,
    labels: &[&'s str],
) -> Result<&'r ItemsetRecord, MiningError> {
    match index.get(labels) {
        Some(record) if record.count > 0 && record.support > 0.0 => Ok(record),
        _ => Err(MiningError::MetricUndefined {
            itemset: Itemset::new(labels.iter().copied()).to_string(),
        }),
    }
}
