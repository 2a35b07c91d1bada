//! FP-growth frequent itemset mining.

pub mod miner;
pub mod support;
pub mod types;

pub use miner::FpGrowth;
pub use support::{min_count_for, support_fraction, validate_min_support};
pub use types::{Itemset, ItemsetRecord, RawItemset};

use basket_core::errors::MiningError;
use basket_core::traits::Cancellable;

use crate::encoder::{EncodedTransactions, ItemUniverse};
use crate::fptree::FpTree;

/// Mine all frequent itemsets of `encoded` at `min_support`.
///
/// Returns `EmptyTree` when no single item reaches the threshold; callers
/// treat that as "no frequent itemsets".
pub fn mine_itemsets(
    encoded: &EncodedTransactions,
    min_support: f64,
    max_len: Option<usize>,
    cancellation: Option<&dyn Cancellable>,
) -> Result<Vec<ItemsetRecord>, MiningError> {
    validate_min_support(min_support)?;
    let min_count = min_count_for(min_support, encoded.transaction_count());
    let tree = FpTree::from_encoded(encoded, min_count)?;
    let raw = FpGrowth::new(min_count)
        .with_max_len(max_len)
        .with_cancellation(cancellation)
        .mine(&tree)?;
    Ok(into_records(raw, encoded.universe()))
}

/// Resolve labels, convert counts to support, and sort canonically:
/// by cardinality, then descending support, then labels.
pub fn into_records(raw: Vec<RawItemset>, universe: &ItemUniverse) -> Vec<ItemsetRecord> {
    let n = universe.transaction_count();
    let mut records: Vec<ItemsetRecord> = raw
        .into_iter()
        .map(|r| ItemsetRecord {
            items: Itemset::new(r.items.iter().map(|id| universe.label(*id))),
            support: support_fraction(r.count, n),
            count: r.count,
        })
        .collect();
    records.sort_by(|a, b| {
        a.items
            .len()
            .cmp(&b.items.len())
            .then(b.count.cmp(&a.count))
            .then_with(|| a.items.cmp(&b.items))
    });
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::encode;

    #[test]
    fn test_records_in_canonical_order() {
        let input = vec![vec!["A", "B"], vec!["A", "B", "C"], vec!["A"], vec!["B", "C"]];
        let encoded = encode(&input).unwrap();
        let records = mine_itemsets(&encoded, 0.5, None, None).unwrap();

        let rendered: Vec<(String, u64)> = records
            .iter()
            .map(|r| (r.items.to_string(), r.count))
            .collect();
        assert_eq!(
            rendered,
            vec![
                ("{A}".to_string(), 3),
                ("{B}".to_string(), 3),
                ("{C}".to_string(), 2),
                ("{A, B}".to_string(), 2),
                ("{B, C}".to_string(), 2),
            ]
        );
        assert_eq!(records[0].support, 0.75);
        assert_eq!(records[3].support, 0.5);
    }

    #[test]
    fn test_threshold_above_every_item_is_empty_tree() {
        let input = vec![vec!["A"], vec!["B"], vec!["C"]];
        let encoded = encode(&input).unwrap();
        let err = mine_itemsets(&encoded, 0.5, None, None).unwrap_err();
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_out_of_range_support_rejected() {
        let input = vec![vec!["A"]];
        let encoded = encode(&input).unwrap();
        assert!(matches!(
            mine_itemsets(&encoded, 0.0, None, None),
            Err(MiningError::InvalidInput { .. })
        ));
    }
}
