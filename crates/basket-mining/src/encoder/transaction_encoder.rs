//! Two-pass transaction encoder.
//!
//! Pass 1 interns labels and tallies per-item support (each item counted at
//! most once per basket). Pass 2 ranks items by descending support, ties by
//! first appearance, and rewrites every basket as sorted rank ids.

use basket_core::errors::MiningError;
use basket_core::types::collections::{FxHashMap, SmallVec8};
use basket_core::types::ItemInterner;
use lasso::Spur;
use tracing::debug;

use super::types::{EncodedTransaction, EncodedTransactions, ItemId, ItemUniverse};

/// Per-label bookkeeping during pass 1.
struct ItemTally {
    spur: Spur,
    count: u64,
    /// Index + 1 of the last transaction that counted this item.
    last_seen: usize,
}

/// Encode raw transactions into a ranked item universe and encoded baskets.
///
/// Labels are taken verbatim. Duplicates within a basket collapse to one
/// occurrence.
///
/// Fails with `InvalidInput` when `transactions` is empty, when a basket has
/// no items, or when a label is blank.
pub fn encode<T, S>(transactions: &[T]) -> Result<EncodedTransactions, MiningError>
where
    T: AsRef<[S]>,
    S: AsRef<str>,
{
    if transactions.is_empty() {
        return Err(MiningError::invalid_input("transaction sequence is empty"));
    }

    let mut interner = ItemInterner::new();
    let mut tallies: Vec<ItemTally> = Vec::new();
    let mut slot_of: FxHashMap<Spur, usize> = FxHashMap::default();
    let mut baskets: Vec<SmallVec8<usize>> = Vec::with_capacity(transactions.len());

    for (t_idx, transaction) in transactions.iter().enumerate() {
        let stamp = t_idx + 1;
        let mut basket = SmallVec8::new();

        for label in transaction.as_ref() {
            let label = label.as_ref();
            if label.trim().is_empty() {
                return Err(MiningError::invalid_input(format!(
                    "transaction {} contains a blank item label",
                    t_idx
                )));
            }
            let spur = interner.intern(label);
            let slot = *slot_of.entry(spur).or_insert_with(|| {
                tallies.push(ItemTally {
                    spur,
                    count: 0,
                    last_seen: 0,
                });
                tallies.len() - 1
            });
            let tally = &mut tallies[slot];
            if tally.last_seen != stamp {
                tally.last_seen = stamp;
                tally.count += 1;
                basket.push(slot);
            }
        }

        if basket.is_empty() {
            return Err(MiningError::invalid_input(format!(
                "transaction {} is empty",
                t_idx
            )));
        }
        baskets.push(basket);
    }

    // Slots are in first-seen order, so a stable sort keeps that as tie-break.
    let mut order: Vec<usize> = (0..tallies.len()).collect();
    order.sort_by(|a, b| tallies[*b].count.cmp(&tallies[*a].count));

    let mut rank_of_slot = vec![ItemId(0); tallies.len()];
    for (rank, slot) in order.iter().enumerate() {
        rank_of_slot[*slot] = ItemId(rank as u32);
    }

    let encoded: Vec<EncodedTransaction> = baskets
        .iter()
        .map(|basket| EncodedTransaction::from_ids(basket.iter().map(|slot| rank_of_slot[*slot])))
        .collect();

    let ranked: Vec<Spur> = order.iter().map(|slot| tallies[*slot].spur).collect();
    let support_counts: Vec<u64> = order.iter().map(|slot| tallies[*slot].count).collect();

    debug!(
        transactions = encoded.len(),
        distinct_items = ranked.len(),
        "encoded transactions"
    );

    let universe = ItemUniverse::new(
        interner.into_reader(),
        ranked,
        support_counts,
        encoded.len() as u64,
    );
    Ok(EncodedTransactions::new(universe, encoded))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn baskets(raw: &[&[&str]]) -> Vec<Vec<String>> {
        raw.iter()
            .map(|t| t.iter().map(|s| s.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_universe_ranked_by_support_then_first_seen() {
        let input = baskets(&[&["C", "A"], &["B", "A"], &["B"], &["D"]]);
        let encoded = encode(&input).unwrap();
        let universe = encoded.universe();

        let labels: Vec<&str> = universe.iter().map(|(_, label, _)| label).collect();
        // A and B both appear twice; A was seen first. C before D likewise.
        assert_eq!(labels, vec!["A", "B", "C", "D"]);
        assert_eq!(universe.support_count(ItemId(0)), 2);
        assert_eq!(universe.support_count(ItemId(3)), 1);
        assert_eq!(universe.id_of("C"), Some(ItemId(2)));
        assert_eq!(universe.id_of("missing"), None);
    }

    #[test]
    fn test_transactions_sorted_and_deduplicated() {
        let input = baskets(&[&["B", "A", "B"], &["A"], &["A", "B"]]);
        let encoded = encode(&input).unwrap();
        let first = &encoded.transactions()[0];
        assert_eq!(first.items(), &[ItemId(0), ItemId(1)]);
        // Duplicate B counted once for its basket.
        assert_eq!(encoded.universe().support_count(ItemId(1)), 2);
        assert_eq!(encoded.transaction_count(), 3);
    }

    #[test]
    fn test_empty_input_rejected() {
        let input: Vec<Vec<String>> = Vec::new();
        assert!(matches!(encode(&input), Err(MiningError::InvalidInput { .. })));
    }

    #[test]
    fn test_empty_transaction_rejected() {
        let input = baskets(&[&["A"], &[]]);
        let err = encode(&input).unwrap_err();
        assert!(err.to_string().contains("transaction 1 is empty"));
    }

    #[test]
    fn test_blank_label_rejected() {
        let input = baskets(&[&["A", "  "]]);
        assert!(matches!(encode(&input), Err(MiningError::InvalidInput { .. })));
    }

    #[test]
    fn test_accepts_borrowed_str_slices() {
        let input: Vec<Vec<&str>> = vec![vec!["x", "y"], vec!["y"]];
        let encoded = encode(&input).unwrap();
        assert_eq!(encoded.universe().label(ItemId(0)), "y");
        assert_eq!(encoded.transactions()[0].items(), &[ItemId(0), ItemId(1)]);
        assert_eq!(encoded.transactions()[1].items(), &[ItemId(0)]);
    }
}
