//! Core types for encoded transactions.

use std::fmt;

use basket_core::types::collections::{FxHashMap, SmallVec8};
use lasso::{RodeoReader, Spur};
use serde::{Deserialize, Serialize};

/// Dense item identifier.
///
/// The value is the item's rank in the universe: `ItemId(0)` is the most
/// frequent item. Ordering ids therefore orders items by descending global
/// support, ties broken by first appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemId(pub u32);

impl ItemId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// All distinct items of one mining run with their global support counts.
///
/// Built once by the encoder and read-only afterwards.
#[derive(Debug)]
pub struct ItemUniverse {
    labels: RodeoReader,
    ranked: Vec<Spur>,
    rank_of: FxHashMap<Spur, ItemId>,
    support_counts: Vec<u64>,
    transaction_count: u64,
}

impl ItemUniverse {
    pub(crate) fn new(
        labels: RodeoReader,
        ranked: Vec<Spur>,
        support_counts: Vec<u64>,
        transaction_count: u64,
    ) -> Self {
        let rank_of = ranked
            .iter()
            .enumerate()
            .map(|(rank, spur)| (*spur, ItemId(rank as u32)))
            .collect();
        Self {
            labels,
            ranked,
            rank_of,
            support_counts,
            transaction_count,
        }
    }

    /// Number of distinct items.
    pub fn len(&self) -> usize {
        self.ranked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty()
    }

    /// Number of transactions the universe was built from.
    pub fn transaction_count(&self) -> u64 {
        self.transaction_count
    }

    /// Label of an item.
    ///
    /// # Panics
    /// If `id` does not belong to this universe.
    pub fn label(&self, id: ItemId) -> &str {
        self.labels.resolve(&self.ranked[id.index()])
    }

    /// Id of a label, if the label occurs in any transaction.
    pub fn id_of(&self, label: &str) -> Option<ItemId> {
        self.labels
            .get(label)
            .and_then(|spur| self.rank_of.get(&spur).copied())
    }

    /// Number of transactions containing `id`.
    pub fn support_count(&self, id: ItemId) -> u64 {
        self.support_counts[id.index()]
    }

    /// Fraction of transactions containing `id`.
    pub fn support(&self, id: ItemId) -> f64 {
        self.support_count(id) as f64 / self.transaction_count as f64
    }

    /// Items in rank order: `(id, label, support_count)`.
    pub fn iter(&self) -> impl Iterator<Item = (ItemId, &str, u64)> + '_ {
        self.ranked.iter().enumerate().map(move |(rank, spur)| {
            (
                ItemId(rank as u32),
                self.labels.resolve(spur),
                self.support_counts[rank],
            )
        })
    }
}

/// One transaction as a subset of the universe.
///
/// Invariant: items are unique and sorted ascending by id, i.e. by
/// descending global support.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EncodedTransaction {
    items: SmallVec8<ItemId>,
}

impl EncodedTransaction {
    /// Build from arbitrary ids; sorts and removes duplicates.
    pub fn from_ids(ids: impl IntoIterator<Item = ItemId>) -> Self {
        let mut items: SmallVec8<ItemId> = ids.into_iter().collect();
        items.sort_unstable();
        items.dedup();
        Self { items }
    }

    pub fn items(&self) -> &[ItemId] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Encoder output: the universe plus one encoded transaction per input basket.
#[derive(Debug)]
pub struct EncodedTransactions {
    universe: ItemUniverse,
    transactions: Vec<EncodedTransaction>,
}

impl EncodedTransactions {
    pub(crate) fn new(universe: ItemUniverse, transactions: Vec<EncodedTransaction>) -> Self {
        Self {
            universe,
            transactions,
        }
    }

    pub fn universe(&self) -> &ItemUniverse {
        &self.universe
    }

    pub fn transactions(&self) -> &[EncodedTransaction] {
        &self.transactions
    }

    pub fn transaction_count(&self) -> u64 {
        self.transactions.len() as u64
    }
}
