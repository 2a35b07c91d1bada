//! Header table: per-item totals and node occurrence lists.

use basket_core::types::collections::FxHashMap;

use super::node::NodeId;
use crate::encoder::ItemId;

/// Header row for one frequent item.
#[derive(Debug, Clone)]
pub struct HeaderEntry {
    pub item: ItemId,
    /// Sum of the counts of every node holding `item`.
    pub count: u64,
    /// Every node holding `item`, in creation order.
    pub nodes: Vec<NodeId>,
}

/// Header table of one tree.
///
/// Entries are ordered by descending count, ties by ascending item id.
#[derive(Debug, Clone, Default)]
pub struct HeaderTable {
    entries: Vec<HeaderEntry>,
    slot: FxHashMap<ItemId, usize>,
}

impl HeaderTable {
    /// Build from `(item, count)` pairs of the frequent items.
    pub(crate) fn from_counts(mut counts: Vec<(ItemId, u64)>) -> Self {
        counts.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        let entries: Vec<HeaderEntry> = counts
            .into_iter()
            .map(|(item, count)| HeaderEntry {
                item,
                count,
                nodes: Vec::new(),
            })
            .collect();
        let slot = entries
            .iter()
            .enumerate()
            .map(|(i, e)| (e.item, i))
            .collect();
        Self { entries, slot }
    }

    pub(crate) fn register(&mut self, item: ItemId, node: NodeId) {
        if let Some(&i) = self.slot.get(&item) {
            self.entries[i].nodes.push(node);
        }
    }

    pub fn contains(&self, item: ItemId) -> bool {
        self.slot.contains_key(&item)
    }

    pub fn get(&self, item: ItemId) -> Option<&HeaderEntry> {
        self.slot.get(&item).map(|&i| &self.entries[i])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries from highest to lowest count.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &HeaderEntry> {
        self.entries.iter()
    }

    /// Entries from lowest to highest count, the mining order.
    pub fn iter_ascending_support(&self) -> impl Iterator<Item = &HeaderEntry> {
        self.entries.iter().rev()
    }
}
