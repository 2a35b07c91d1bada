//! FP-growth over an FP-tree.
//!
//! Top-level header items are expanded one at a time, lowest support first.
//! Between two top-level items the cancellation token is polled; this is the
//! only interruption point. Below the top level, conditional trees are mined
//! from an explicit work stack of `(tree, prefix)` pairs, so native stack
//! depth stays constant regardless of universe size.

use basket_core::errors::MiningError;
use basket_core::traits::Cancellable;
use basket_core::types::collections::SmallVec8;
use tracing::debug;

use super::types::RawItemset;
use crate::encoder::ItemId;
use crate::fptree::{FpTree, HeaderEntry, NodeId};

type Prefix = SmallVec8<ItemId>;

/// FP-growth miner configuration for one run.
pub struct FpGrowth<'a> {
    min_count: u64,
    max_len: Option<usize>,
    cancellation: Option<&'a dyn Cancellable>,
}

impl<'a> FpGrowth<'a> {
    pub fn new(min_count: u64) -> Self {
        Self {
            min_count,
            max_len: None,
            cancellation: None,
        }
    }

    /// Do not emit itemsets with more than `max_len` items.
    pub fn with_max_len(mut self, max_len: Option<usize>) -> Self {
        self.max_len = max_len;
        self
    }

    pub fn with_cancellation(mut self, token: Option<&'a dyn Cancellable>) -> Self {
        self.cancellation = token;
        self
    }

    /// Mine every itemset with count ≥ `min_count` from `tree`.
    pub fn mine(&self, tree: &FpTree) -> Result<Vec<RawItemset>, MiningError> {
        self.mine_from(tree, &[])
    }

    /// Mine `tree` as the conditional tree of `base`: every emitted itemset
    /// is `base` plus at least one item of `tree`.
    pub fn mine_from(&self, tree: &FpTree, base: &[ItemId]) -> Result<Vec<RawItemset>, MiningError> {
        let mut out = Vec::new();
        let base: Prefix = base.iter().copied().collect();
        if !self.can_extend(base.len()) {
            return Ok(out);
        }

        if let Some(path) = tree.single_path() {
            self.emit_single_path(tree, &path, &base, &mut out);
            return Ok(out);
        }

        let mut stack: Vec<(FpTree, Prefix)> = Vec::new();
        for entry in tree.header().iter_ascending_support() {
            if self.is_cancelled() {
                debug!(emitted = out.len(), "fp-growth cancelled");
                return Err(MiningError::Cancelled);
            }

            self.expand(tree, entry, &base, &mut stack, &mut out)?;

            while let Some((conditional, prefix)) = stack.pop() {
                self.mine_conditional(&conditional, &prefix, &mut stack, &mut out)?;
            }
        }

        Ok(out)
    }

    fn mine_conditional(
        &self,
        tree: &FpTree,
        prefix: &Prefix,
        stack: &mut Vec<(FpTree, Prefix)>,
        out: &mut Vec<RawItemset>,
    ) -> Result<(), MiningError> {
        if let Some(path) = tree.single_path() {
            self.emit_single_path(tree, &path, prefix, out);
            return Ok(());
        }
        for entry in tree.header().iter_ascending_support() {
            self.expand(tree, entry, prefix, stack, out)?;
        }
        Ok(())
    }

    /// Emit `prefix ∪ {entry.item}` and queue its conditional tree.
    fn expand(
        &self,
        tree: &FpTree,
        entry: &HeaderEntry,
        prefix: &Prefix,
        stack: &mut Vec<(FpTree, Prefix)>,
        out: &mut Vec<RawItemset>,
    ) -> Result<(), MiningError> {
        let mut extended = prefix.clone();
        extended.push(entry.item);
        out.push(RawItemset {
            items: extended.clone(),
            count: entry.count,
        });

        if !self.can_extend(extended.len()) {
            return Ok(());
        }

        let base = tree.conditional_pattern_base(entry.item);
        if base.is_empty() {
            return Ok(());
        }
        match FpTree::build(&base, self.min_count) {
            Ok(conditional) => {
                stack.push((conditional, extended));
                Ok(())
            }
            Err(MiningError::EmptyTree { .. }) => Ok(()),
            Err(e) => Err(e),
        }
    }

    /// Emit every non-empty combination of the chain's nodes joined with
    /// `prefix`. Counts never increase down a chain, so the support of a
    /// combination is the count of its deepest node.
    fn emit_single_path(
        &self,
        tree: &FpTree,
        path: &[NodeId],
        prefix: &Prefix,
        out: &mut Vec<RawItemset>,
    ) {
        let room = match self.max_len {
            Some(max) => max.saturating_sub(prefix.len()),
            None => path.len(),
        };
        if room == 0 {
            return;
        }

        // Combinations of the nodes above the current one, empty set included.
        let mut above: Vec<SmallVec8<ItemId>> = vec![SmallVec8::new()];
        for &node_id in path {
            let node = tree.node(node_id);
            let Some(item) = node.item() else {
                continue;
            };
            let mut created = Vec::new();
            for combo in above.iter().filter(|c| c.len() < room) {
                let mut items = prefix.clone();
                items.extend(combo.iter().copied());
                items.push(item);
                out.push(RawItemset {
                    items,
                    count: node.count(),
                });

                let mut grown = combo.clone();
                grown.push(item);
                created.push(grown);
            }
            above.extend(created);
        }
    }

    fn can_extend(&self, current_len: usize) -> bool {
        self.max_len.map_or(true, |max| current_len < max)
    }

    fn is_cancelled(&self) -> bool {
        self.cancellation.is_some_and(|token| token.is_cancelled())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use basket_core::traits::CancellationToken;
    use basket_core::types::collections::FxHashMap;

    fn tree_of(raw: &[&[u32]], min_count: u64) -> FpTree {
        let paths: Vec<(SmallVec8<ItemId>, u64)> = raw
            .iter()
            .map(|p| (p.iter().map(|i| ItemId(*i)).collect(), 1))
            .collect();
        FpTree::build(&paths, min_count).unwrap()
    }

    fn as_map(found: Vec<RawItemset>) -> FxHashMap<Vec<u32>, u64> {
        let mut map = FxHashMap::default();
        for raw in found {
            let mut key: Vec<u32> = raw.items.iter().map(|i| i.0).collect();
            key.sort_unstable();
            assert!(map.insert(key, raw.count).is_none(), "duplicate itemset emitted");
        }
        map
    }

    #[test]
    fn test_mines_textbook_example() {
        // A=0 B=1 C=2 over [[A,B],[A,B,C],[A],[B,C]]
        let tree = tree_of(&[&[0, 1], &[0, 1, 2], &[0], &[1, 2]], 2);
        let found = as_map(FpGrowth::new(2).mine(&tree).unwrap());

        assert_eq!(found.len(), 5);
        assert_eq!(found[&vec![0]], 3);
        assert_eq!(found[&vec![1]], 3);
        assert_eq!(found[&vec![2]], 2);
        assert_eq!(found[&vec![0, 1]], 2);
        assert_eq!(found[&vec![1, 2]], 2);
        assert!(!found.contains_key(&vec![0, 2]));
    }

    #[test]
    fn test_single_path_enumerates_all_combinations() {
        let tree = tree_of(&[&[0, 1, 2], &[0, 1, 2], &[0, 1]], 1);
        let found = as_map(FpGrowth::new(1).mine(&tree).unwrap());

        assert_eq!(found.len(), 7);
        assert_eq!(found[&vec![0]], 3);
        assert_eq!(found[&vec![0, 1]], 3);
        assert_eq!(found[&vec![2]], 2);
        assert_eq!(found[&vec![0, 2]], 2);
        assert_eq!(found[&vec![0, 1, 2]], 2);
    }

    #[test]
    fn test_max_len_caps_cardinality() {
        let tree = tree_of(&[&[0, 1, 2], &[0, 1, 2], &[0, 2], &[1]], 1);
        let found = FpGrowth::new(1).with_max_len(Some(2)).mine(&tree).unwrap();
        assert!(found.iter().all(|r| r.items.len() <= 2));
        let found = as_map(found);
        assert!(found.contains_key(&vec![0, 2]));
        assert!(!found.contains_key(&vec![0, 1, 2]));
    }

    #[test]
    fn test_mine_from_base_prefix() {
        let tree = tree_of(&[&[1, 2], &[1]], 1);
        let found = as_map(FpGrowth::new(1).mine_from(&tree, &[ItemId(7)]).unwrap());
        assert_eq!(found[&vec![1, 7]], 2);
        assert_eq!(found[&vec![1, 2, 7]], 1);
        assert!(!found.contains_key(&vec![7]));
    }

    #[test]
    fn test_unsorted_input_paths_mine_once() {
        let tree = tree_of(&[&[0, 1], &[1, 0]], 1);
        let found = as_map(FpGrowth::new(1).mine(&tree).unwrap());
        assert_eq!(found.len(), 3);
        assert_eq!(found[&vec![0]], 2);
        assert_eq!(found[&vec![1]], 2);
        assert_eq!(found[&vec![0, 1]], 2);
    }

    #[test]
    fn test_cancellation_between_top_level_items() {
        let tree = tree_of(&[&[0, 1], &[0, 2], &[1, 2]], 1);
        let token = CancellationToken::new();
        token.cancel();
        let result = FpGrowth::new(1)
            .with_cancellation(Some(&token as &dyn Cancellable))
            .mine(&tree);
        assert!(matches!(result, Err(MiningError::Cancelled)));
    }
}
