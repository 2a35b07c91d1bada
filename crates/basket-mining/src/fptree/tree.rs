//! FP-tree construction and path queries.

use std::borrow::Cow;

use basket_core::errors::MiningError;
use basket_core::types::collections::{FxHashMap, SmallVec8};

use super::header::HeaderTable;
use super::node::{FpNode, NodeId};
use crate::encoder::{EncodedTransactions, ItemId};

/// A weighted item path: one transaction (weight 1) or one prefix path of a
/// conditional pattern base (weight = count of the node it leads to).
pub type WeightedPath = (SmallVec8<ItemId>, u64);

/// Frequency-ordered prefix tree over the frequent items of a set of paths.
#[derive(Debug, Clone)]
pub struct FpTree {
    nodes: Vec<FpNode>,
    header: HeaderTable,
}

impl FpTree {
    /// Arena slot of the root node.
    pub const ROOT: NodeId = NodeId(0);

    /// Build the top-level tree from encoded transactions.
    pub fn from_encoded(encoded: &EncodedTransactions, min_count: u64) -> Result<Self, MiningError> {
        let paths: Vec<(&[ItemId], u64)> = encoded
            .transactions()
            .iter()
            .map(|t| (t.items(), 1))
            .collect();
        Self::build(&paths, min_count)
    }

    /// Build a tree from weighted paths.
    ///
    /// Paths are inserted sorted ascending by id; ids order items by
    /// descending global support, so shared prefixes collapse. Unsorted paths
    /// are sorted and repeated ids collapse to one. Items whose weighted count
    /// is below `min_count` are dropped from every path before insertion.
    ///
    /// Fails with `EmptyTree` when no item reaches `min_count`.
    pub fn build<P: AsRef<[ItemId]>>(paths: &[(P, u64)], min_count: u64) -> Result<Self, MiningError> {
        if min_count == 0 {
            return Err(MiningError::invalid_input("minimum support count must be at least 1"));
        }

        let paths: Vec<(Cow<'_, [ItemId]>, u64)> = paths
            .iter()
            .map(|(path, weight)| (normalized(path.as_ref()), *weight))
            .collect();

        let mut counts: FxHashMap<ItemId, u64> = FxHashMap::default();
        for (path, weight) in &paths {
            for item in path.iter() {
                *counts.entry(*item).or_insert(0) += weight;
            }
        }

        let frequent: Vec<(ItemId, u64)> = counts
            .into_iter()
            .filter(|(_, count)| *count >= min_count)
            .collect();
        if frequent.is_empty() {
            return Err(MiningError::EmptyTree { min_count });
        }

        let mut tree = Self {
            nodes: vec![FpNode::root()],
            header: HeaderTable::from_counts(frequent),
        };
        for (path, weight) in &paths {
            tree.insert(path, *weight);
        }
        Ok(tree)
    }

    fn insert(&mut self, path: &[ItemId], weight: u64) {
        if weight == 0 {
            return;
        }

        let mut current = Self::ROOT;
        for &item in path {
            if !self.header.contains(item) {
                continue;
            }
            let existing = self.nodes[current.index()]
                .children
                .iter()
                .copied()
                .find(|child| self.nodes[child.index()].item == Some(item));

            current = match existing {
                Some(child) => {
                    self.nodes[child.index()].count += weight;
                    child
                }
                None => {
                    let id = NodeId(self.nodes.len() as u32);
                    self.nodes.push(FpNode::child(item, weight, current));
                    self.nodes[current.index()].children.push(id);
                    self.header.register(item, id);
                    id
                }
            };
        }
    }

    pub fn header(&self) -> &HeaderTable {
        &self.header
    }

    pub fn node(&self, id: NodeId) -> &FpNode {
        &self.nodes[id.index()]
    }

    pub fn root(&self) -> &FpNode {
        &self.nodes[Self::ROOT.index()]
    }

    /// Number of item nodes (root excluded).
    pub fn node_count(&self) -> usize {
        self.nodes.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.node_count() == 0
    }

    /// If no node has more than one child, the nodes of that single chain
    /// from the root downwards.
    pub fn single_path(&self) -> Option<Vec<NodeId>> {
        let mut path = Vec::new();
        let mut current = self.root();
        loop {
            match current.children.len() {
                0 => return Some(path),
                1 => {
                    let child = current.children[0];
                    path.push(child);
                    current = self.node(child);
                }
                _ => return None,
            }
        }
    }

    /// Items on the path from the root down to `node`, excluding `node`
    /// itself, in root-first order.
    pub fn prefix_path(&self, node: NodeId) -> SmallVec8<ItemId> {
        let mut items = SmallVec8::new();
        let mut cursor = self.node(node).parent;
        while let Some(id) = cursor {
            let n = self.node(id);
            match n.item {
                Some(item) => items.push(item),
                None => break,
            }
            cursor = n.parent;
        }
        items.reverse();
        items
    }

    /// Conditional pattern base of `item`: every non-empty prefix path
    /// leading to a node of `item`, weighted by that node's count.
    pub fn conditional_pattern_base(&self, item: ItemId) -> Vec<WeightedPath> {
        let Some(entry) = self.header.get(item) else {
            return Vec::new();
        };
        entry
            .nodes
            .iter()
            .filter_map(|&node| {
                let path = self.prefix_path(node);
                (!path.is_empty()).then(|| (path, self.node(node).count))
            })
            .collect()
    }
}

/// `path` if already strictly ascending, else a sorted, de-duplicated copy.
fn normalized(path: &[ItemId]) -> Cow<'_, [ItemId]> {
    if path.windows(2).all(|w| w[0] < w[1]) {
        Cow::Borrowed(path)
    } else {
        let mut owned = path.to_vec();
        owned.sort_unstable();
        owned.dedup();
        Cow::Owned(owned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    fn ids(raw: &[u32]) -> SmallVec8<ItemId> {
        raw.iter().map(|i| ItemId(*i)).collect()
    }

    fn unit_paths(raw: &[&[u32]]) -> Vec<WeightedPath> {
        raw.iter().map(|p| (ids(p), 1)).collect()
    }

    #[test]
    fn test_shared_prefixes_collapse() {
        let paths = unit_paths(&[&[0, 1], &[0, 1, 2], &[0], &[1, 2]]);
        let tree = FpTree::build(&paths, 1).unwrap();

        // root -> 0 -> 1 -> 2, root -> 1 -> 2
        assert_eq!(tree.node_count(), 5);
        assert_eq!(tree.root().children().len(), 2);

        let zero = tree.header().get(ItemId(0)).unwrap();
        assert_eq!(zero.count, 3);
        assert_eq!(zero.nodes.len(), 1);
        assert_eq!(tree.node(zero.nodes[0]).count(), 3);

        let two = tree.header().get(ItemId(2)).unwrap();
        assert_eq!(two.count, 2);
        assert_eq!(two.nodes.len(), 2);
    }

    #[test]
    fn test_infrequent_items_pruned() {
        let paths = unit_paths(&[&[0, 1], &[0, 2], &[0, 1]]);
        let tree = FpTree::build(&paths, 2).unwrap();
        assert!(tree.header().get(ItemId(2)).is_none());
        assert_eq!(tree.header().len(), 2);
        assert_eq!(tree.node_count(), 2);
    }

    #[test]
    fn test_empty_tree_error() {
        let paths = unit_paths(&[&[0], &[1]]);
        let err = FpTree::build(&paths, 2).unwrap_err();
        assert!(matches!(err, MiningError::EmptyTree { min_count: 2 }));
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_zero_min_count_rejected() {
        let paths = unit_paths(&[&[0]]);
        assert!(matches!(
            FpTree::build(&paths, 0),
            Err(MiningError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_header_order_descending_count() {
        let paths = unit_paths(&[&[0, 1], &[1], &[1, 2], &[2]]);
        let tree = FpTree::build(&paths, 1).unwrap();
        let order: Vec<u32> = tree.header().iter().map(|e| e.item.0).collect();
        assert_eq!(order, vec![1, 2, 0]);
        let mining_order: Vec<u32> = tree
            .header()
            .iter_ascending_support()
            .map(|e| e.item.0)
            .collect();
        assert_eq!(mining_order, vec![0, 2, 1]);
    }

    #[test]
    fn test_single_path_detection() {
        let chain = FpTree::build(&unit_paths(&[&[0, 1, 2], &[0, 1]]), 1).unwrap();
        let path = chain.single_path().unwrap();
        let counts: Vec<u64> = path.iter().map(|n| chain.node(*n).count()).collect();
        assert_eq!(counts, vec![2, 2, 1]);

        let branching = FpTree::build(&unit_paths(&[&[0, 1], &[0, 2]]), 1).unwrap();
        assert!(branching.single_path().is_none());
    }

    #[test]
    fn test_conditional_pattern_base() {
        let paths = unit_paths(&[&[0, 1, 2], &[0, 2], &[1, 2], &[2]]);
        let tree = FpTree::build(&paths, 1).unwrap();
        let mut base = tree.conditional_pattern_base(ItemId(2));
        base.sort();
        let expected: Vec<WeightedPath> = vec![
            (smallvec![ItemId(0)], 1),
            (smallvec![ItemId(0), ItemId(1)], 1),
            (smallvec![ItemId(1)], 1),
        ];
        assert_eq!(base, expected);
    }

    #[test]
    fn test_unsorted_paths_share_nodes() {
        let paths = unit_paths(&[&[0, 1], &[1, 0]]);
        let tree = FpTree::build(&paths, 1).unwrap();
        assert_eq!(tree.node_count(), 2);
        assert_eq!(tree.header().get(ItemId(1)).unwrap().nodes.len(), 1);
        assert_eq!(tree.single_path().map(|p| p.len()), Some(2));
    }

    #[test]
    fn test_repeated_ids_count_once() {
        let paths = unit_paths(&[&[2, 0, 2], &[0]]);
        let tree = FpTree::build(&paths, 2).unwrap();
        assert_eq!(tree.header().get(ItemId(0)).unwrap().count, 2);
        assert!(tree.header().get(ItemId(2)).is_none());
    }

    #[test]
    fn test_weighted_paths_accumulate() {
        let paths: Vec<WeightedPath> = vec![(ids(&[0, 1]), 3), (ids(&[0]), 2)];
        let tree = FpTree::build(&paths, 4).unwrap();
        assert_eq!(tree.header().get(ItemId(0)).unwrap().count, 5);
        assert!(tree.header().get(ItemId(1)).is_none());
    }
}
