//! Arena node types.

use basket_core::types::collections::SmallVec4;

use crate::encoder::ItemId;

/// Index of a node in its tree's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl NodeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// One FP-tree node.
#[derive(Debug, Clone)]
pub struct FpNode {
    pub(crate) item: Option<ItemId>,
    pub(crate) count: u64,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: SmallVec4<NodeId>,
}

impl FpNode {
    pub(crate) fn root() -> Self {
        Self {
            item: None,
            count: 0,
            parent: None,
            children: SmallVec4::new(),
        }
    }

    pub(crate) fn child(item: ItemId, count: u64, parent: NodeId) -> Self {
        Self {
            item: Some(item),
            count,
            parent: Some(parent),
            children: SmallVec4::new(),
        }
    }

    /// The node's item; `None` only for the root.
    pub fn item(&self) -> Option<ItemId> {
        self.item
    }

    /// Weighted number of transactions passing through this node.
    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}
