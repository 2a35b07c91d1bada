//! Itemset types produced by the miner.

use std::cmp::Ordering;
use std::fmt;

use basket_core::types::collections::SmallVec8;
use serde::{Deserialize, Serialize};

use crate::encoder::ItemId;

/// An unordered set of item labels.
///
/// Stored sorted and de-duplicated, so equality, hashing, and ordering are
/// set semantics.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct Itemset(Vec<String>);

impl Itemset {
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut labels: Vec<String> = items.into_iter().map(Into::into).collect();
        labels.sort_unstable();
        labels.dedup();
        Self(labels)
    }

    /// Wrap labels that are already sorted and unique.
    pub(crate) fn from_sorted(labels: Vec<String>) -> Self {
        debug_assert!(labels.windows(2).all(|w| w[0] < w[1]));
        Self(labels)
    }

    pub fn items(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, label: &str) -> bool {
        self.0.binary_search_by(|candidate| candidate.as_str().cmp(label)).is_ok()
    }

    pub fn is_subset(&self, other: &Itemset) -> bool {
        self.iter().all(|label| other.contains(label))
    }

    pub fn is_disjoint(&self, other: &Itemset) -> bool {
        !self.iter().any(|label| other.contains(label))
    }

    /// Sorted merge of both label lists.
    pub fn union(&self, other: &Itemset) -> Itemset {
        let mut merged = Vec::with_capacity(self.len() + other.len());
        let (mut a, mut b) = (self.0.iter().peekable(), other.0.iter().peekable());
        loop {
            let order = match (a.peek(), b.peek()) {
                (Some(x), Some(y)) => x.cmp(y),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => break,
            };
            let next = match order {
                Ordering::Less => a.next(),
                Ordering::Greater => b.next(),
                Ordering::Equal => {
                    b.next();
                    a.next()
                }
            };
            merged.extend(next.cloned());
        }
        Itemset::from_sorted(merged)
    }
}

impl From<Vec<String>> for Itemset {
    fn from(labels: Vec<String>) -> Self {
        Itemset::new(labels)
    }
}

impl From<Itemset> for Vec<String> {
    fn from(itemset: Itemset) -> Self {
        itemset.0
    }
}

impl fmt::Display for Itemset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.0.join(", "))
    }
}

/// A frequent itemset with its support.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemsetRecord {
    pub items: Itemset,
    /// Fraction of transactions containing every item, in (0, 1].
    pub support: f64,
    /// Exact number of transactions containing every item.
    pub count: u64,
}

impl ItemsetRecord {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Miner output before labels are resolved: ids plus an exact count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawItemset {
    pub items: SmallVec8<ItemId>,
    pub count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_itemset_is_a_set() {
        let a = Itemset::new(["b", "a", "b"]);
        let b = Itemset::new(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(a, b);
        assert_eq!(a.len(), 2);
        assert_eq!(a.to_string(), "{a, b}");
    }

    #[test]
    fn test_itemset_relations() {
        let ab = Itemset::new(["a", "b"]);
        let abc = Itemset::new(["a", "b", "c"]);
        let c = Itemset::new(["c"]);
        assert!(ab.is_subset(&abc));
        assert!(!abc.is_subset(&ab));
        assert!(ab.is_disjoint(&c));
        assert_eq!(ab.union(&c), abc);
        assert!(abc.contains("c"));
    }

    #[test]
    fn test_deserialize_normalizes() {
        let itemset: Itemset = serde_json::from_str(r#"["z", "a", "z"]"#).unwrap();
        assert_eq!(itemset.items(), &["a".to_string(), "z".to_string()]);
    }
}
