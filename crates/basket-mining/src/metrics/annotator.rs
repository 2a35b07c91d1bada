//! Relative itemset metrics.

use serde::{Deserialize, Serialize};

use crate::growth::ItemsetRecord;

/// An itemset record with list-relative metrics attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotatedItemset {
    pub record: ItemsetRecord,
    /// `support / max(support)` over the annotated list.
    pub relative_confidence: f64,
    /// `support / mean(support)` over the annotated list.
    pub relative_lift: f64,
}

/// Attach relative metrics to every record, keeping order.
pub fn annotate(records: Vec<ItemsetRecord>) -> Vec<AnnotatedItemset> {
    if records.is_empty() {
        return Vec::new();
    }

    let max = records
        .iter()
        .map(|r| r.support)
        .fold(f64::NEG_INFINITY, f64::max);
    let mean = records.iter().map(|r| r.support).sum::<f64>() / records.len() as f64;

    records
        .into_iter()
        .map(|record| {
            let relative_confidence = ratio(record.support, max);
            let relative_lift = ratio(record.support, mean);
            AnnotatedItemset {
                record,
                relative_confidence,
                relative_lift,
            }
        })
        .collect()
}

fn ratio(value: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        value / denominator
    } else {
        0.0
    }
}
