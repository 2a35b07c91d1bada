//! Transaction encoding.
//!
//! Turns raw baskets of labels into a support-ranked item universe and one
//! sorted, duplicate-free encoded transaction per basket.

pub mod transaction_encoder;
pub mod types;

pub use transaction_encoder::encode;
pub use types::{EncodedTransaction, EncodedTransactions, ItemId, ItemUniverse};
