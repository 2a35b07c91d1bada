//! Association rule generation.

pub mod generator;
pub mod types;

pub use basket_core::config::RuleMetric;
pub use generator::generate_rules;
pub use types::{RuleDetail, RuleFilter, RuleRecord};
