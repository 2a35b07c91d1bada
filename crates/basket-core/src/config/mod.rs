//! Configuration system for basket.
//! TOML-based, layered resolution: overrides > env > project > user > defaults.

pub mod basket_config;
pub mod mining_config;
pub mod rules_config;

pub use basket_config::{BasketConfig, ConfigOverrides};
pub use mining_config::MiningConfig;
pub use rules_config::{FallbackMode, RuleMetric, RulesConfig};
