//! # basket-core
//!
//! Shared foundation for the basket pattern miner: error enums with stable
//! error codes, layered TOML configuration, tracing setup, cooperative
//! cancellation, collection aliases, label interning, and constants.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod traits;
pub mod types;

pub use config::BasketConfig;
pub use errors::{BasketErrorCode, ConfigError, MiningError};
pub use traits::{Cancellable, CancellationToken};
