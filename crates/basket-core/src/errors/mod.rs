//! Error handling for basket.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod error_code;
pub mod mining_error;

pub use config_error::ConfigError;
pub use error_code::BasketErrorCode;
pub use mining_error::MiningError;
