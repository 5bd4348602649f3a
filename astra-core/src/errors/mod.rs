//! Error handling for Astra.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod astra_error;
pub mod config_error;
pub mod model_error;
pub mod query_error;
pub mod strategy_error;

pub use astra_error::{AstraError, AstraResult};
pub use config_error::ConfigError;
pub use model_error::ModelError;
pub use query_error::QueryError;
pub use strategy_error::StrategyError;
