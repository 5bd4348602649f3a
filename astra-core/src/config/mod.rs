//! Configuration system for Astra.
//! TOML-based: environment overrides > config file > compiled defaults.

pub mod astra_config;
pub mod defaults;
pub mod logging_config;
pub mod query_config;
pub mod random_config;

pub use astra_config::AstraConfig;
pub use logging_config::LoggingConfig;
pub use query_config::QueryConfig;
pub use random_config::RandomConfig;
