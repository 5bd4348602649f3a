//! # astra-core
//!
//! Foundation crate for Astra active-learning query strategies.
//! Defines the acquisition/strategy/model traits, the data model shared by
//! every strategy, errors, config, constants and tracing setup.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod tracing_setup;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::AstraConfig;
pub use errors::{AstraError, AstraResult};
pub use models::{
    AcquisitionKind, AcquisitionSet, Context, PoolIndices, QueryParams, SelectionResult,
};
pub use traits::{IAcquisition, IModel, IStrategy};
