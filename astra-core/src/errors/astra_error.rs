use super::{ConfigError, ModelError, QueryError, StrategyError};

/// Top-level error for every Astra operation.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum AstraError {
    #[error("strategy error: {0}")]
    Strategy(#[from] StrategyError),

    #[error("query error: {0}")]
    Query(#[from] QueryError),

    #[error("model error: {0}")]
    Model(#[from] ModelError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type AstraResult<T> = Result<T, AstraError>;
