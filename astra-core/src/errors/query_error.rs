/// Errors raised by `IStrategy::query` and the selection helpers it uses.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error("contract violation: {reason}")]
    ContractViolation { reason: String },

    #[error("cannot select {requested} candidates from a pool of {available}")]
    OverRequest { requested: usize, available: usize },

    #[error("invalid parameter {name} = {value}: must be at least 1")]
    InvalidParameter { name: String, value: usize },

    #[error("logits shape {shape} exceeds the addressable element count")]
    ShapeTooLarge { shape: String },

    #[error("score shape mismatch: expected {expected}, got {actual}")]
    ScoreShape { expected: String, actual: String },

    #[error("non-finite score at pool position {position}")]
    NonFiniteScore { position: usize },

    #[error("pool index {index} out of bounds for {len} samples")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("strategy {strategy} requires a model")]
    ModelRequired { strategy: String },

    #[error("random source unavailable: {reason}")]
    RngPoisoned { reason: String },
}
