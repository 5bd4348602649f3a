/// Errors surfaced by `IModel` implementations during inference.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("forward pass failed: {reason}")]
    ForwardFailed { reason: String },

    #[error("model output shape mismatch: expected {expected}, got {actual}")]
    OutputShape { expected: String, actual: String },
}
