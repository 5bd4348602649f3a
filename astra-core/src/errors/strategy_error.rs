/// Strategy construction errors.
///
/// Raised eagerly; a strategy that fails construction is never handed out.
#[derive(Debug, thiserror::Error)]
pub enum StrategyError {
    #[error("acquisition '{name}' mismatch: expected {expected}, got {actual}")]
    AcquisitionMismatch {
        name: String,
        expected: String,
        actual: String,
    },

    #[error("duplicate acquisition name: {name}")]
    DuplicateAcquisition { name: String },

    #[error("at least one acquisition is required")]
    NoAcquisitions,

    #[error("context length mismatch: {inputs} inputs, {outputs} outputs")]
    ContextLengthMismatch { inputs: usize, outputs: usize },

    #[error("context has no labeled samples")]
    EmptyContext,
}
