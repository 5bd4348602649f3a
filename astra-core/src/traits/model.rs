use ndarray::{Array2, ArrayView2};

use crate::errors::AstraResult;

/// Trained classifier consumed by model-based strategies.
pub trait IModel: Send + Sync {
    /// One stochastic forward pass: `(batch, features)` → `(batch, n_classes)` logits.
    ///
    /// Stochastic layers (e.g. dropout) stay active so repeated calls yield
    /// Monte-Carlo samples.
    fn forward(&self, batch: ArrayView2<'_, f32>) -> AstraResult<Array2<f32>>;
}
