use std::fmt::Debug;

use ndarray::{Array1, ArrayView3};

use crate::errors::AstraResult;
use crate::models::AcquisitionKind;

/// Stateless scoring policy.
pub trait IAcquisition: Send + Sync + Debug {
    /// Capability tag checked by strategies at construction.
    fn kind(&self) -> AcquisitionKind;

    /// Name used as the result key when no explicit name is given.
    fn name(&self) -> &str {
        self.kind().as_str()
    }

    /// Score `(n_mc_samples, pool_size, n_classes)` logits into `(pool_size,)`.
    /// Higher is more desirable to label.
    fn acquire_scores(&self, logits: ArrayView3<'_, f32>) -> AstraResult<Array1<f32>>;
}
