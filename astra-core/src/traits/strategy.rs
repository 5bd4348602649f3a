use crate::errors::AstraResult;
use crate::models::{AcquisitionSet, PoolIndices, QueryParams, SelectionResult};
use crate::traits::IModel;

/// Pool-based query strategy.
pub trait IStrategy: Send + Sync {
    /// Human-readable strategy name.
    fn name(&self) -> &str;

    /// The acquisitions this strategy ranks with.
    fn acquisitions(&self) -> &AcquisitionSet;

    /// Number of distinct labels in the context.
    fn n_classes(&self) -> usize;

    /// Select `params.n_query_samples` candidates per acquisition from `pool_indices`.
    ///
    /// Never mutates the context or the acquisition set. Fails without a
    /// partial result.
    fn query(
        &self,
        net: Option<&dyn IModel>,
        pool_indices: &PoolIndices,
        context_indices: Option<&PoolIndices>,
        params: &QueryParams,
    ) -> AstraResult<SelectionResult>;
}
