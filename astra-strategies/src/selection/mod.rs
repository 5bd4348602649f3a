//! Ranking: scores → top-K pool positions → pool indices.

pub mod top_k;

pub use top_k::top_k;

use astra_core::errors::{AstraResult, QueryError};
use astra_core::models::{AcquisitionSet, PoolIndices, SelectionResult};
use ndarray::ArrayView3;
use tracing::trace;

/// Score `logits` with every acquisition and keep the best `k` pool indices of each.
///
/// Acquisitions are visited in insertion order, so the result keys follow it.
pub fn select_per_acquisition(
    acquisitions: &AcquisitionSet,
    logits: ArrayView3<'_, f32>,
    pool_indices: &PoolIndices,
    k: usize,
) -> AstraResult<SelectionResult> {
    let mut result = SelectionResult::new();
    for (name, acquisition) in acquisitions.iter() {
        let scores = acquisition.acquire_scores(logits.view())?;
        if scores.len() != pool_indices.len() {
            return Err(QueryError::ScoreShape {
                expected: format!("[{}]", pool_indices.len()),
                actual: format!("{:?}", scores.shape()),
            }
            .into());
        }

        let positions = top_k(scores.view(), k)?;
        let selected = pool_indices.gather(&positions)?;
        trace!(acquisition = name, ?selected, "selected candidates");
        result.insert(name, selected);
    }
    Ok(result)
}
