//! Random baseline acquisition.

use astra_core::errors::AstraResult;
use astra_core::models::AcquisitionKind;
use astra_core::traits::IAcquisition;
use ndarray::{s, Array1, ArrayView3, Axis};

use crate::probability;

/// Scores each candidate by the MC mean of its first class column.
///
/// Paired with `RandomStrategy`, whose logits are uniform noise, the scores
/// carry no information about model confidence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RandomAcquisition;

impl IAcquisition for RandomAcquisition {
    fn kind(&self) -> AcquisitionKind {
        AcquisitionKind::Random
    }

    fn acquire_scores(&self, logits: ArrayView3<'_, f32>) -> AstraResult<Array1<f32>> {
        probability::ensure_scorable(&logits)?;
        let first_class = logits.slice(s![.., .., 0]);
        let n_mc_samples = logits.len_of(Axis(0)) as f32;
        Ok(first_class.sum_axis(Axis(0)) / n_mc_samples)
    }
}
