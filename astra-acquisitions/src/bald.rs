//! BALD (Bayesian Active Learning by Disagreement).

use astra_core::errors::AstraResult;
use astra_core::models::AcquisitionKind;
use astra_core::traits::IAcquisition;
use ndarray::{Array1, ArrayView3};

use crate::probability;

/// Mutual information between the prediction and the model parameters:
/// predictive entropy minus expected per-sample entropy.
///
/// High when MC samples are individually confident but disagree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BaldAcquisition;

impl IAcquisition for BaldAcquisition {
    fn kind(&self) -> AcquisitionKind {
        AcquisitionKind::Bald
    }

    fn acquire_scores(&self, logits: ArrayView3<'_, f32>) -> AstraResult<Array1<f32>> {
        probability::ensure_scorable(&logits)?;
        let probs = probability::softmax(&logits);
        let predictive = probability::predictive_entropy(&probs);
        let expected = probability::expected_entropy(&probs);
        // Float rounding can push the difference slightly below zero.
        Ok((predictive - expected).mapv(|v| v.max(0.0)))
    }
}
