//! Predictive-entropy acquisition.

use astra_core::errors::AstraResult;
use astra_core::models::AcquisitionKind;
use astra_core::traits::IAcquisition;
use ndarray::{Array1, ArrayView3};

use crate::probability;

/// Entropy of the MC-averaged softmax distribution. Uncertain candidates score high.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EntropyAcquisition;

impl IAcquisition for EntropyAcquisition {
    fn kind(&self) -> AcquisitionKind {
        AcquisitionKind::Entropy
    }

    fn acquire_scores(&self, logits: ArrayView3<'_, f32>) -> AstraResult<Array1<f32>> {
        probability::ensure_scorable(&logits)?;
        let probs = probability::softmax(&logits);
        Ok(probability::predictive_entropy(&probs))
    }
}
