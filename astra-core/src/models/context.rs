//! Labeled context a strategy is constructed with.

use std::collections::BTreeSet;

use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis};

use crate::errors::{QueryError, StrategyError};
use crate::models::PoolIndices;

/// Feature matrix (one row per sample) and matching labels.
///
/// Pool indices address rows of `inputs`.
#[derive(Debug, Clone)]
pub struct Context {
    inputs: Array2<f32>,
    outputs: Array1<i64>,
    n_classes: usize,
}

impl Context {
    pub fn new(inputs: Array2<f32>, outputs: Array1<i64>) -> Result<Self, StrategyError> {
        if inputs.nrows() != outputs.len() {
            return Err(StrategyError::ContextLengthMismatch {
                inputs: inputs.nrows(),
                outputs: outputs.len(),
            });
        }
        if outputs.is_empty() {
            return Err(StrategyError::EmptyContext);
        }

        let n_classes = outputs.iter().collect::<BTreeSet<_>>().len();
        Ok(Self {
            inputs,
            outputs,
            n_classes,
        })
    }

    pub fn inputs(&self) -> ArrayView2<'_, f32> {
        self.inputs.view()
    }

    pub fn outputs(&self) -> ArrayView1<'_, i64> {
        self.outputs.view()
    }

    /// Number of distinct labels in `outputs`.
    pub fn n_classes(&self) -> usize {
        self.n_classes
    }

    pub fn len(&self) -> usize {
        self.outputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outputs.is_empty()
    }

    /// Gather the input rows addressed by `indices`, in order.
    pub fn select_inputs(&self, indices: &PoolIndices) -> Result<Array2<f32>, QueryError> {
        let len = self.inputs.nrows();
        if let Some(&index) = indices.iter().find(|&&index| index >= len) {
            return Err(QueryError::IndexOutOfBounds { index, len });
        }
        Ok(self.inputs.select(Axis(0), indices.as_slice()))
    }
}
