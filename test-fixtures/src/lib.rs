//! Shared fixtures for Astra strategy tests: labeled contexts, deterministic
//! models, and acquisitions with preset scores.

use std::sync::atomic::{AtomicUsize, Ordering};

use astra_core::errors::{AstraResult, ModelError};
use astra_core::models::{AcquisitionKind, Context};
use astra_core::traits::{IAcquisition, IModel};
use ndarray::{Array1, Array2, ArrayView2, ArrayView3};

/// `n` samples with a single feature equal to the row index, labeled
/// round-robin over `n_classes`.
///
/// # Panics
/// Panics if `n == 0` or `n_classes == 0`.
pub fn labeled_context(n: usize, n_classes: usize) -> Context {
    assert!(n > 0 && n_classes > 0, "fixture context needs samples and classes");
    let inputs = Array2::from_shape_fn((n, 1), |(row, _)| row as f32);
    let outputs = Array1::from_shape_fn(n, |row| (row % n_classes) as i64);
    Context::new(inputs, outputs).expect("fixture context is well-formed")
}

/// The ten two-class samples used throughout the strategy scenarios.
pub fn two_class_context() -> Context {
    labeled_context(10, 2)
}

/// Deterministic model: logits are a fixed function of the single input
/// feature, identical on every pass. Counts forward calls.
#[derive(Debug)]
pub struct StubModel {
    n_classes: usize,
    calls: AtomicUsize,
}

impl StubModel {
    pub fn new(n_classes: usize) -> Self {
        Self {
            n_classes,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl IModel for StubModel {
    /// Rows whose feature is divisible by 3 get flat logits (maximally
    /// uncertain); every other row is confidently class 0.
    fn forward(&self, batch: ArrayView2<'_, f32>) -> AstraResult<Array2<f32>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(Array2::from_shape_fn(
            (batch.nrows(), self.n_classes),
            |(row, class)| {
                let feature = batch[[row, 0]] as usize;
                if feature % 3 == 0 || class != 0 {
                    0.0
                } else {
                    10.0
                }
            },
        ))
    }
}

/// Model that always fails its forward pass.
#[derive(Debug, Default)]
pub struct FailingModel;

impl IModel for FailingModel {
    fn forward(&self, _batch: ArrayView2<'_, f32>) -> AstraResult<Array2<f32>> {
        Err(ModelError::ForwardFailed {
            reason: "fixture model is offline".to_string(),
        }
        .into())
    }
}

/// Model returning the wrong number of classes.
#[derive(Debug, Default)]
pub struct WrongShapeModel;

impl IModel for WrongShapeModel {
    fn forward(&self, batch: ArrayView2<'_, f32>) -> AstraResult<Array2<f32>> {
        Ok(Array2::zeros((batch.nrows(), 7)))
    }
}

/// Acquisition returning preset scores regardless of logits, tagged with any kind.
#[derive(Debug, Clone)]
pub struct FixedScoreAcquisition {
    kind: AcquisitionKind,
    scores: Vec<f32>,
}

impl FixedScoreAcquisition {
    pub fn new(kind: AcquisitionKind, scores: Vec<f32>) -> Self {
        Self { kind, scores }
    }
}

impl IAcquisition for FixedScoreAcquisition {
    fn kind(&self) -> AcquisitionKind {
        self.kind
    }

    fn acquire_scores(&self, _logits: ArrayView3<'_, f32>) -> AstraResult<Array1<f32>> {
        Ok(Array1::from(self.scores.clone()))
    }
}
