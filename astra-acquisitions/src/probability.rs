//! Shared helpers: shape checks, softmax, entropy.

use astra_core::errors::{AstraResult, QueryError};
use ndarray::{Array1, Array2, Array3, ArrayView1, ArrayView3, Axis};

/// Reject logits with an empty MC or class axis.
pub fn ensure_scorable(logits: &ArrayView3<'_, f32>) -> AstraResult<()> {
    let (n_mc_samples, _, n_classes) = logits.dim();
    if n_mc_samples == 0 || n_classes == 0 {
        return Err(QueryError::ScoreShape {
            expected: "(n_mc_samples >= 1, pool_size, n_classes >= 1)".to_string(),
            actual: format!("{:?}", logits.shape()),
        }
        .into());
    }
    Ok(())
}

/// Softmax over the class axis of every `(mc, candidate)` row.
pub fn softmax(logits: &ArrayView3<'_, f32>) -> Array3<f32> {
    let mut probs = logits.to_owned();
    for mut row in probs.lanes_mut(Axis(2)) {
        let max = row.fold(f32::NEG_INFINITY, |acc, &v| acc.max(v));
        row.mapv_inplace(|v| (v - max).exp());
        let sum = row.sum();
        row.mapv_inplace(|v| v / sum);
    }
    probs
}

/// Shannon entropy (nats) of one distribution; `0 · ln 0` counts as 0.
pub fn entropy(probs: ArrayView1<'_, f32>) -> f32 {
    -probs
        .iter()
        .filter(|&&p| p > 0.0)
        .map(|&p| p * p.ln())
        .sum::<f32>()
}

/// Entropy of each candidate's MC-averaged distribution: `(pool_size,)`.
pub fn predictive_entropy(probs: &Array3<f32>) -> Array1<f32> {
    let mean = mc_mean(probs);
    mean.rows().into_iter().map(entropy).collect()
}

/// Mean over MC samples of each candidate's per-sample entropy: `(pool_size,)`.
pub fn expected_entropy(probs: &Array3<f32>) -> Array1<f32> {
    let (n_mc_samples, pool_size, _) = probs.dim();
    let mut total = Array1::<f32>::zeros(pool_size);
    for sample in probs.outer_iter() {
        for (slot, row) in total.iter_mut().zip(sample.rows()) {
            *slot += entropy(row);
        }
    }
    total / n_mc_samples as f32
}

fn mc_mean(probs: &Array3<f32>) -> Array2<f32> {
    let n_mc_samples = probs.len_of(Axis(0)) as f32;
    probs.sum_axis(Axis(0)) / n_mc_samples
}
