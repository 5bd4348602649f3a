//! Monte-Carlo inference over pool rows.

use astra_core::errors::{AstraResult, ModelError};
use astra_core::traits::IModel;
use ndarray::{s, Array3, ArrayView2, Axis};
use tracing::debug;

/// Run `n_mc_samples` stochastic forward passes over `inputs`, `batch_size`
/// rows at a time (all rows when `None`).
///
/// Returns `(n_mc_samples, inputs.nrows(), n_classes)` logits.
pub fn mc_logits(
    net: &dyn IModel,
    inputs: ArrayView2<'_, f32>,
    n_mc_samples: usize,
    batch_size: Option<usize>,
    n_classes: usize,
) -> AstraResult<Array3<f32>> {
    let pool_size = inputs.nrows();
    let chunk = batch_size.unwrap_or(pool_size).max(1);
    let mut logits = Array3::<f32>::zeros((n_mc_samples, pool_size, n_classes));

    for mut sample in logits.outer_iter_mut() {
        let mut start = 0;
        for batch in inputs.axis_chunks_iter(Axis(0), chunk) {
            let rows = batch.nrows();
            let output = net.forward(batch)?;
            if output.dim() != (rows, n_classes) {
                return Err(ModelError::OutputShape {
                    expected: format!("[{rows}, {n_classes}]"),
                    actual: format!("{:?}", output.shape()),
                }
                .into());
            }
            sample.slice_mut(s![start..start + rows, ..]).assign(&output);
            start += rows;
        }
    }

    debug!(n_mc_samples, pool_size, chunk, "mc inference complete");
    Ok(logits)
}
