//! State and validation shared by every concrete strategy.

use astra_core::errors::{AstraResult, QueryError};
use astra_core::models::{AcquisitionKind, AcquisitionSet, Context, PoolIndices, QueryParams};
use tracing::{debug, warn};

/// Acquisitions plus labeled context, validated against the kinds a strategy accepts.
///
/// Immutable after construction.
#[derive(Debug)]
pub struct StrategyBase {
    strategy: &'static str,
    acquisitions: AcquisitionSet,
    context: Context,
}

impl StrategyBase {
    /// Fails with `AcquisitionMismatch` if any acquisition's kind is not in `accepted`.
    pub fn new(
        strategy: &'static str,
        acquisitions: AcquisitionSet,
        context: Context,
        accepted: &[AcquisitionKind],
    ) -> AstraResult<Self> {
        if let Err(e) = acquisitions.ensure_kinds(accepted) {
            warn!(strategy, error = %e, "rejected acquisition set");
            return Err(e.into());
        }

        debug!(
            strategy,
            n_classes = context.n_classes(),
            acquisitions = ?acquisitions.names().collect::<Vec<_>>(),
            "strategy constructed"
        );
        Ok(Self {
            strategy,
            acquisitions,
            context,
        })
    }

    pub fn name(&self) -> &'static str {
        self.strategy
    }

    pub fn acquisitions(&self) -> &AcquisitionSet {
        &self.acquisitions
    }

    pub fn context(&self) -> &Context {
        &self.context
    }

    pub fn n_classes(&self) -> usize {
        self.context.n_classes()
    }

    /// Checks every strategy runs before producing logits.
    pub fn check_query(
        &self,
        pool_indices: &PoolIndices,
        params: &QueryParams,
    ) -> Result<(), QueryError> {
        params.validate()?;
        if pool_indices.is_empty() {
            return Err(QueryError::ContractViolation {
                reason: "pool_indices must not be empty".to_string(),
            });
        }
        if params.n_query_samples > pool_indices.len() {
            return Err(QueryError::OverRequest {
                requested: params.n_query_samples,
                available: pool_indices.len(),
            });
        }
        if let Some(index) = pool_indices.first_duplicate() {
            return Err(QueryError::ContractViolation {
                reason: format!("pool_indices contains duplicate index {index}"),
            });
        }
        self.check_logits_shape(params.n_mc_samples, pool_indices.len())
    }

    /// The `(n_mc_samples, pool_size, n_classes)` logits tensor must be allocatable.
    fn check_logits_shape(&self, n_mc_samples: usize, pool_size: usize) -> Result<(), QueryError> {
        let n_classes = self.n_classes();
        let fits = n_mc_samples
            .checked_mul(pool_size)
            .and_then(|n| n.checked_mul(n_classes))
            .is_some_and(|n| n <= isize::MAX as usize);
        if !fits {
            return Err(QueryError::ShapeTooLarge {
                shape: format!("[{n_mc_samples}, {pool_size}, {n_classes}]"),
            });
        }
        Ok(())
    }
}
