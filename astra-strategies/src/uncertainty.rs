//! Model-based strategy: MC inference, then entropy or BALD ranking.

use astra_core::errors::{AstraResult, QueryError};
use astra_core::models::{
    AcquisitionKind, AcquisitionSet, Context, PoolIndices, QueryParams, SelectionResult,
};
use astra_core::query_span;
use astra_core::traits::{IAcquisition, IModel, IStrategy};

use crate::base::StrategyBase;
use crate::{inference, selection};

/// Ranks pool candidates by uncertainty of a stochastic model.
///
/// Pool indices address rows of the context inputs.
#[derive(Debug)]
pub struct UncertaintyStrategy {
    base: StrategyBase,
}

impl UncertaintyStrategy {
    pub const NAME: &'static str = "uncertainty";
    pub const ACCEPTS: &'static [AcquisitionKind] =
        &[AcquisitionKind::Entropy, AcquisitionKind::Bald];

    pub fn new<I>(acquisitions: I, context: Context) -> AstraResult<Self>
    where
        I: IntoIterator<Item = Box<dyn IAcquisition>>,
    {
        Self::from_set(AcquisitionSet::from_sequence(acquisitions)?, context)
    }

    pub fn from_set(acquisitions: AcquisitionSet, context: Context) -> AstraResult<Self> {
        let base = StrategyBase::new(Self::NAME, acquisitions, context, Self::ACCEPTS)?;
        Ok(Self { base })
    }

    pub fn context(&self) -> &Context {
        self.base.context()
    }
}

impl IStrategy for UncertaintyStrategy {
    fn name(&self) -> &str {
        self.base.name()
    }

    fn acquisitions(&self) -> &AcquisitionSet {
        self.base.acquisitions()
    }

    fn n_classes(&self) -> usize {
        self.base.n_classes()
    }

    /// `net` is required. `context_indices` is accepted and ignored.
    fn query(
        &self,
        net: Option<&dyn IModel>,
        pool_indices: &PoolIndices,
        _context_indices: Option<&PoolIndices>,
        params: &QueryParams,
    ) -> AstraResult<SelectionResult> {
        let span = query_span!(self.base.name(), pool_indices.len(), params.n_query_samples);
        let _guard = span.enter();

        let net = net.ok_or_else(|| QueryError::ModelRequired {
            strategy: self.base.name().to_string(),
        })?;
        self.base.check_query(pool_indices, params)?;

        let inputs = self.base.context().select_inputs(pool_indices)?;
        let logits = inference::mc_logits(
            net,
            inputs.view(),
            params.n_mc_samples,
            params.batch_size,
            self.base.n_classes(),
        )?;

        selection::select_per_acquisition(
            self.base.acquisitions(),
            logits.view(),
            pool_indices,
            params.n_query_samples,
        )
    }
}
