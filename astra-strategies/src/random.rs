//! Random baseline strategy.

use std::sync::Mutex;

use astra_core::config::AstraConfig;
use astra_core::errors::{AstraResult, QueryError};
use astra_core::models::{
    AcquisitionKind, AcquisitionSet, Context, PoolIndices, QueryParams, SelectionResult,
};
use astra_core::query_span;
use astra_core::traits::{IAcquisition, IModel, IStrategy};
use ndarray::Array3;
use ndarray_rand::rand_distr::Uniform;
use ndarray_rand::RandomExt;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use crate::base::StrategyBase;
use crate::selection;

/// Ranks the pool on uniform noise instead of model output.
///
/// Only `Random` acquisitions are accepted. The generator is owned by the
/// strategy, so a seeded strategy replays the same selections.
#[derive(Debug)]
pub struct RandomStrategy {
    base: StrategyBase,
    rng: Mutex<StdRng>,
}

impl RandomStrategy {
    pub const NAME: &'static str = "random";
    pub const ACCEPTS: &'static [AcquisitionKind] = &[AcquisitionKind::Random];

    /// Construct with a generator seeded from OS entropy.
    pub fn new<I>(acquisitions: I, context: Context) -> AstraResult<Self>
    where
        I: IntoIterator<Item = Box<dyn IAcquisition>>,
    {
        Self::with_rng(acquisitions, context, StdRng::from_entropy())
    }

    /// Construct with a reproducible generator.
    pub fn with_seed<I>(acquisitions: I, context: Context, seed: u64) -> AstraResult<Self>
    where
        I: IntoIterator<Item = Box<dyn IAcquisition>>,
    {
        Self::with_rng(acquisitions, context, StdRng::seed_from_u64(seed))
    }

    pub fn with_rng<I>(acquisitions: I, context: Context, rng: StdRng) -> AstraResult<Self>
    where
        I: IntoIterator<Item = Box<dyn IAcquisition>>,
    {
        let acquisitions = AcquisitionSet::from_sequence(acquisitions)?;
        Self::from_set(acquisitions, context, rng)
    }

    /// Construct with the seed from `config.random.seed`, if any.
    pub fn from_config<I>(
        acquisitions: I,
        context: Context,
        config: &AstraConfig,
    ) -> AstraResult<Self>
    where
        I: IntoIterator<Item = Box<dyn IAcquisition>>,
    {
        let rng = match config.random.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(acquisitions, context, rng)
    }

    pub fn from_set(
        acquisitions: AcquisitionSet,
        context: Context,
        rng: StdRng,
    ) -> AstraResult<Self> {
        let base = StrategyBase::new(Self::NAME, acquisitions, context, Self::ACCEPTS)?;
        Ok(Self {
            base,
            rng: Mutex::new(rng),
        })
    }

    pub fn context(&self) -> &Context {
        self.base.context()
    }

    /// Uniform `[0, 1)` stand-in for `(n_mc_samples, pool_size, n_classes)` model logits.
    fn sample_logits(
        &self,
        n_mc_samples: usize,
        pool_size: usize,
    ) -> Result<Array3<f32>, QueryError> {
        let mut rng = self.rng.lock().map_err(|e| QueryError::RngPoisoned {
            reason: format!("rng lock poisoned: {e}"),
        })?;
        Ok(Array3::random_using(
            (n_mc_samples, pool_size, self.base.n_classes()),
            Uniform::new(0.0f32, 1.0),
            &mut *rng,
        ))
    }
}

impl IStrategy for RandomStrategy {
    fn name(&self) -> &str {
        self.base.name()
    }

    fn acquisitions(&self) -> &AcquisitionSet {
        self.base.acquisitions()
    }

    fn n_classes(&self) -> usize {
        self.base.n_classes()
    }

    /// Random query.
    ///
    /// `net`, `context_indices` and `params.batch_size` are accepted for
    /// call-site parity with model-based strategies and are never read.
    /// `params.n_mc_samples` only sets the depth of the noise tensor.
    fn query(
        &self,
        _net: Option<&dyn IModel>,
        pool_indices: &PoolIndices,
        _context_indices: Option<&PoolIndices>,
        params: &QueryParams,
    ) -> AstraResult<SelectionResult> {
        let span = query_span!(self.base.name(), pool_indices.len(), params.n_query_samples);
        let _guard = span.enter();

        self.base.check_query(pool_indices, params)?;
        let logits = self.sample_logits(params.n_mc_samples, pool_indices.len())?;
        debug!(shape = ?logits.shape(), "sampled uniform logits");

        selection::select_per_acquisition(
            self.base.acquisitions(),
            logits.view(),
            pool_indices,
            params.n_query_samples,
        )
    }
}
