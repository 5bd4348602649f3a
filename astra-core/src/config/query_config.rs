use serde::{Deserialize, Serialize};

use super::defaults;
use crate::models::QueryParams;

/// Default parameters applied to strategy queries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    /// Number of candidates selected per acquisition.
    pub n_query_samples: usize,
    /// Number of stochastic forward passes per candidate.
    pub n_mc_samples: usize,
    /// Inference chunk size. `None` runs the whole pool at once.
    pub batch_size: Option<usize>,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            n_query_samples: defaults::DEFAULT_N_QUERY_SAMPLES,
            n_mc_samples: defaults::DEFAULT_N_MC_SAMPLES,
            batch_size: None,
        }
    }
}

impl From<&QueryConfig> for QueryParams {
    fn from(config: &QueryConfig) -> Self {
        Self {
            n_query_samples: config.n_query_samples,
            n_mc_samples: config.n_mc_samples,
            batch_size: config.batch_size,
        }
    }
}
