use serde::{Deserialize, Serialize};

use crate::config::defaults;
use crate::errors::QueryError;

/// Per-call query parameters.
///
/// `batch_size` only affects strategies that run inference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryParams {
    pub n_query_samples: usize,
    pub n_mc_samples: usize,
    pub batch_size: Option<usize>,
}

impl Default for QueryParams {
    fn default() -> Self {
        Self {
            n_query_samples: defaults::DEFAULT_N_QUERY_SAMPLES,
            n_mc_samples: defaults::DEFAULT_N_MC_SAMPLES,
            batch_size: None,
        }
    }
}

impl QueryParams {
    pub fn with_n_query_samples(mut self, n_query_samples: usize) -> Self {
        self.n_query_samples = n_query_samples;
        self
    }

    pub fn with_n_mc_samples(mut self, n_mc_samples: usize) -> Self {
        self.n_mc_samples = n_mc_samples;
        self
    }

    pub fn with_batch_size(mut self, batch_size: Option<usize>) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// Reject zero counts.
    pub fn validate(&self) -> Result<(), QueryError> {
        let checks = [
            ("n_query_samples", Some(self.n_query_samples)),
            ("n_mc_samples", Some(self.n_mc_samples)),
            ("batch_size", self.batch_size),
        ];
        for (name, value) in checks {
            if value == Some(0) {
                return Err(QueryError::InvalidParameter {
                    name: name.to_string(),
                    value: 0,
                });
            }
        }
        Ok(())
    }
}
