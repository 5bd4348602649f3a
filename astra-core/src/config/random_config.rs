use serde::{Deserialize, Serialize};

/// Random strategy configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RandomConfig {
    /// Seed for the strategy-owned generator. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}
