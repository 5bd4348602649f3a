/// Astra version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use crate::config::defaults::{DEFAULT_N_MC_SAMPLES, DEFAULT_N_QUERY_SAMPLES};

/// Environment variable holding the tracing filter.
pub const ENV_LOG: &str = "ASTRA_LOG";

/// Environment overrides applied by `AstraConfig::apply_env_overrides`.
pub const ENV_SEED: &str = "ASTRA_SEED";
pub const ENV_N_QUERY_SAMPLES: &str = "ASTRA_N_QUERY_SAMPLES";
pub const ENV_N_MC_SAMPLES: &str = "ASTRA_N_MC_SAMPLES";
pub const ENV_BATCH_SIZE: &str = "ASTRA_BATCH_SIZE";
pub const ENV_LOG_LEVEL: &str = "ASTRA_LOG_LEVEL";
