// Single source of truth for all default values.

// --- Query ---
pub const DEFAULT_N_QUERY_SAMPLES: usize = 1;
pub const DEFAULT_N_MC_SAMPLES: usize = 10;

// --- Logging ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_LOG_JSON: bool = false;
