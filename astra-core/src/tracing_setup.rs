//! Tracing initialization and span definitions.
//! `tracing` crate with `EnvFilter`; `ASTRA_LOG` overrides the configured level.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::LoggingConfig;
use crate::constants;

static INIT: Once = Once::new();

/// Initialize the tracing subscriber with default logging settings.
///
/// Idempotent: only the first call installs a subscriber.
pub fn init_tracing() {
    init_tracing_with_config(&LoggingConfig::default());
}

/// Initialize the tracing subscriber from a logging config.
///
/// `ASTRA_LOG` takes precedence over `config.level`, e.g.
/// `ASTRA_LOG=astra_strategies=debug,astra_core=info`.
pub fn init_tracing_with_config(config: &LoggingConfig) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(constants::ENV_LOG)
            .unwrap_or_else(|_| EnvFilter::new(&config.level));
        install(filter, config.json);
    });
}

/// Initialize tracing with a custom filter string (for testing or embedding).
pub fn init_tracing_with_filter(filter: &str) {
    INIT.call_once(|| install(EnvFilter::new(filter), false));
}

fn install(filter: EnvFilter, json: bool) {
    let registry = tracing_subscriber::registry().with(filter);
    // A subscriber installed elsewhere (e.g. by the host application) wins.
    let _ = if json {
        registry
            .with(fmt::layer().json().with_target(true).with_thread_ids(true))
            .try_init()
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .try_init()
    };
}

/// Create a query span named [`names::QUERY`].
#[macro_export]
macro_rules! query_span {
    ($strategy:expr, $pool_size:expr, $n_query_samples:expr) => {
        tracing::debug_span!(
            $crate::tracing_setup::names::QUERY,
            strategy = %$strategy,
            pool_size = $pool_size,
            n_query_samples = $n_query_samples
        )
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const QUERY: &str = "astra.query";
}
