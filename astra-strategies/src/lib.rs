//! # astra-strategies
//!
//! Pool-based query strategies.
//! Each strategy validates its acquisitions at construction, produces
//! `(n_mc_samples, pool_size, n_classes)` logits at query time, and ranks the
//! pool once per acquisition with a stable top-K.

pub mod base;
pub mod inference;
pub mod random;
pub mod selection;
pub mod uncertainty;

pub use base::StrategyBase;
pub use random::RandomStrategy;
pub use selection::{select_per_acquisition, top_k};
pub use uncertainty::UncertaintyStrategy;
