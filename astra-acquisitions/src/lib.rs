//! # astra-acquisitions
//!
//! Concrete acquisition functions. Each maps `(n_mc_samples, pool_size, n_classes)`
//! logits to one desirability score per pool candidate.

pub mod bald;
pub mod entropy;
pub mod probability;
pub mod random;

pub use bald::BaldAcquisition;
pub use entropy::EntropyAcquisition;
pub use random::RandomAcquisition;
