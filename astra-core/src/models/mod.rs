//! Data model shared by every strategy.

pub mod acquisition_kind;
pub mod acquisition_set;
pub mod context;
pub mod pool_indices;
pub mod query_params;
pub mod selection_result;

pub use acquisition_kind::AcquisitionKind;
pub use acquisition_set::AcquisitionSet;
pub use context::Context;
pub use pool_indices::PoolIndices;
pub use query_params::QueryParams;
pub use selection_result::{Selection, SelectionResult};
