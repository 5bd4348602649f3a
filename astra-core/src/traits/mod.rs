//! Seams between strategies, acquisitions and external models.

pub mod acquisition;
pub mod model;
pub mod strategy;

pub use acquisition::IAcquisition;
pub use model::IModel;
pub use strategy::IStrategy;
