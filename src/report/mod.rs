//! Report module - summarizing categorization results

pub mod occupancy_export;
pub mod summary;

pub use occupancy_export::*;
pub use summary::*;
