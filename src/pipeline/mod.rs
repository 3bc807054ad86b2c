//! Pipeline module - loading, categorizing and pooling event tables

pub mod categorize;
pub mod config;
pub mod loader;
pub mod pools;

pub use categorize::*;
pub use config::*;
pub use loader::*;
pub use pools::*;
