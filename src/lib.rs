//! evmix: Event Categorization Library
//!
//! Assigns events to cells of a multi-dimensional grid of per-observable bins
//! and pools them by cell, the bookkeeping behind event mixing.

pub mod cli;
pub mod mixing;
pub mod pipeline;
pub mod report;
pub mod utils;
