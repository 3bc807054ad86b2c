//! Error types for mixing configuration.
//!
//! Only setup-time problems are errors. Routine outcomes such as an event
//! falling outside the binning are reported as `None` by the categorizer.

use thiserror::Error;

use super::variables::Variable;

/// Errors raised while configuring a categorizer or its event pools.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MixingError {
    /// Fewer than two edges were supplied, so the axis has no usable bin.
    #[error("Variable '{variable}' needs at least 2 bin edges, got {count}")]
    TooFewEdges { variable: Variable, count: usize },

    /// An edge is NaN or infinite.
    #[error("Variable '{variable}' has a non-finite bin edge at position {index}")]
    NonFiniteEdge { variable: Variable, index: usize },

    /// Edge at `index` is not strictly greater than the one before it.
    #[error("Variable '{variable}' bin edges must be strictly ascending (violated at position {index})")]
    UnsortedEdges { variable: Variable, index: usize },

    /// The product of per-axis bin counts does not fit in `usize`.
    #[error("Number of categories overflows: the binning grid is too large")]
    TooManyCategories,

    /// Pools must keep at least one event per category.
    #[error("Mixing pool depth must be at least 1")]
    ZeroPoolDepth,

    /// A variable name did not match any known observable.
    #[error("Unknown mixing variable '{0}'")]
    UnknownVariable(String),
}
