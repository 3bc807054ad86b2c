//! Event-mixing engine - categorization of events on a binned grid and
//! category-keyed pooling

pub mod axis;
pub mod categorizer;
pub mod error;
pub mod pool;
pub mod variables;

pub use axis::Axis;
pub use categorizer::{Categorizer, CategorizerBuilder};
pub use error::MixingError;
pub use pool::EventPools;
pub use variables::{Observables, UsedVariables, Variable, VariableRegistry};
