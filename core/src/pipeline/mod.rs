// enumerable/src/pipeline/mod.rs

//! Defines the `Enumerable<T>` pipeline: construction and deferred chaining,
//! evaluation, and the eager query operators.

pub mod definition;
pub mod execution;
pub mod query;

// Re-export the main pipeline struct
pub use definition::Enumerable;
pub use query::transform;
