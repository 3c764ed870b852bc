// enumerable/src/parallel/mod.rs

//! Order-preserving worker pool. Every operation here is eager and works on a
//! realized sequence; none of it records pipeline stages.

pub mod executor;
pub mod workers;

pub use executor::transform_parallel;
pub use workers::Workers;
