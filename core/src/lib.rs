// src/lib.rs

//! Enumerable: lazy, chainable sequence pipelines for Rust.
//!
//! An `Enumerable<T>` wraps a fully materialized sequence and records
//! transformations as deferred stages:
//!  - `append`, `map`, `filter`, `reverse`.
//!  - Position-dependent `take`/`skip` (negative counts address the tail) and
//!    their predicate forms `take_while`/`skip_while`.
//!  - Eager query operators (`contains`, `any`, `all`, `reduce`, `for_each`,
//!    `to_list`) that evaluate pending stages before answering.
//!  - A type-changing `transform`, which evaluates its input immediately.
//!
//! Independently of the stage list, the `parallel` module runs per-element work
//! on a bounded pool of worker threads and reassembles results in their
//! original order.

pub mod core;
pub mod pipeline;
pub mod parallel;
pub mod error;

// --- Re-exports for the Public API ---

pub use crate::core::sequence::Sequence;
pub use crate::core::stage::{Mapper, Predicate, Stage};
pub use crate::core::work_item::WorkItem;

// The main pipeline type and the type-changing free functions
pub use crate::pipeline::definition::Enumerable;
pub use crate::pipeline::query::transform;
pub use crate::parallel::executor::transform_parallel;
pub use crate::parallel::workers::Workers;

pub use crate::error::{EnumerableError, EnumerableResult};

/*
    Core Workflow:
    1. Build a pipeline with `Enumerable::new(values)`.
    2. Chain deferred stages: `.map(..).filter(..).take(-2)`. Each call returns a new
       pipeline, so a prefix can be kept and branched.
    3. Read results with a query operator (`to_list`, `reduce`, ...) or call
       `.evaluate()` to materialize an intermediate pipeline for reuse.
    4. For expensive per-element work, call `map_parallel` / `for_each_parallel`
       with a `Workers` count (`Workers::default()` uses every available CPU).
*/
