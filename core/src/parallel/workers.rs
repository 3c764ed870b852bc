// enumerable/src/parallel/workers.rs

//! Worker-count configuration for the parallel executor.

use crate::error::{EnumerableError, EnumerableResult};
use std::num::NonZeroUsize;

/// Number of worker threads a parallel operation may use.
///
/// Zero is rejected at construction. `Workers::default()` uses the host's
/// available parallelism.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Workers(NonZeroUsize);

impl Workers {
  pub fn new(count: usize) -> EnumerableResult<Self> {
    NonZeroUsize::new(count)
      .map(Self)
      .ok_or(EnumerableError::InvalidWorkerCount { requested: count })
  }

  pub fn single() -> Self {
    Self(NonZeroUsize::MIN)
  }

  /// One worker per logical CPU reported by the host.
  pub fn available() -> Self {
    NonZeroUsize::new(num_cpus::get()).map(Self).unwrap_or_else(Self::single)
  }

  pub fn get(self) -> usize {
    self.0.get()
  }
}

impl Default for Workers {
  fn default() -> Self {
    Self::available()
  }
}

impl TryFrom<usize> for Workers {
  type Error = EnumerableError;

  fn try_from(count: usize) -> EnumerableResult<Self> {
    Self::new(count)
  }
}

impl From<NonZeroUsize> for Workers {
  fn from(count: NonZeroUsize) -> Self {
    Self(count)
  }
}
