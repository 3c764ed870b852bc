// enumerable/src/error.rs
use anyhow::Error as AnyhowError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EnumerableError {
  /// `reduce` has no initial accumulator to start from.
  #[error("Cannot reduce an empty sequence")]
  EmptySequence,

  #[error("Invalid worker count: {requested} (must be at least 1)")]
  InvalidWorkerCount { requested: usize },

  /// A user callback failed while processing the element at `index`.
  #[error("Callback failed for element at index {index}. Source: {source}")]
  Callback {
    index: usize,
    #[source]
    source: AnyhowError,
  },

  #[error("Error in user-provided callback. Source: {source}")]
  External {
    #[source]
    source: AnyhowError,
  },
}

impl From<AnyhowError> for EnumerableError {
  fn from(err: AnyhowError) -> Self {
    // Unwrap an EnumerableError that was smuggled through anyhow instead of nesting it.
    match err.downcast::<EnumerableError>() {
      Ok(inner) => inner,
      Err(err) => EnumerableError::External { source: err },
    }
  }
}

pub type EnumerableResult<T, E = EnumerableError> = std::result::Result<T, E>;
