// enumerable/src/core/stage.rs

//! Defines the deferred operations a pipeline records, and how each one
//! rewrites a realized list of values.

use std::sync::Arc;

// Type aliases for the closures a stage captures.
// Arc keeps stages cheaply cloneable so a pipeline prefix can be shared by many branches.
pub type Mapper<T> = Arc<dyn Fn(T) -> T + Send + Sync + 'static>;
pub type Predicate<T> = Arc<dyn Fn(&T) -> bool + Send + Sync + 'static>;

/// A single deferred operation. Stages are immutable once recorded and are
/// replayed in registration order by `Enumerable::evaluate`.
pub enum Stage<T> {
  Append(T),
  Map(Mapper<T>),
  Filter(Predicate<T>),
  Reverse,
  /// Non-negative counts keep a prefix; negative counts keep a suffix.
  Take(isize),
  TakeWhile(Predicate<T>),
  /// Non-negative counts drop a prefix; negative counts drop a suffix.
  Skip(isize),
  SkipWhile(Predicate<T>),
}

impl<T> Stage<T> {
  pub fn name(&self) -> &'static str {
    match self {
      Stage::Append(_) => "append",
      Stage::Map(_) => "map",
      Stage::Filter(_) => "filter",
      Stage::Reverse => "reverse",
      Stage::Take(_) => "take",
      Stage::TakeWhile(_) => "take_while",
      Stage::Skip(_) => "skip",
      Stage::SkipWhile(_) => "skip_while",
    }
  }

  /// Applies this stage to `values`, producing the input of the next stage.
  pub fn apply(&self, mut values: Vec<T>) -> Vec<T>
  where
    T: Clone,
  {
    match self {
      Stage::Append(value) => {
        values.push(value.clone());
        values
      }
      Stage::Map(f) => values.into_iter().map(|v| f(v)).collect(),
      Stage::Filter(pred) => {
        // Stable in-place compaction; capacity is kept.
        values.retain(|v| pred(v));
        values
      }
      Stage::Reverse => values.into_iter().rev().collect(),
      Stage::Take(n) => {
        let len = values.len();
        let count = clamp_count(*n, len);
        if *n >= 0 {
          values.truncate(count);
        } else {
          values.drain(..len - count);
        }
        values
      }
      Stage::TakeWhile(pred) => {
        let end = values.iter().position(|v| !pred(v)).unwrap_or(values.len());
        values.truncate(end);
        values
      }
      Stage::Skip(n) => {
        let len = values.len();
        let count = clamp_count(*n, len);
        if *n >= 0 {
          values.drain(..count);
        } else {
          values.truncate(len - count);
        }
        values
      }
      Stage::SkipWhile(pred) => {
        let start = values.iter().position(|v| !pred(v)).unwrap_or(values.len());
        values.drain(..start);
        values
      }
    }
  }
}

/// Magnitude of a take/skip count, clamped to the sequence length.
fn clamp_count(n: isize, len: usize) -> usize {
  n.unsigned_abs().min(len)
}

impl<T: Clone> Clone for Stage<T> {
  fn clone(&self) -> Self {
    match self {
      Stage::Append(value) => Stage::Append(value.clone()),
      Stage::Map(f) => Stage::Map(Arc::clone(f)),
      Stage::Filter(pred) => Stage::Filter(Arc::clone(pred)),
      Stage::Reverse => Stage::Reverse,
      Stage::Take(n) => Stage::Take(*n),
      Stage::TakeWhile(pred) => Stage::TakeWhile(Arc::clone(pred)),
      Stage::Skip(n) => Stage::Skip(*n),
      Stage::SkipWhile(pred) => Stage::SkipWhile(Arc::clone(pred)),
    }
  }
}

// Closures don't implement Debug, so only the stage kind and its plain parameters are shown.
impl<T: std::fmt::Debug> std::fmt::Debug for Stage<T> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Stage::Append(value) => f.debug_tuple(self.name()).field(value).finish(),
      Stage::Take(n) | Stage::Skip(n) => f.debug_tuple(self.name()).field(n).finish(),
      _ => f.write_str(self.name()),
    }
  }
}
