// enumerable/src/pipeline/definition.rs

//! Contains the `Enumerable<T>` struct definition, its construction, and the
//! deferred chain methods that record stages.

use crate::core::sequence::Sequence;
use crate::core::stage::Stage;
use std::sync::Arc;

/// A lazy pipeline over a realized `Sequence<T>`.
///
/// Chain methods borrow the receiver and return a new pipeline with one more
/// pending stage, so a prefix can be reused by several branches:
///
/// ```
/// use enumerable::Enumerable;
///
/// let base = Enumerable::new(vec![1, 2, 3, 4]).map(|x| x * 10);
/// assert_eq!(base.take(2).to_list(), vec![10, 20]);
/// assert_eq!(base.skip(-1).to_list(), vec![10, 20, 30]);
/// ```
///
/// Nothing runs until `evaluate` (or any eager query operator) is called.
pub struct Enumerable<T> {
  /// Values as of the last evaluation (or construction).
  pub(crate) values: Sequence<T>,
  /// Pending stages, in registration order.
  pub(crate) stages: Vec<Stage<T>>,
}

impl<T> Enumerable<T> {
  /// Creates a pipeline with no pending stages.
  pub fn new(values: Vec<T>) -> Self {
    Self::from_sequence(Sequence::new(values))
  }

  pub fn from_sequence(values: Sequence<T>) -> Self {
    Self {
      values,
      stages: Vec::new(),
    }
  }

  /// Number of stages recorded since the last evaluation.
  pub fn pending_stages(&self) -> usize {
    self.stages.len()
  }

  pub fn is_evaluated(&self) -> bool {
    self.stages.is_empty()
  }
}

impl<T: Clone> Enumerable<T> {
  fn lazy(&self, stage: Stage<T>) -> Self {
    let mut stages = self.stages.clone();
    stages.push(stage);
    Self {
      values: self.values.clone(),
      stages,
    }
  }

  /// Appends `value` at the end.
  pub fn append(&self, value: T) -> Self {
    self.lazy(Stage::Append(value))
  }

  /// Replaces every element with `f(element)`, in order.
  pub fn map(&self, f: impl Fn(T) -> T + Send + Sync + 'static) -> Self {
    self.lazy(Stage::Map(Arc::new(f)))
  }

  /// Keeps the elements for which `pred` holds, preserving their relative order.
  pub fn filter(&self, pred: impl Fn(&T) -> bool + Send + Sync + 'static) -> Self {
    self.lazy(Stage::Filter(Arc::new(pred)))
  }

  pub fn reverse(&self) -> Self {
    self.lazy(Stage::Reverse)
  }

  /// Keeps the first `n` elements, or the last `|n|` when `n` is negative.
  /// Counts larger than the sequence keep everything.
  pub fn take(&self, n: isize) -> Self {
    self.lazy(Stage::Take(n))
  }

  /// Keeps the longest prefix whose elements all satisfy `pred`.
  pub fn take_while(&self, pred: impl Fn(&T) -> bool + Send + Sync + 'static) -> Self {
    self.lazy(Stage::TakeWhile(Arc::new(pred)))
  }

  /// Drops the first `n` elements, or the last `|n|` when `n` is negative.
  /// Counts larger than the sequence drop everything.
  pub fn skip(&self, n: isize) -> Self {
    self.lazy(Stage::Skip(n))
  }

  /// Drops the longest prefix whose elements all satisfy `pred`.
  pub fn skip_while(&self, pred: impl Fn(&T) -> bool + Send + Sync + 'static) -> Self {
    self.lazy(Stage::SkipWhile(Arc::new(pred)))
  }
}

impl<T: Clone> Clone for Enumerable<T> {
  fn clone(&self) -> Self {
    Self {
      values: self.values.clone(),
      stages: self.stages.clone(),
    }
  }
}

impl<T> Default for Enumerable<T> {
  fn default() -> Self {
    Self::new(Vec::new())
  }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Enumerable<T> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Enumerable")
      .field("values", &self.values)
      .field("pending_stages", &self.stages)
      .finish()
  }
}

impl<T> From<Vec<T>> for Enumerable<T> {
  fn from(values: Vec<T>) -> Self {
    Self::new(values)
  }
}

impl<T> From<Sequence<T>> for Enumerable<T> {
  fn from(values: Sequence<T>) -> Self {
    Self::from_sequence(values)
  }
}

impl<T> FromIterator<T> for Enumerable<T> {
  fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
    Self::new(iter.into_iter().collect())
  }
}
