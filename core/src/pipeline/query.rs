// enumerable/src/pipeline/query.rs

//! Eager query operators. Every operator here evaluates the pending stages
//! first and never records a stage of its own.

use crate::error::{EnumerableError, EnumerableResult};
use crate::pipeline::definition::Enumerable;
use tracing::{event, Level};

impl<T: Clone> Enumerable<T> {
  /// Returns `true` if any element equals `value`.
  pub fn contains(&self, value: &T) -> bool
  where
    T: PartialEq,
  {
    self.to_sequence().get().contains(value)
  }

  pub fn any(&self, pred: impl Fn(&T) -> bool) -> bool {
    self.to_sequence().get().iter().any(pred)
  }

  /// Returns `true` if every element satisfies `pred` (vacuously true when empty).
  pub fn all(&self, pred: impl Fn(&T) -> bool) -> bool {
    self.to_sequence().get().iter().all(pred)
  }

  /// Left-folds the elements, seeding the accumulator with the first one.
  ///
  /// Returns `EnumerableError::EmptySequence` when there is nothing to seed with.
  pub fn reduce(&self, f: impl Fn(T, T) -> T) -> EnumerableResult<T> {
    let values = self.to_sequence().into_vec();
    values.into_iter().reduce(f).ok_or_else(|| {
      event!(Level::ERROR, element_type = %std::any::type_name::<T>(), "reduce called on an empty sequence.");
      EnumerableError::EmptySequence
    })
  }

  /// Calls `f` once per element, in order, on the calling thread.
  pub fn for_each(&self, f: impl FnMut(T)) {
    self.to_sequence().into_vec().into_iter().for_each(f);
  }

  /// Evaluates and returns the realized values.
  pub fn to_list(&self) -> Vec<T> {
    self.to_sequence().into_vec()
  }
}

/// Maps `source` into a pipeline of another element type.
///
/// Stages are monomorphic in `T`, so a type-changing step can't be queued behind
/// the source's pending stages. The source is evaluated immediately instead and
/// the returned pipeline is already evaluated.
pub fn transform<T, U>(source: &Enumerable<T>, f: impl Fn(T) -> U) -> Enumerable<U>
where
  T: Clone,
{
  let values: Vec<U> = source.to_list().into_iter().map(f).collect();
  event!(Level::DEBUG, output_len = values.len(), target_type = %std::any::type_name::<U>(), "Transform applied eagerly.");
  Enumerable::new(values)
}
