// enumerable/src/core/sequence.rs

//! Defines `Sequence<T>`, the ordered, fully materialized container every
//! pipeline and parallel operation works on.

use std::sync::Arc;

/// An ordered, finite collection of `T`.
///
/// The backing storage is shared between clones. Nothing in this crate mutates
/// a shared backing list: operations that change the values build a new one,
/// so two pipelines cloned from the same prefix never observe each other.
pub struct Sequence<T> {
  values: Arc<Vec<T>>,
}

impl<T> Sequence<T> {
  pub fn new(values: Vec<T>) -> Self {
    Self {
      values: Arc::new(values),
    }
  }

  /// Returns the ordered values.
  pub fn get(&self) -> &[T] {
    &self.values
  }

  /// Returns a container holding `values`; the receiver is left untouched.
  pub fn set(&self, values: Vec<T>) -> Self {
    Self::new(values)
  }

  pub fn len(&self) -> usize {
    self.values.len()
  }

  pub fn is_empty(&self) -> bool {
    self.values.is_empty()
  }
}

impl<T: Clone> Sequence<T> {
  /// Returns a newly allocated container with the element order inverted.
  pub fn reverse(&self) -> Self {
    Self::new(self.values.iter().rev().cloned().collect())
  }

  /// Takes the values out, cloning only if the storage is still shared.
  pub fn into_vec(self) -> Vec<T> {
    Arc::unwrap_or_clone(self.values)
  }
}

impl<T> Clone for Sequence<T> {
  fn clone(&self) -> Self {
    Self {
      values: Arc::clone(&self.values),
    }
  }
}

impl<T> Default for Sequence<T> {
  fn default() -> Self {
    Self::new(Vec::new())
  }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Sequence<T> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_list().entries(self.values.iter()).finish()
  }
}

impl<T: PartialEq> PartialEq for Sequence<T> {
  fn eq(&self, other: &Self) -> bool {
    self.values == other.values
  }
}

impl<T> From<Vec<T>> for Sequence<T> {
  fn from(values: Vec<T>) -> Self {
    Self::new(values)
  }
}

impl<T> FromIterator<T> for Sequence<T> {
  fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
    Self::new(iter.into_iter().collect())
  }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
  type Item = &'a T;
  type IntoIter = std::slice::Iter<'a, T>;

  fn into_iter(self) -> Self::IntoIter {
    self.values.iter()
  }
}
