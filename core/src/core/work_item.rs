// enumerable/src/core/work_item.rs

/// A value paired with its position in the source sequence.
///
/// The parallel executor sends these through its job and result channels; `index`
/// is what puts each result back in its original slot after workers finish out of order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem<T> {
  pub value: T,
  pub index: usize,
}

impl<T> WorkItem<T> {
  pub fn new(value: T, index: usize) -> Self {
    Self { value, index }
  }

  /// Replaces the value, keeping the original index.
  pub fn map<U>(self, f: impl FnOnce(T) -> U) -> WorkItem<U> {
    WorkItem {
      value: f(self.value),
      index: self.index,
    }
  }
}
