// enumerable/src/parallel/executor.rs

//! The bounded worker pool behind `for_each_parallel`, `map_parallel`,
//! `try_map_parallel` and `transform_parallel`.
//!
//! Every element is tagged with its index and queued on a bounded job channel.
//! A fixed pool of scoped threads drains the queue. For the mapping variants,
//! workers send index-tagged results to a results channel, and the calling
//! thread, the only writer of the output, drops each result into its
//! preallocated slot. Completion order therefore never affects output order.

use crate::core::sequence::Sequence;
use crate::core::work_item::WorkItem;
use crate::error::{EnumerableError, EnumerableResult};
use crate::parallel::workers::Workers;
use crate::pipeline::definition::Enumerable;
use crossbeam_channel::{bounded, Receiver, Sender};
use std::panic;
use std::thread::{self, ScopedJoinHandle};
use tracing::{event, instrument, Level};

impl<T: Clone + Send> Sequence<T> {
  /// Applies `f` to every element on a pool of `workers` threads.
  ///
  /// Blocks until `f` has run exactly once for every element. The order in which
  /// elements are visited is unspecified. A panic in `f` is re-raised here once
  /// every worker has stopped.
  #[instrument(
        name = "Sequence::for_each_parallel",
        skip_all,
        fields(len = self.len(), workers = workers.get())
    )]
  pub fn for_each_parallel<F>(&self, f: F, workers: Workers)
  where
    F: Fn(T) + Sync,
  {
    run_unordered(self.get().to_vec(), workers, &f);
  }

  /// Applies `f` to every element on a pool of `workers` threads; slot `i` of
  /// the result holds `f(self[i])` no matter which worker finished first.
  #[instrument(
        name = "Sequence::map_parallel",
        skip_all,
        fields(len = self.len(), workers = workers.get())
    )]
  pub fn map_parallel<F>(&self, f: F, workers: Workers) -> Sequence<T>
  where
    F: Fn(T) -> T + Sync,
  {
    Sequence::new(run_ordered(self.get().to_vec(), workers, &f))
  }

  /// Like `map_parallel`, for callbacks that can fail.
  ///
  /// In-flight work is not cancelled: every element is still processed. If any
  /// callback failed, no partial result is returned; the error reported is the
  /// one for the lowest failing index.
  #[instrument(
        name = "Sequence::try_map_parallel",
        skip_all,
        fields(len = self.len(), workers = workers.get()),
        err(Display)
    )]
  pub fn try_map_parallel<F>(&self, f: F, workers: Workers) -> EnumerableResult<Sequence<T>>
  where
    F: Fn(T) -> anyhow::Result<T> + Sync,
  {
    let results = run_ordered(self.get().to_vec(), workers, &f);

    let mut values = Vec::with_capacity(results.len());
    for (index, result) in results.into_iter().enumerate() {
      match result {
        Ok(value) => values.push(value),
        Err(source) => {
          event!(Level::ERROR, index, error = %source, "Parallel callback failed.");
          return Err(EnumerableError::Callback { index, source });
        }
      }
    }
    Ok(Sequence::new(values))
  }
}

impl<T: Clone + Send> Enumerable<T> {
  /// Evaluates pending stages, then runs `Sequence::for_each_parallel` on the result.
  pub fn for_each_parallel<F>(&self, f: F, workers: Workers)
  where
    F: Fn(T) + Sync,
  {
    self.to_sequence().for_each_parallel(f, workers);
  }

  /// Evaluates pending stages, then maps the result in parallel.
  /// The returned pipeline is already evaluated.
  pub fn map_parallel<F>(&self, f: F, workers: Workers) -> Enumerable<T>
  where
    F: Fn(T) -> T + Sync,
  {
    Enumerable::from_sequence(self.to_sequence().map_parallel(f, workers))
  }
}

/// Parallel counterpart of `transform`: maps `source` into another element type
/// on a pool of `workers` threads, preserving order. Evaluates `source` first.
#[instrument(
    name = "transform_parallel",
    skip_all,
    fields(
        source_type = %std::any::type_name::<T>(),
        target_type = %std::any::type_name::<U>(),
        workers = workers.get(),
    )
)]
pub fn transform_parallel<T, U, F>(source: &Enumerable<T>, f: F, workers: Workers) -> Enumerable<U>
where
  T: Clone + Send,
  U: Send,
  F: Fn(T) -> U + Sync,
{
  Enumerable::new(run_ordered(source.to_list(), workers, &f))
}

/// Runs `f` over `values` and returns the results in input order.
fn run_ordered<T, U, F>(values: Vec<T>, workers: Workers, f: &F) -> Vec<U>
where
  T: Send,
  U: Send,
  F: Fn(T) -> U + Sync,
{
  let len = values.len();
  if len == 0 {
    return Vec::new();
  }
  let pool_size = workers.get().min(len);

  let (job_tx, job_rx) = bounded::<WorkItem<T>>(len);
  let (result_tx, result_rx) = bounded::<WorkItem<U>>(len);

  thread::scope(|scope| {
    scope.spawn(move || enqueue(values, job_tx));

    let handles: Vec<ScopedJoinHandle<'_, ()>> = (0..pool_size)
      .map(|worker_id| {
        let jobs = job_rx.clone();
        let results = result_tx.clone();
        scope.spawn(move || map_worker(worker_id, jobs, results, f))
      })
      .collect();
    // Only the workers may hold these, so the channels close when the last worker exits.
    drop(job_rx);
    drop(result_tx);

    let mut slots: Vec<Option<U>> = std::iter::repeat_with(|| None).take(len).collect();
    let mut collected = 0usize;
    for result in result_rx.iter() {
      slots[result.index] = Some(result.value);
      collected += 1;
    }
    event!(Level::DEBUG, collected, pool_size, "Results collected.");

    join_workers(handles);

    slots
      .into_iter()
      .enumerate()
      .map(|(index, slot)| {
        slot.unwrap_or_else(|| panic!("enumerable: no result collected for element {index} after all workers finished"))
      })
      .collect()
  })
}

/// Runs `f` over `values` for its side effects only.
fn run_unordered<T, F>(values: Vec<T>, workers: Workers, f: &F)
where
  T: Send,
  F: Fn(T) + Sync,
{
  let len = values.len();
  if len == 0 {
    return;
  }
  let pool_size = workers.get().min(len);

  let (job_tx, job_rx) = bounded::<WorkItem<T>>(len);

  thread::scope(|scope| {
    scope.spawn(move || enqueue(values, job_tx));

    let handles: Vec<ScopedJoinHandle<'_, ()>> = (0..pool_size)
      .map(|worker_id| {
        let jobs = job_rx.clone();
        scope.spawn(move || side_effect_worker(worker_id, jobs, f))
      })
      .collect();
    drop(job_rx);

    join_workers(handles);
    event!(Level::DEBUG, pool_size, "All workers completed.");
  });
}

fn enqueue<T>(values: Vec<T>, jobs: Sender<WorkItem<T>>) {
  for (index, value) in values.into_iter().enumerate() {
    // The queue holds every element, so this only fails once every worker is gone.
    if jobs.send(WorkItem::new(value, index)).is_err() {
      event!(Level::WARN, index, "Job queue closed before all elements were enqueued.");
      return;
    }
  }
  event!(Level::TRACE, "All jobs enqueued.");
}

fn map_worker<T, U, F>(worker_id: usize, jobs: Receiver<WorkItem<T>>, results: Sender<WorkItem<U>>, f: &F)
where
  F: Fn(T) -> U,
{
  let mut processed = 0usize;
  for job in jobs.iter() {
    if results.send(job.map(f)).is_err() {
      break;
    }
    processed += 1;
  }
  event!(Level::TRACE, worker_id, processed, "Worker finished.");
}

fn side_effect_worker<T, F>(worker_id: usize, jobs: Receiver<WorkItem<T>>, f: &F)
where
  F: Fn(T),
{
  let mut processed = 0usize;
  for job in jobs.iter() {
    f(job.value);
    processed += 1;
  }
  event!(Level::TRACE, worker_id, processed, "Worker finished.");
}

/// Joins every worker, then re-raises the first panic seen, if any.
fn join_workers(handles: Vec<ScopedJoinHandle<'_, ()>>) {
  let mut first_panic = None;
  for (worker_id, handle) in handles.into_iter().enumerate() {
    if let Err(payload) = handle.join() {
      event!(Level::ERROR, worker_id, "Worker panicked.");
      first_panic.get_or_insert(payload);
    }
  }
  if let Some(payload) = first_panic {
    panic::resume_unwind(payload);
  }
}
