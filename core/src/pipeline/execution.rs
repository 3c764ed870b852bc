// enumerable/src/pipeline/execution.rs

//! Contains `Enumerable::evaluate()`, which replays the pending stages against
//! the realized values.

use crate::core::sequence::Sequence;
use crate::pipeline::definition::Enumerable;
use tracing::{event, instrument, span, Level};

impl<T: Clone> Enumerable<T> {
  /// Runs every pending stage in registration order and returns a pipeline
  /// with no pending stages.
  ///
  /// Each stage consumes the output of the previous one. With nothing pending
  /// this returns a pipeline sharing the current values, so calling it again
  /// on an evaluated pipeline is a no-op.
  #[instrument(
        name = "Enumerable::evaluate",
        skip_all,
        fields(
            element_type = %std::any::type_name::<T>(),
            input_len = self.values.len(),
            pending_stages = self.stages.len(),
        )
    )]
  pub fn evaluate(&self) -> Self {
    if self.stages.is_empty() {
      event!(Level::TRACE, "No pending stages.");
      return Self::from_sequence(self.values.clone());
    }

    // Stages work on an owned copy; the shared backing list is never touched.
    let mut values = self.values.get().to_vec();

    for (stage_idx, stage) in self.stages.iter().enumerate() {
      let stage_span = span!(
        Level::TRACE,
        "pipeline_stage",
        stage = stage.name(),
        stage_index = stage_idx,
        input_len = values.len()
      );
      let _stage_span_guard = stage_span.enter();
      values = stage.apply(values);
      event!(Level::TRACE, output_len = values.len(), "Stage applied.");
    }

    event!(Level::DEBUG, output_len = values.len(), "Pipeline evaluated.");
    Self::from_sequence(Sequence::new(values))
  }

  /// Evaluates and returns the realized container.
  pub fn to_sequence(&self) -> Sequence<T> {
    self.evaluate().values
  }
}
