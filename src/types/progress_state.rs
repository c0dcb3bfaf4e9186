//! Durable record of replay progress for one resumable computation.

use serde::{Deserialize, Serialize};

/// Replay progress for a resumable computation.
///
/// `input` is the original construction argument; it is required to
/// reconstruct the body on resume, since resumption re-invokes the body
/// constructor from the top. `yields_executed` counts suspension points
/// passed by the current run. `yields_to_skip`, when set, is the number of
/// suspension points a run must pass silently before emitting again.
///
/// Deserialization fails on a record missing `input`: a saved state always
/// carries the original input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressState<I> {
  pub input: I,
  pub yields_executed: u64,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub yields_to_skip: Option<u64>,
}

impl<I> ProgressState<I> {
  /// State for a first run: counters zeroed, no skip target.
  pub fn fresh(input: I) -> Self {
    Self {
      input,
      yields_executed: 0,
      yields_to_skip: None,
    }
  }

  /// Rolls the skip target forward to cover the previous run's progress,
  /// then resets the per-run counter. Called once per construction, before
  /// the body starts.
  pub(crate) fn begin_run(&mut self) {
    if self.yields_to_skip.is_none_or(|n| n < self.yields_executed) {
      self.yields_to_skip = Some(self.yields_executed);
    }
    self.yields_executed = 0;
  }

  /// Counts one suspension point. Returns `true` when the yield should be
  /// emitted to the driver, `false` while replay is still fast-forwarding
  /// past points an earlier run already consumed. A point exactly at the
  /// saved boundary is skipped; the one after it emits.
  pub fn record_yield(&mut self) -> bool {
    self.yields_executed += 1;
    self
      .yields_to_skip
      .is_none_or(|n| self.yields_executed > n)
  }
}
