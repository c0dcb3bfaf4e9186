//! Construction argument: a fresh input or a saved progress state.

use super::ProgressState;
use crate::error::ReplayError;

/// How to construct a resumable computation: from a fresh input (first run)
/// or from a previously saved [ProgressState] (resume). The saved state
/// carries the original input, so the two variants never overlap.
#[derive(Debug, Clone)]
pub enum Start<I> {
  /// First run; counters start at zero.
  Fresh(I),
  /// Resume from saved progress: the body is replayed from the top and the
  /// yields the previous run already consumed are suppressed.
  Resume(ProgressState<I>),
}

impl<I> Start<I> {
  /// Builds a [Start] from the optional-pair boundary shape. Exactly one of
  /// `input` and `state` must be present; anything else fails with
  /// [ReplayError::InvalidArgument].
  pub fn from_parts(
    input: Option<I>,
    state: Option<ProgressState<I>>,
  ) -> Result<Self, ReplayError> {
    match (input, state) {
      (Some(input), None) => Ok(Start::Fresh(input)),
      (None, Some(state)) => Ok(Start::Resume(state)),
      (Some(_), Some(_)) => Err(ReplayError::InvalidArgument(
        "input and saved state are mutually exclusive".to_string(),
      )),
      (None, None) => Err(ReplayError::InvalidArgument(
        "either an input or a saved state is required".to_string(),
      )),
    }
  }
}
