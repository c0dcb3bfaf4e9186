//! Construction-time configuration for replay consistency checks.

use crate::error::ReplayError;

/// Controls whether internal consistency checks run during construction.
///
/// The config is passed into [crate::ResumableFactory] explicitly rather
/// than living in process-wide state, so behavior stays reproducible under
/// parallel tests. Disabling checks never changes skip/resume logic: the
/// boundary exclusivity checks in [crate::Start::from_parts] are
/// unconditional.
#[derive(Debug, Clone, Copy)]
pub struct ReplayConfig {
  /// Run internal consistency checks; a violation fails construction with
  /// [ReplayError::AssertionFailed].
  pub debug_checks: bool,
}

impl Default for ReplayConfig {
  fn default() -> Self {
    Self {
      debug_checks: cfg!(debug_assertions),
    }
  }
}

impl ReplayConfig {
  pub fn new(debug_checks: bool) -> Self {
    Self { debug_checks }
  }

  /// Fails with [ReplayError::AssertionFailed] when checks are enabled and
  /// `cond` does not hold.
  pub(crate) fn ensure(&self, cond: bool, what: &str) -> Result<(), ReplayError> {
    if self.debug_checks && !cond {
      return Err(ReplayError::AssertionFailed(what.to_string()));
    }
    Ok(())
  }
}
