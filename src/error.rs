//! Error type for resumable-computation construction.

use thiserror::Error;

/// Errors raised while constructing a resumable computation.
///
/// The suspension machinery itself never fails; all errors surface at
/// construction time, and a computation that failed to construct must not
/// be driven.
#[derive(Debug, Error)]
pub enum ReplayError {
  /// The fresh-input / saved-state boundary contract was violated. Checked
  /// unconditionally.
  #[error("invalid argument: {0}")]
  InvalidArgument(String),
  /// An internal consistency check failed. Fatal; guarded by
  /// [crate::ReplayConfig::debug_checks].
  #[error("assertion failed: {0}")]
  AssertionFailed(String),
}
