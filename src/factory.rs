//! Factory adapting a state-aware body constructor into a fresh-or-resume
//! constructor, and the stream handle it returns.

use std::pin::Pin;
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};

use futures::Stream;
use tracing::instrument;

use crate::config::ReplayConfig;
use crate::error::ReplayError;
use crate::fast_forward::fast_forward;
use crate::types::{ProgressState, SharedProgress, Start};

/// A running resumable computation.
///
/// Drive it like any stream (request-next / receive-value / completion is
/// `Stream` itself). Read [ResumableHandle::state] at any suspension to
/// persist progress.
pub struct ResumableHandle<I, T> {
  state: SharedProgress<I>,
  stream: Pin<Box<dyn Stream<Item = T> + Send>>,
}

impl<I, T> ResumableHandle<I, T> {
  /// Snapshot of the current progress state, for persistence. Repeated
  /// snapshots without driving the stream further are identical.
  pub fn state(&self) -> ProgressState<I>
  where
    I: Clone,
  {
    self
      .state
      .lock()
      .unwrap_or_else(std::sync::PoisonError::into_inner)
      .clone()
  }

  /// The shared progress state itself, as also seen by the running body.
  pub fn shared_state(&self) -> SharedProgress<I> {
    Arc::clone(&self.state)
  }
}

impl<I: std::fmt::Debug, T> std::fmt::Debug for ResumableHandle<I, T> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("ResumableHandle")
      .field("state", &self.state)
      .finish_non_exhaustive()
  }
}

impl<I, T> Stream for ResumableHandle<I, T> {
  type Item = T;

  fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<T>> {
    self.get_mut().stream.as_mut().poll_next(cx)
  }
}

/// Adapts a body constructor `(input, state) -> Stream` that always requires
/// a populated progress state into a constructor accepting either a fresh
/// input or a saved state ([Start]).
///
/// The factory owns no run state; one factory can construct any number of
/// independent computation instances.
pub struct ResumableFactory<F> {
  body: F,
  config: ReplayConfig,
}

impl<F> ResumableFactory<F> {
  pub fn new(body: F) -> Self {
    Self::with_config(body, ReplayConfig::default())
  }

  pub fn with_config(body: F, config: ReplayConfig) -> Self {
    Self { body, config }
  }

  /// Constructs a computation handle for a fresh run or a resume.
  ///
  /// Rolls the skip target forward over the previous run's progress, resets
  /// the per-run yield counter, re-invokes the body constructor from the
  /// top, and wraps its stream in [fast_forward]. The returned handle shares
  /// the progress state with the running body by reference.
  #[instrument(level = "trace", skip(self, start))]
  pub fn create<I, S>(&self, start: Start<I>) -> Result<ResumableHandle<I, S::Item>, ReplayError>
  where
    I: Clone + Send + 'static,
    S: Stream + Send + 'static,
    S::Item: Send,
    F: Fn(I, SharedProgress<I>) -> S,
  {
    let mut state = match start {
      Start::Fresh(input) => ProgressState::fresh(input),
      Start::Resume(state) => state,
    };
    let prev_executed = state.yields_executed;
    let prev_skip = state.yields_to_skip;
    state.begin_run();
    self.config.ensure(
      state.yields_executed == 0,
      "yield counter must be zero at run start",
    )?;
    self.config.ensure(
      state.yields_to_skip == Some(prev_skip.unwrap_or(0).max(prev_executed)),
      "skip target must cover the previous run's progress",
    )?;

    let input = state.input.clone();
    let shared: SharedProgress<I> = Arc::new(Mutex::new(state));
    let body = (self.body)(input, Arc::clone(&shared));
    Ok(ResumableHandle {
      state: Arc::clone(&shared),
      stream: Box::pin(fast_forward(shared, body)),
    })
  }

  /// Boundary constructor taking the optional-pair shape: exactly one of
  /// `input` and `state` must be present (see [Start::from_parts]).
  pub fn create_from_parts<I, S>(
    &self,
    input: Option<I>,
    state: Option<ProgressState<I>>,
  ) -> Result<ResumableHandle<I, S::Item>, ReplayError>
  where
    I: Clone + Send + 'static,
    S: Stream + Send + 'static,
    S::Item: Send,
    F: Fn(I, SharedProgress<I>) -> S,
  {
    self.create(Start::from_parts(input, state)?)
  }
}
