//! Suspension-point wrapper: counts yields and suppresses replayed ones.

use crate::types::SharedProgress;
use futures::{Stream, StreamExt};
use tracing::trace;

/// Wraps a computation body so every yield passes through the shared
/// [crate::ProgressState].
///
/// Each item the body produces counts as one suspension point. Items up to
/// the saved skip target are discarded without being emitted (the body code
/// between them still runs), and emission resumes at the first point past
/// the boundary. The state lock is released before suspending, so the
/// caller may read the state while the stream is parked at a yield.
pub fn fast_forward<I, S>(state: SharedProgress<I>, body: S) -> impl Stream<Item = S::Item>
where
  I: Send,
  S: Stream + Send,
{
  async_stream::stream! {
    futures::pin_mut!(body);
    while let Some(value) = body.next().await {
      let emit = {
        let mut st = state
          .lock()
          .unwrap_or_else(std::sync::PoisonError::into_inner);
        let emit = st.record_yield();
        trace!(yields_executed = st.yields_executed, emit, "suspension point");
        emit
      };
      if emit {
        yield value;
      }
    }
  }
}
