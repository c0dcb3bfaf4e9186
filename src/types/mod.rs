//! Progress-tracking types for resumable computation runs.
//!
//! [ProgressState] is the durable shape a caller persists between runs;
//! [Start] is the construction argument (fresh input or saved state).

use std::sync::{Arc, Mutex};

mod progress_state;
mod start;

pub use progress_state::ProgressState;
pub use start::Start;

/// Progress state shared between the driving caller and the running body.
/// Exclusively owned by one active run at a time; never share it across
/// simultaneously-running computation instances.
pub type SharedProgress<I> = Arc<Mutex<ProgressState<I>>>;
