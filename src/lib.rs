//! # fastforward
//!
//! Checkpoint and replay for resumable, stream-first computations.
//!
//! ## Architecture
//!
//! A resumable computation is an async stream body re-created from its
//! original input on every run. [ProgressState] records how many suspension
//! points (yields) the previous run passed; on resume the body is restarted
//! from the top and [fast_forward()] silently discards the yields already
//! seen,
//! so the driver observes the stream continuing exactly where it left off.
//!
//! [ResumableFactory] adapts a state-aware body constructor
//! `(input, state) -> Stream` into a constructor accepting either a fresh
//! input or a saved [ProgressState] ([Start]). The returned
//! [ResumableHandle] is itself a stream; read [ResumableHandle::state] at
//! any suspension to persist progress.
//!
//! Replay assumes the body is deterministic given the same input: side
//! effects performed before a suspension point re-execute during
//! fast-forward unless the caller guards them.

pub mod config;
pub mod error;
pub mod factory;
pub mod fast_forward;
pub mod types;

pub use config::ReplayConfig;
pub use error::ReplayError;
pub use factory::{ResumableFactory, ResumableHandle};
pub use fast_forward::fast_forward;
pub use types::{ProgressState, SharedProgress, Start};
