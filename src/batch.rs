//! Batch clipboard copy
//!
//! Fetches up to 50 quotes and copies them to the clipboard one at a time,
//! pacing writes one second apart. Runs are cancelable and report progress
//! after every write.

pub mod batch_events;
pub mod batch_render;
mod batch_request;
mod batch_state;
mod controller;
mod types;

pub use batch_request::{BatchRequest, MAX_BATCH_COUNT, MIN_BATCH_COUNT};
pub use batch_state::{BatchPhase, BatchState};
pub use controller::{BatchController, BatchHandle, PACING_INTERVAL};
pub use types::{BatchError, BatchEvent, BatchObserver, BatchProgress, BatchTerminal};
