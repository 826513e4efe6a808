use thiserror::Error;

use crate::clipboard::ClipboardError;
use crate::source::SourceError;

/// Progress snapshot emitted by a batch run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchProgress {
    pub completed: usize,
    pub total: usize,
    /// `round(completed / total * 100)`, always within 0..=100
    pub percentage: u8,
}

impl BatchProgress {
    pub fn new(completed: usize, total: usize) -> Self {
        let percentage = if total == 0 {
            0
        } else {
            ((completed as f64 / total as f64) * 100.0).round().min(100.0) as u8
        };
        Self {
            completed,
            total,
            percentage,
        }
    }
}

/// Final state of a batch run. Exactly one is reported per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchTerminal {
    /// Every fetched item was copied
    Completed { copied: usize, total: usize },
    /// Stopped by `cancel` before the last item
    Cancelled { copied: usize, total: usize },
    /// The source returned nothing to copy
    NoItemsAvailable { total: usize },
    /// Fetch or clipboard failure; `copied` items were written before it
    Failed {
        copied: usize,
        total: usize,
        reason: String,
    },
}

impl BatchTerminal {
    pub(crate) fn from_error(error: &BatchError, total: usize) -> Self {
        match error {
            BatchError::NoItemsAvailable => BatchTerminal::NoItemsAvailable { total },
            BatchError::ClipboardWriteFailed { completed, .. } => BatchTerminal::Failed {
                copied: *completed,
                total,
                reason: error.to_string(),
            },
            BatchError::SourceUnavailable(_)
            | BatchError::InvalidRequest(_)
            | BatchError::AlreadyRunning => BatchTerminal::Failed {
                copied: 0,
                total,
                reason: error.to_string(),
            },
        }
    }
}

/// Observable events of a batch run, in emission order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchEvent {
    /// The run is active; carries the `(0, total, 0%)` snapshot
    Started(BatchProgress),
    /// One item was copied
    Progress(BatchProgress),
    /// The run reached a terminal state and the controller is idle again
    Finished(BatchTerminal),
}

/// Errors reported by [`BatchController::start`](super::BatchController::start)
#[derive(Debug, Error)]
pub enum BatchError {
    /// Count out of range or not a whole number; nothing was started
    #[error("Invalid batch request: {0}")]
    InvalidRequest(String),

    /// Another run is active; this request was discarded
    #[error("A batch copy is already running")]
    AlreadyRunning,

    /// The item fetch failed
    #[error("Quote source unavailable: {0}")]
    SourceUnavailable(#[from] SourceError),

    /// The fetch succeeded but returned no items
    #[error("No quotes available to copy")]
    NoItemsAvailable,

    /// A clipboard write failed mid-run
    #[error("Clipboard write failed after {completed} of {total} quotes: {source}")]
    ClipboardWriteFailed {
        completed: usize,
        total: usize,
        #[source]
        source: ClipboardError,
    },
}

/// Receives the events of a batch run.
///
/// Implemented for any `FnMut(BatchEvent)`, so a closure forwarding into a
/// channel is enough to observe a run.
pub trait BatchObserver {
    fn on_event(&mut self, event: BatchEvent);
}

impl<F> BatchObserver for F
where
    F: FnMut(BatchEvent),
{
    fn on_event(&mut self, event: BatchEvent) {
        self(event)
    }
}
