//! Batch copy controller
//!
//! Drives one paced, cancelable run at a time:
//! `Idle -> Running -> {Completed | Cancelled | Failed | NoItemsAvailable} -> Idle`.
//!
//! The run future suspends only while fetching and while pacing. Cancellation
//! is cooperative: the token is checked before every write and the pacing
//! sleep is raced against it, so an in-flight write always finishes.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use super::batch_request::BatchRequest;
use super::types::{BatchError, BatchEvent, BatchObserver, BatchProgress, BatchTerminal};
use crate::clipboard::ClipboardSink;
use crate::source::ItemSource;

/// Delay between consecutive clipboard writes
pub const PACING_INTERVAL: Duration = Duration::from_millis(1000);

/// Shared run flags. `cancel_token` is only swapped or cancelled while its
/// lock is held, so a cancel can never land on the previous run's token.
#[derive(Debug, Default)]
struct RunFlags {
    active: AtomicBool,
    cancel_token: Mutex<CancellationToken>,
}

impl RunFlags {
    fn lock_token(&self) -> MutexGuard<'_, CancellationToken> {
        self.cancel_token
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Claim the controller for a new run, or `None` if one is active
    fn begin(&self) -> Option<ActiveRun<'_>> {
        let mut token = self.lock_token();
        if self
            .active
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return None;
        }
        *token = CancellationToken::new();
        Some(ActiveRun {
            flags: self,
            token: token.clone(),
        })
    }

    fn cancel(&self) -> bool {
        let token = self.lock_token();
        if !self.active.load(Ordering::Acquire) {
            return false;
        }
        token.cancel();
        true
    }
}

/// Holds the active flag for the lifetime of a run; dropping it (on any exit
/// path, including the run future being dropped) returns the controller to Idle.
struct ActiveRun<'a> {
    flags: &'a RunFlags,
    token: CancellationToken,
}

impl Drop for ActiveRun<'_> {
    fn drop(&mut self) {
        self.flags.active.store(false, Ordering::Release);
    }
}

/// Cloneable handle for observing and cancelling runs from another thread
#[derive(Debug, Clone, Default)]
pub struct BatchHandle {
    flags: Arc<RunFlags>,
}

impl BatchHandle {
    /// Request cancellation of the active run. Returns false when idle.
    pub fn cancel(&self) -> bool {
        self.flags.cancel()
    }

    pub fn is_active(&self) -> bool {
        self.flags.active.load(Ordering::Acquire)
    }
}

pub struct BatchController<S, C> {
    source: S,
    sink: C,
    flags: Arc<RunFlags>,
}

impl<S, C> BatchController<S, C>
where
    S: ItemSource,
    C: ClipboardSink,
{
    pub fn new(source: S, sink: C) -> Self {
        Self {
            source,
            sink,
            flags: Arc::new(RunFlags::default()),
        }
    }

    pub fn handle(&self) -> BatchHandle {
        BatchHandle {
            flags: Arc::clone(&self.flags),
        }
    }

    pub fn is_active(&self) -> bool {
        self.flags.active.load(Ordering::Acquire)
    }

    /// Cooperative cancel; a no-op returning false when no run is active
    pub fn cancel(&self) -> bool {
        self.flags.cancel()
    }

    /// Validate `request` and run a batch to completion.
    ///
    /// Returns `Ok` with `Completed` or `Cancelled`; every other terminal state
    /// is an error. `InvalidRequest` and `AlreadyRunning` are returned before
    /// any side effect and emit no events. Any run that does start emits
    /// `Started`, one `Progress` per successful write, then exactly one
    /// `Finished` after the controller is idle again.
    pub async fn start<O>(
        &self,
        request: BatchRequest,
        observer: &mut O,
    ) -> Result<BatchTerminal, BatchError>
    where
        O: BatchObserver,
    {
        let total = request.validate()?;

        let Some(run) = self.flags.begin() else {
            log::debug!("Batch start ignored: a run is already active");
            return Err(BatchError::AlreadyRunning);
        };

        log::info!("Batch run started: {} items", total);
        let result = self.run(total, &run.token, observer).await;
        drop(run);

        let terminal = match &result {
            Ok(terminal) => terminal.clone(),
            Err(error) => BatchTerminal::from_error(error, total),
        };
        log::info!("Batch run finished: {:?}", terminal);
        observer.on_event(BatchEvent::Finished(terminal));

        result
    }

    async fn run<O>(
        &self,
        total: usize,
        token: &CancellationToken,
        observer: &mut O,
    ) -> Result<BatchTerminal, BatchError>
    where
        O: BatchObserver,
    {
        observer.on_event(BatchEvent::Started(BatchProgress::new(0, total)));

        let mut items = self.source.fetch_batch(total).await?;
        if items.is_empty() {
            return Err(BatchError::NoItemsAvailable);
        }
        items.truncate(total);
        if items.len() < total {
            log::debug!("Source returned {} of {} requested items", items.len(), total);
        }

        let last_index = items.len() - 1;
        let mut completed = 0;

        for (index, item) in items.iter().enumerate() {
            if token.is_cancelled() {
                return Ok(BatchTerminal::Cancelled {
                    copied: completed,
                    total,
                });
            }

            self.sink
                .write(item)
                .map_err(|source| BatchError::ClipboardWriteFailed {
                    completed,
                    total,
                    source,
                })?;

            completed += 1;
            log::debug!("Batch item {}/{} copied", completed, total);
            observer.on_event(BatchEvent::Progress(BatchProgress::new(completed, total)));

            if index < last_index {
                tokio::select! {
                    biased;
                    _ = token.cancelled() => {}
                    _ = tokio::time::sleep(PACING_INTERVAL) => {}
                }
            }
        }

        Ok(BatchTerminal::Completed {
            copied: completed,
            total,
        })
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod controller_tests;
