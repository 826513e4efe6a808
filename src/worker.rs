//! Background worker thread
//!
//! Owns every network call and the batch controller so the UI thread never
//! blocks. Requests arrive on a tokio channel and each one runs as its own
//! task on a single-threaded runtime; responses go back over a std channel
//! that the UI drains with `try_recv` once per frame.

use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};

use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};

use crate::batch::{BatchController, BatchError, BatchEvent, BatchHandle, BatchRequest};
use crate::clipboard::ClipboardSink;
use crate::source::{Leaderboard, Quote, QuoteApiClient, SiteStats, SourceError, Submission};

/// Work the UI can ask for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkerRequest {
    RandomQuote,
    Stats,
    Search(String),
    Leaderboard { limit: u32 },
    Submit(Submission),
    Batch(BatchRequest),
}

/// Results sent back to the UI thread
#[derive(Debug)]
pub enum WorkerResponse {
    Quote(Result<Quote, SourceError>),
    Stats(Result<SiteStats, SourceError>),
    SearchResults {
        keyword: String,
        result: Result<Vec<Quote>, SourceError>,
    },
    Leaderboard(Result<Leaderboard, SourceError>),
    Submitted(Result<(), SourceError>),
    /// Forwarded from the running batch's observer
    Batch(BatchEvent),
    /// The batch request was refused before anything started
    BatchRejected(String),
    /// The worker died; no further responses will arrive
    Crashed(String),
}

/// UI-side ends of the worker's channels
#[derive(Debug)]
pub struct WorkerChannels {
    pub request_tx: UnboundedSender<WorkerRequest>,
    pub response_rx: Receiver<WorkerResponse>,
    /// Cancels the worker's active batch directly, bypassing the request queue
    pub batch: BatchHandle,
}

/// Spawn the worker thread.
///
/// The thread exits once every `request_tx` clone is dropped; an in-flight
/// batch is dropped with the runtime, which returns its controller to Idle.
pub fn spawn_worker<C>(client: QuoteApiClient, sink: C) -> WorkerChannels
where
    C: ClipboardSink + 'static,
{
    let (request_tx, request_rx) = unbounded_channel();
    let (response_tx, response_rx) = mpsc::channel();

    let controller = Arc::new(BatchController::new(client.clone(), sink));
    let batch = controller.handle();

    std::thread::spawn(move || {
        // The default hook prints to stderr, which would corrupt the TUI
        let response_tx_clone = response_tx.clone();
        let prev_hook = panic::take_hook();
        panic::set_hook(Box::new(move |panic_info| {
            let panic_msg = panic_message(panic_info.payload());
            log::error!(
                "Worker panic: {} at {:?}",
                panic_msg,
                panic_info.location()
            );
            let _ = response_tx_clone.send(WorkerResponse::Crashed(panic_msg));
        }));

        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            let rt = match tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
            {
                Ok(rt) => rt,
                Err(e) => {
                    log::error!("Failed to create worker runtime: {}", e);
                    let _ = response_tx.send(WorkerResponse::Crashed(e.to_string()));
                    return;
                }
            };

            rt.block_on(worker_loop(controller, client, request_rx, response_tx));
        }));

        panic::set_hook(prev_hook);

        if let Err(e) = result {
            log::error!("Worker thread panicked: {}", panic_message(e.as_ref()));
        }
    });

    WorkerChannels {
        request_tx,
        response_rx,
        batch,
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic in worker".to_string()
    }
}

/// Processes requests until the channel is closed.
///
/// Each request gets its own task so a long batch never delays a quote
/// fetch or search.
async fn worker_loop<C>(
    controller: Arc<BatchController<QuoteApiClient, C>>,
    client: QuoteApiClient,
    mut request_rx: UnboundedReceiver<WorkerRequest>,
    response_tx: Sender<WorkerResponse>,
) where
    C: ClipboardSink + 'static,
{
    while let Some(request) = request_rx.recv().await {
        #[cfg(debug_assertions)]
        log::debug!("Worker request: {:?}", request);

        let response_tx = response_tx.clone();
        match request {
            WorkerRequest::RandomQuote => {
                let client = client.clone();
                tokio::spawn(async move {
                    let result = client.random_quote().await;
                    let _ = response_tx.send(WorkerResponse::Quote(result));
                });
            }
            WorkerRequest::Stats => {
                let client = client.clone();
                tokio::spawn(async move {
                    let result = client.stats().await;
                    let _ = response_tx.send(WorkerResponse::Stats(result));
                });
            }
            WorkerRequest::Search(keyword) => {
                let client = client.clone();
                tokio::spawn(async move {
                    let result = client.search(&keyword).await;
                    let _ = response_tx.send(WorkerResponse::SearchResults { keyword, result });
                });
            }
            WorkerRequest::Leaderboard { limit } => {
                let client = client.clone();
                tokio::spawn(async move {
                    let result = client.leaderboard(limit).await;
                    let _ = response_tx.send(WorkerResponse::Leaderboard(result));
                });
            }
            WorkerRequest::Submit(submission) => {
                let client = client.clone();
                tokio::spawn(async move {
                    let result = client.submit(&submission).await;
                    let _ = response_tx.send(WorkerResponse::Submitted(result));
                });
            }
            WorkerRequest::Batch(batch_request) => {
                let controller = Arc::clone(&controller);
                tokio::spawn(async move {
                    run_batch(&controller, batch_request, &response_tx).await;
                });
            }
        }
    }
}

async fn run_batch<C>(
    controller: &BatchController<QuoteApiClient, C>,
    request: BatchRequest,
    response_tx: &Sender<WorkerResponse>,
) where
    C: ClipboardSink,
{
    let mut forward = |event: BatchEvent| {
        let _ = response_tx.send(WorkerResponse::Batch(event));
    };

    match controller.start(request, &mut forward).await {
        // Started runs already reported their outcome through `Finished`
        Ok(_) => {}
        Err(e @ (BatchError::InvalidRequest(_) | BatchError::AlreadyRunning)) => {
            let _ = response_tx.send(WorkerResponse::BatchRejected(e.to_string()));
        }
        Err(_) => {}
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
