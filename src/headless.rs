//! One-shot batch copy without the TUI
//!
//! Progress goes to a writer (stderr from `main`) as `[k/N] p%` lines,
//! followed by a one-line summary.

use std::io::Write;

use crate::batch::{
    BatchController, BatchError, BatchEvent, BatchHandle, BatchProgress, BatchRequest,
    BatchTerminal,
};
use crate::clipboard::ClipboardSink;
use crate::source::ItemSource;

pub fn format_progress(progress: &BatchProgress) -> String {
    format!(
        "[{}/{}] {}%",
        progress.completed, progress.total, progress.percentage
    )
}

pub fn format_summary(terminal: &BatchTerminal) -> String {
    match terminal {
        BatchTerminal::Completed { copied, total } => {
            format!("Completed: copied {} of {} quotes", copied, total)
        }
        BatchTerminal::Cancelled { copied, total } => {
            format!("Cancelled: copied {} of {} quotes", copied, total)
        }
        BatchTerminal::NoItemsAvailable { .. } => "No quotes available".to_string(),
        BatchTerminal::Failed {
            copied,
            total,
            reason,
        } => format!("Failed after {} of {} quotes: {}", copied, total, reason),
    }
}

/// Parse `count_text` and run one batch, reporting progress to `out`.
///
/// Write errors on `out` are ignored; losing a progress line must not abort
/// a run that is already copying.
pub async fn run_batch<S, C, W>(
    controller: &BatchController<S, C>,
    count_text: &str,
    out: &mut W,
) -> Result<BatchTerminal, BatchError>
where
    S: ItemSource,
    C: ClipboardSink,
    W: Write,
{
    let request: BatchRequest = count_text.parse()?;

    let mut report = |event: BatchEvent| {
        let line = match &event {
            BatchEvent::Started(_) => return,
            BatchEvent::Progress(progress) => format_progress(progress),
            BatchEvent::Finished(terminal) => format_summary(terminal),
        };
        let _ = writeln!(out, "{}", line);
        let _ = out.flush();
    };

    controller.start(request, &mut report).await
}

/// Cancel the run on the first Ctrl+C
pub async fn cancel_on_ctrl_c(handle: BatchHandle) {
    if tokio::signal::ctrl_c().await.is_ok() {
        log::info!("Ctrl+C received, cancelling batch");
        handle.cancel();
    }
}
