//! Key handling and worker event processing for batch copy

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::batch_request::BatchRequest;
use super::types::{BatchEvent, BatchTerminal};
use crate::app::App;
use crate::notification::NotificationType;
use crate::worker::WorkerRequest;

/// Keys while the count prompt is open. Returns false when the prompt is closed.
pub fn handle_prompt_key(app: &mut App, key: KeyEvent) -> bool {
    if !app.batch.is_prompt_visible() {
        return false;
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return false;
    }

    match key.code {
        KeyCode::Esc => app.batch.close_prompt(),
        KeyCode::Enter => submit_prompt(app),
        _ => {
            app.batch.prompt_mut().input(key);
        }
    }
    true
}

/// `b` opens the prompt; `Esc`/`c` cancel an active run
pub fn handle_batch_key(app: &mut App, key: KeyEvent) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return false;
    }

    match key.code {
        KeyCode::Char('b') => {
            if app.batch.is_active() {
                app.notification.show("A batch copy is already running");
            } else {
                app.batch.open_prompt();
            }
            true
        }
        KeyCode::Esc | KeyCode::Char('c') if app.batch.is_active() => {
            if !app.batch.request_cancel() {
                log::debug!("Cancel ignored in phase {:?}", app.batch.phase());
            }
            true
        }
        _ => false,
    }
}

/// Parse and validate the prompt, then hand the request to the worker.
/// Invalid input keeps the prompt open.
fn submit_prompt(app: &mut App) {
    let request = match app.batch.prompt_text().parse::<BatchRequest>() {
        Ok(request) => request,
        Err(e) => {
            app.notification.show_warning(&e.to_string());
            return;
        }
    };

    if let Err(e) = request.validate() {
        app.notification.show_warning(&e.to_string());
        return;
    }

    if app.send_request(WorkerRequest::Batch(request)) {
        app.batch.mark_requested();
    } else {
        app.batch.close_prompt();
    }
}

/// Apply an observer event forwarded by the worker
pub fn apply_event(app: &mut App, event: BatchEvent) {
    match event {
        BatchEvent::Started(progress) => {
            app.batch.update_progress(progress);
            app.batch.send_pending_cancel();
        }
        BatchEvent::Progress(progress) => app.batch.update_progress(progress),
        BatchEvent::Finished(terminal) => {
            app.batch.reset();
            let (notification_type, message) = terminal_notification(&terminal);
            app.notification.show_with_type(&message, notification_type);
        }
    }
}

/// The worker refused the request before anything started
pub fn handle_rejected(app: &mut App, message: &str) {
    app.batch.reset();
    app.notification.show_warning(message);
}

pub fn terminal_notification(terminal: &BatchTerminal) -> (NotificationType, String) {
    match terminal {
        BatchTerminal::Completed { copied, total } if copied == total => {
            (NotificationType::Info, format!("Copied {} quotes!", copied))
        }
        BatchTerminal::Completed { copied, total } => (
            NotificationType::Info,
            format!("Copied {} quotes! ({} requested)", copied, total),
        ),
        BatchTerminal::Cancelled { copied, total } => (
            NotificationType::Info,
            format!("Batch copy cancelled after {} of {} quotes", copied, total),
        ),
        BatchTerminal::NoItemsAvailable { .. } => {
            (NotificationType::Warning, "No quotes available".to_string())
        }
        BatchTerminal::Failed {
            copied,
            total,
            reason,
        } => (
            NotificationType::Error,
            format!("{} ({}/{} copied)", reason, copied, total),
        ),
    }
}

#[cfg(test)]
#[path = "batch_events_tests.rs"]
mod batch_events_tests;
