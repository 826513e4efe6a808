//! Keys while the submit form is open, plus the worker's answer

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::App;
use crate::source::{SourceError, Submission};
use crate::worker::WorkerRequest;

pub fn open_submit(app: &mut App) {
    if app.submit.is_pending() {
        app.notification.show("A submission is already being sent");
        return;
    }
    app.submit.open();
}

/// Returns true if the event was consumed
pub fn handle_submit_key(app: &mut App, key: KeyEvent) -> bool {
    if !app.submit.is_visible() {
        return false;
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return false;
    }

    match key.code {
        KeyCode::Esc => app.submit.close(),
        KeyCode::Tab | KeyCode::BackTab => app.submit.toggle_focus(),
        KeyCode::Enter => send_submission(app),
        _ => {
            app.submit.focused_textarea_mut().input(key);
        }
    }
    true
}

/// Validate locally, then hand the submission to the worker.
/// A rule violation keeps the form open with the text intact.
fn send_submission(app: &mut App) {
    let submission = match Submission::new(&app.submit.content_text(), app.submit.author_text()) {
        Ok(submission) => submission,
        Err(e) => {
            app.notification.show_warning(&e.to_string());
            return;
        }
    };

    if app.send_request(WorkerRequest::Submit(submission)) {
        app.submit.mark_pending();
    } else {
        app.submit.close();
    }
}

pub fn handle_submit_response(app: &mut App, result: Result<(), SourceError>) {
    match result {
        Ok(()) => {
            app.submit.finish(true);
            app.notification.show("Quote submitted for review");
        }
        Err(e) => {
            log::debug!("Submission failed: {}", e);
            app.submit.finish(false);
            app.notification.show_error(&format!("Submit failed: {}", e));
        }
    }
}

#[cfg(test)]
#[path = "submit_events_tests.rs"]
mod submit_events_tests;
