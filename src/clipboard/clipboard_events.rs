use crate::app::App;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::backend::{BackendSink, ClipboardSink};

/// `y` / `Ctrl+Y` copy the current quote
pub fn handle_clipboard_key(app: &mut App, key: KeyEvent) -> bool {
    let is_yank = match key.code {
        KeyCode::Char('y') => {
            key.modifiers.is_empty() || key.modifiers.contains(KeyModifiers::CONTROL)
        }
        _ => false,
    };

    if !is_yank {
        return false;
    }

    let sink = BackendSink::new(app.clipboard_backend);
    copy_current_quote(app, &sink);
    true
}

/// Copy only the quote text; the author stays on screen
pub fn copy_current_quote<C: ClipboardSink>(app: &mut App, sink: &C) -> bool {
    if app.batch.is_active() {
        app.notification
            .show_warning("Batch copy in progress, wait or cancel it first");
        return false;
    }

    let Some(content) = app.quote.current().map(|quote| quote.content.clone()) else {
        app.notification.show_warning("No quote to copy");
        return false;
    };

    match sink.write(&content) {
        Ok(()) => {
            app.notification.show("Copied quote!");
            true
        }
        Err(e) => {
            app.notification
                .show_warning(&format!("Copy failed: {}", e));
            false
        }
    }
}

#[cfg(test)]
#[path = "clipboard_events_tests.rs"]
mod clipboard_events_tests;
