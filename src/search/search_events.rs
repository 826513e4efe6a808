//! Search event handling
//!
//! Keys while the search popup is open, plus applying worker results.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[cfg(debug_assertions)]
use log::debug;

use crate::app::App;
use crate::source::{Quote, SourceError};
use crate::worker::WorkerRequest;

/// Open the search popup
pub fn open_search(app: &mut App) {
    app.search.open();
}

/// Handle keys when search is visible.
/// Returns true if the event was consumed.
pub fn handle_search_key(app: &mut App, key: KeyEvent) -> bool {
    if !app.search.is_visible() {
        return false;
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return false;
    }

    match key.code {
        KeyCode::Esc => app.search.close(),
        KeyCode::Enter => {
            if app.search.results_are_current() {
                choose_selected(app);
            } else {
                submit_search(app);
            }
        }
        KeyCode::Down => app.search.select_next(),
        KeyCode::Up => app.search.select_previous(),
        _ => {
            app.search.search_textarea_mut().input(key);
        }
    }
    true
}

fn submit_search(app: &mut App) {
    let keyword = app.search.query().trim().to_string();
    if keyword.is_empty() {
        app.notification.show("Enter a search keyword");
        return;
    }

    #[cfg(debug_assertions)]
    debug!("Search: requesting '{}'", keyword);

    if app.send_request(WorkerRequest::Search(keyword.clone())) {
        app.search.mark_pending(&keyword);
    }
}

fn choose_selected(app: &mut App) {
    if let Some(quote) = app.search.selected().cloned() {
        app.quote.set_quote(quote);
        app.search.close();
    }
}

/// Apply a search response from the worker
pub fn handle_search_results(
    app: &mut App,
    keyword: String,
    result: Result<Vec<Quote>, SourceError>,
) {
    if !app.search.is_visible() {
        return;
    }

    if app.search.is_superseded(&keyword) {
        #[cfg(debug_assertions)]
        debug!("Search: dropping late response for '{}'", keyword);
        return;
    }

    match result {
        Ok(quotes) => {
            let empty = quotes.is_empty();
            if app.search.set_results(keyword, quotes) && empty {
                app.notification.show("No matching quotes");
            }
        }
        Err(e) => {
            app.search.clear_pending();
            app.notification.show_error(&format!("Search failed: {}", e));
        }
    }
}

#[cfg(test)]
#[path = "search_events_tests.rs"]
mod search_events_tests;
