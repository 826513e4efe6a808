use ratatui::crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use std::io;
use std::sync::mpsc::TryRecvError;
use std::time::Duration;

use super::app_state::App;
use crate::batch::batch_events;
use crate::clipboard;
use crate::leaderboard::leaderboard_events;
use crate::search::search_events;
use crate::submit::submit_events;
use crate::worker::WorkerResponse;

mod global;

const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

impl App {
    pub fn handle_events(&mut self) -> io::Result<()> {
        self.poll_worker_responses();

        if event::poll(EVENT_POLL_TIMEOUT)?
            && let Event::Key(key_event) = event::read()?
            && key_event.kind == KeyEventKind::Press
        {
            self.handle_key_event(key_event);
        }
        Ok(())
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if batch_events::handle_prompt_key(self, key) {
            return;
        }

        if submit_events::handle_submit_key(self, key) {
            return;
        }

        if leaderboard_events::handle_leaderboard_key(self, key) {
            return;
        }

        if search_events::handle_search_key(self, key) {
            return;
        }

        if batch_events::handle_batch_key(self, key) {
            return;
        }

        if global::handle_global_keys(self, key) {
            return;
        }

        clipboard::clipboard_events::handle_clipboard_key(self, key);
    }

    /// Drain every pending worker response without blocking
    pub fn poll_worker_responses(&mut self) {
        let Some(worker) = &self.worker else {
            return;
        };

        let mut responses = Vec::new();
        let mut disconnected = false;
        loop {
            match worker.response_rx.try_recv() {
                Ok(response) => responses.push(response),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    disconnected = true;
                    break;
                }
            }
        }

        for response in responses {
            self.handle_worker_response(response);
        }

        if disconnected && self.worker.is_some() {
            log::error!("Worker response channel disconnected");
            self.worker = None;
            if self.batch.is_active() {
                self.batch.reset();
            }
            self.submit.finish(false);
            self.notification
                .show_error("Quote service unavailable: worker stopped");
        }
    }

    fn handle_worker_response(&mut self, response: WorkerResponse) {
        match response {
            WorkerResponse::Quote(Ok(quote)) => {
                self.quote.set_quote(quote);
                self.request_stats();
            }
            WorkerResponse::Quote(Err(e)) => {
                log::debug!("Random quote failed: {}", e);
                self.quote.set_error(e.to_string());
            }
            WorkerResponse::Stats(Ok(stats)) => self.quote.set_stats(stats),
            WorkerResponse::Stats(Err(e)) => {
                // Stale counters are better than none
                log::debug!("Stats refresh failed: {}", e);
            }
            WorkerResponse::SearchResults { keyword, result } => {
                search_events::handle_search_results(self, keyword, result);
            }
            WorkerResponse::Batch(event) => batch_events::apply_event(self, event),
            WorkerResponse::BatchRejected(message) => {
                batch_events::handle_rejected(self, &message);
            }
            WorkerResponse::Leaderboard(result) => {
                leaderboard_events::handle_leaderboard_response(self, result);
            }
            WorkerResponse::Submitted(result) => {
                submit_events::handle_submit_response(self, result);
            }
            WorkerResponse::Crashed(message) => {
                self.batch.reset();
                self.submit.finish(false);
                self.notification
                    .show_error(&format!("Worker crashed: {}", message));
            }
        }
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
