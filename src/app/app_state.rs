use crate::batch::BatchState;
use crate::config::{ClipboardBackend, Config};
use crate::leaderboard::LeaderboardState;
use crate::notification::NotificationState;
use crate::quote::QuoteState;
use crate::search::SearchState;
use crate::submit::SubmitState;
use crate::worker::{WorkerChannels, WorkerRequest};

pub struct App {
    pub quote: QuoteState,
    pub search: SearchState,
    pub batch: BatchState,
    pub leaderboard: LeaderboardState,
    pub submit: SubmitState,
    pub notification: NotificationState,
    pub clipboard_backend: ClipboardBackend,
    pub should_quit: bool,
    pub(super) worker: Option<WorkerChannels>,
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self {
            quote: QuoteState::new(),
            search: SearchState::new(),
            batch: BatchState::new(config.batch.default_count),
            leaderboard: LeaderboardState::new(),
            submit: SubmitState::new(),
            notification: NotificationState::new(),
            clipboard_backend: config.clipboard.backend,
            should_quit: false,
            worker: None,
        }
    }

    /// Connect the background worker. The batch handle is kept so cancel
    /// reaches the run without queueing behind other requests.
    pub fn attach_worker(&mut self, channels: WorkerChannels) {
        self.batch.set_handle(channels.batch.clone());
        self.worker = Some(channels);
    }

    /// Queue a request for the worker. Reports an error notification and
    /// returns false when no worker is listening.
    pub fn send_request(&mut self, request: WorkerRequest) -> bool {
        let Some(worker) = &self.worker else {
            self.notification
                .show_error("Quote service unavailable: worker not running");
            return false;
        };

        if worker.request_tx.send(request).is_err() {
            log::error!("Worker request channel closed");
            self.worker = None;
            self.notification
                .show_error("Quote service unavailable: worker stopped");
            return false;
        }
        true
    }

    pub fn request_random_quote(&mut self) {
        if self.send_request(WorkerRequest::RandomQuote) {
            self.quote.set_loading();
        }
    }

    pub fn request_stats(&mut self) {
        self.send_request(WorkerRequest::Stats);
    }

    /// Quit, cancelling any batch still running
    pub fn quit(&mut self) {
        if self.batch.request_cancel() {
            log::info!("Cancelled active batch on quit");
        }
        self.should_quit = true;
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BatchConfig;
    use crate::test_utils::test_helpers::{app_with_channels, drain_requests, test_app};

    #[test]
    fn test_app_initialization() {
        let app = test_app();

        assert!(!app.should_quit());
        assert!(app.quote.current().is_none());
        assert!(!app.search.is_visible());
        assert!(!app.batch.is_active());
        assert!(!app.leaderboard.is_visible());
        assert!(!app.submit.is_visible());
        assert_eq!(app.clipboard_backend, ClipboardBackend::Auto);
    }

    #[test]
    fn test_default_count_comes_from_config() {
        let config = Config {
            batch: BatchConfig { default_count: 25 },
            ..Config::default()
        };
        let mut app = App::new(&config);

        app.batch.open_prompt();
        assert_eq!(app.batch.prompt_text(), "25");
    }

    #[test]
    fn test_send_without_worker_reports_error() {
        let mut app = test_app();

        assert!(!app.send_request(WorkerRequest::Stats));
        assert!(
            app.notification
                .current_message()
                .unwrap()
                .contains("worker not running")
        );
    }

    #[test]
    fn test_send_after_worker_stopped() {
        let (mut app, requests, _responses) = app_with_channels();
        drop(requests);

        assert!(!app.send_request(WorkerRequest::RandomQuote));
        assert!(app.worker.is_none());
    }

    #[test]
    fn test_request_random_quote_marks_loading() {
        let (mut app, mut requests, _responses) = app_with_channels();

        app.request_random_quote();

        assert_eq!(drain_requests(&mut requests), vec![WorkerRequest::RandomQuote]);
        assert_eq!(app.quote.status(), &crate::quote::QuoteStatus::Loading);
    }

    #[test]
    fn test_quit_sets_flag() {
        let mut app = test_app();
        app.quit();
        assert!(app.should_quit());
    }
}
