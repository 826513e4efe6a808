//! Shared test utilities
//!
//! Common fixtures and helper functions used across multiple test modules.

#[cfg(test)]
pub mod test_helpers {
    use std::sync::mpsc::{self, Sender};

    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{Frame, Terminal, backend::TestBackend, text::Span};
    use tokio::sync::mpsc::{UnboundedReceiver, unbounded_channel};

    use crate::app::App;
    use crate::batch::BatchHandle;
    use crate::config::Config;
    use crate::source::Quote;
    use crate::worker::{WorkerChannels, WorkerRequest, WorkerResponse};

    /// Helper to create App with default config for tests
    pub fn test_app() -> App {
        App::new(&Config::default())
    }

    /// App wired to in-memory channels instead of a worker thread.
    ///
    /// Returns the app, the receiving end of its requests, and a sender
    /// for injecting worker responses.
    pub fn app_with_channels() -> (App, UnboundedReceiver<WorkerRequest>, Sender<WorkerResponse>) {
        let (request_tx, request_rx) = unbounded_channel();
        let (response_tx, response_rx) = mpsc::channel();
        let mut app = test_app();
        app.attach_worker(WorkerChannels {
            request_tx,
            response_rx,
            batch: BatchHandle::default(),
        });
        (app, request_rx, response_tx)
    }

    /// App showing `content` by `author` as the current quote
    pub fn app_with_quote(content: &str, author: &str) -> App {
        let mut app = test_app();
        app.quote.set_quote(Quote::new(content, author));
        app
    }

    /// Drain every pending request
    pub fn drain_requests(rx: &mut UnboundedReceiver<WorkerRequest>) -> Vec<WorkerRequest> {
        let mut requests = Vec::new();
        while let Ok(request) = rx.try_recv() {
            requests.push(request);
        }
        requests
    }

    /// Helper to create a KeyEvent without modifiers
    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    /// Helper to create a KeyEvent with specific modifiers
    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    /// Draw once into a fresh `TestBackend` terminal
    pub fn render_to_terminal<F>(width: u16, height: u16, draw: F) -> Terminal<TestBackend>
    where
        F: FnOnce(&mut Frame),
    {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(draw).unwrap();
        terminal
    }

    /// Buffer contents as plain text, one line per row.
    ///
    /// Cells hidden behind wide (CJK) characters are skipped so rendered
    /// quotes can be matched with `contains`.
    pub fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let area = buffer.area;
        let mut text = String::new();

        for y in area.top()..area.bottom() {
            let mut x = area.left();
            while x < area.right() {
                let symbol = buffer[(x, y)].symbol();
                text.push_str(symbol);
                x += Span::raw(symbol).width().max(1) as u16;
            }
            text.push('\n');
        }
        text
    }
}
