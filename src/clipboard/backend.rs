use thiserror::Error;

use crate::config::ClipboardBackend;

use super::{osc52, system};

pub type ClipboardResult = Result<(), ClipboardError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    #[error("system clipboard unavailable: {0}")]
    SystemUnavailable(String),

    #[error("clipboard write rejected: {0}")]
    WriteError(String),
}

pub fn copy_to_clipboard(text: &str, backend: ClipboardBackend) -> ClipboardResult {
    match backend {
        ClipboardBackend::System => system::copy(text),
        ClipboardBackend::Osc52 => osc52::copy(text),
        ClipboardBackend::Auto => system::copy(text).or_else(|err| {
            log::debug!("System clipboard failed ({}), falling back to OSC 52", err);
            osc52::copy(text)
        }),
    }
}

/// Destination for a single clipboard write.
///
/// Writes are atomic steps: an implementation either stores the whole text or
/// reports why it could not.
pub trait ClipboardSink: Send + Sync {
    fn write(&self, text: &str) -> ClipboardResult;
}

/// Clipboard sink backed by the configured [`ClipboardBackend`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BackendSink {
    backend: ClipboardBackend,
}

impl BackendSink {
    pub fn new(backend: ClipboardBackend) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> ClipboardBackend {
        self.backend
    }
}

impl ClipboardSink for BackendSink {
    fn write(&self, text: &str) -> ClipboardResult {
        copy_to_clipboard(text, self.backend)
    }
}
