//! Quote API access
//!
//! Typed client for the remote quote service plus the [`ItemSource`] seam the
//! batch controller fetches its payload through.

mod quote_api;
mod submission;
mod types;

use std::future::Future;

use thiserror::Error;

pub use quote_api::QuoteApiClient;
pub use submission::{
    ANONYMOUS_AUTHOR, MAX_AUTHOR_CHARS, MAX_CONTENT_CHARS, Submission, SubmissionError,
};
pub use types::{Leaderboard, LeaderboardEntry, LeaderboardStats, Quote, SiteStats};

/// Errors that can occur while talking to the quote service
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SourceError {
    /// Transport failure (connection refused, DNS, TLS, reset)
    #[error("Network error: {message}")]
    Network { message: String },

    /// The service answered with a non-success status
    #[error("API error ({code}): {message}")]
    Api { code: u16, message: String },

    /// The response body was not the expected JSON
    #[error("Parse error: {message}")]
    Parse { message: String },

    /// The service refused a submission (duplicate or failed form check)
    #[error("Submission rejected: {message}")]
    Rejected { message: String },
}

/// Supplies the ordered payload of a batch run.
///
/// Returning fewer than `count` items is not an error; only the caller decides
/// what an empty batch means.
pub trait ItemSource: Send + Sync {
    fn fetch_batch(
        &self,
        count: usize,
    ) -> impl Future<Output = Result<Vec<String>, SourceError>> + Send;
}
