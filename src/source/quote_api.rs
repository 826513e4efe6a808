//! Async quote API client
//!
//! Uses reqwest for HTTP. The `/api` endpoints answer JSON; bodies are read as
//! text first so decode failures surface as `SourceError::Parse` instead of
//! being folded into transport errors. `/submit` is the public HTML form and
//! reports rejections inside the page it renders.

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use super::submission::Submission;
use super::types::{Leaderboard, Quote, QuoteList, SiteStats};
use super::{ItemSource, SourceError};

/// Error texts the submit form renders, with their meaning
const SUBMIT_REJECTIONS: &[(&str, &str)] = &[
    ("该语句已存在", "this quote already exists"),
    ("语句内容不能超过2000字", "quote is longer than 2000 characters"),
    ("署名不能超过50字", "author is longer than 50 characters"),
];

/// Async client for the public quote endpoints
#[derive(Debug, Clone)]
pub struct QuoteApiClient {
    client: Client,
    base_url: String,
}

impl QuoteApiClient {
    /// Create a client rooted at `base_url` (e.g. `http://127.0.0.1:5000`)
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /api/random`
    pub async fn random_quote(&self) -> Result<Quote, SourceError> {
        self.get_json("/api/random", &[]).await
    }

    /// `GET /api/random/<count>`
    ///
    /// The service clamps `count` to its own limits and may return fewer
    /// quotes than requested.
    pub async fn random_quotes(&self, count: usize) -> Result<Vec<Quote>, SourceError> {
        let list: QuoteList = self.get_json(&format!("/api/random/{}", count), &[]).await?;
        Ok(list.sentences)
    }

    /// `GET /api/search?keyword=<keyword>`
    pub async fn search(&self, keyword: &str) -> Result<Vec<Quote>, SourceError> {
        let list: QuoteList = self.get_json("/api/search", &[("keyword", keyword)]).await?;
        Ok(list.sentences)
    }

    /// `GET /api/stats`
    pub async fn stats(&self) -> Result<SiteStats, SourceError> {
        self.get_json("/api/stats", &[]).await
    }

    /// `GET /api/leaderboard?limit=<limit>`
    pub async fn leaderboard(&self, limit: u32) -> Result<Leaderboard, SourceError> {
        let limit = limit.to_string();
        self.get_json("/api/leaderboard", &[("limit", limit.as_str())])
            .await
    }

    /// `POST /submit` as the public form does. The quote is queued for review.
    pub async fn submit(&self, submission: &Submission) -> Result<(), SourceError> {
        let url = format!("{}/submit", self.base_url);

        #[cfg(debug_assertions)]
        log::debug!("POST {}", url);

        let request = self.client.post(&url).form(&[
            ("content", submission.content()),
            ("author", submission.author()),
        ]);
        let page = self.read_body(request).await?;

        match SUBMIT_REJECTIONS
            .iter()
            .find(|(marker, _)| page.contains(*marker))
        {
            Some((_, meaning)) => Err(SourceError::Rejected {
                message: meaning.to_string(),
            }),
            None => Ok(()),
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, SourceError> {
        let url = format!("{}{}", self.base_url, path);

        #[cfg(debug_assertions)]
        log::debug!("GET {}", url);

        let mut request = self.client.get(&url);
        if !query.is_empty() {
            request = request.query(query);
        }

        let body = self.read_body(request).await?;

        serde_json::from_str(&body).map_err(|e| SourceError::Parse {
            message: format!("{} from {}", e, path),
        })
    }

    /// Send `request` and return the body of a success response
    async fn read_body(&self, request: RequestBuilder) -> Result<String, SourceError> {
        let response = request.send().await.map_err(|e| SourceError::Network {
            message: e.to_string(),
        })?;

        if !response.status().is_success() {
            let code = response.status().as_u16();
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(SourceError::Api { code, message });
        }

        response.text().await.map_err(|e| SourceError::Network {
            message: e.to_string(),
        })
    }
}

impl ItemSource for QuoteApiClient {
    /// Only the quote text is copied; authors stay on the page
    async fn fetch_batch(&self, count: usize) -> Result<Vec<String>, SourceError> {
        let quotes = self.random_quotes(count).await?;
        Ok(quotes.into_iter().map(|quote| quote.content).collect())
    }
}

#[cfg(test)]
#[path = "quote_api_tests.rs"]
mod quote_api_tests;
