use serde::Deserialize;

/// A single approved quote
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Quote {
    /// `/api/random` names this field `sentence`, every list endpoint `content`
    #[serde(alias = "sentence")]
    pub content: String,
    #[serde(default)]
    pub author: String,
}

impl Quote {
    pub fn new(content: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            author: author.into(),
        }
    }
}

/// Site-wide counters from `/api/stats`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct SiteStats {
    #[serde(default)]
    pub total_sentences: u64,
    #[serde(default)]
    pub today_views: u64,
    #[serde(default)]
    pub pending_sentences: u64,
    #[serde(default)]
    pub today_api_calls: u64,
}

/// Body of `/api/random/<count>` and `/api/search`
#[derive(Debug, Deserialize)]
pub(super) struct QuoteList {
    #[serde(default)]
    pub sentences: Vec<Quote>,
}

/// One row of `/api/leaderboard`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub author: String,
    pub count: u64,
}

/// Totals over approved submissions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct LeaderboardStats {
    #[serde(default)]
    pub total_approved_submissions: u64,
    #[serde(default)]
    pub total_authors: u64,
    #[serde(default)]
    pub top_submissions: u64,
}

/// Body of `/api/leaderboard`. Anonymous and system authors are never ranked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Leaderboard {
    #[serde(rename = "leaderboard", default)]
    pub entries: Vec<LeaderboardEntry>,
    #[serde(default)]
    pub stats: LeaderboardStats,
}
