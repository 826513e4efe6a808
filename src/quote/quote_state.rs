use crate::source::{Quote, SiteStats};

/// Load status of the quote panel
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum QuoteStatus {
    /// Nothing requested yet
    #[default]
    Empty,
    Loading,
    Loaded,
    Failed(String),
}

/// The quote on screen plus the last known site counters
#[derive(Debug, Default)]
pub struct QuoteState {
    current: Option<Quote>,
    status: QuoteStatus,
    stats: Option<SiteStats>,
}

impl QuoteState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&Quote> {
        self.current.as_ref()
    }

    pub fn status(&self) -> &QuoteStatus {
        &self.status
    }

    pub fn stats(&self) -> Option<SiteStats> {
        self.stats
    }

    /// A fetch is in flight; the previous quote stays visible meanwhile
    pub fn set_loading(&mut self) {
        self.status = QuoteStatus::Loading;
    }

    pub fn set_quote(&mut self, quote: Quote) {
        self.current = Some(quote);
        self.status = QuoteStatus::Loaded;
    }

    pub fn set_error(&mut self, message: String) {
        self.status = QuoteStatus::Failed(message);
    }

    pub fn set_stats(&mut self, stats: SiteStats) {
        self.stats = Some(stats);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loading_keeps_previous_quote() {
        let mut state = QuoteState::new();
        state.set_quote(Quote::new("a", "b"));
        state.set_loading();

        assert_eq!(state.status(), &QuoteStatus::Loading);
        assert_eq!(state.current(), Some(&Quote::new("a", "b")));
    }

    #[test]
    fn test_error_then_success() {
        let mut state = QuoteState::new();
        state.set_error("Network error: refused".to_string());
        assert!(matches!(state.status(), QuoteStatus::Failed(_)));

        state.set_quote(Quote::new("ok", ""));
        assert_eq!(state.status(), &QuoteStatus::Loaded);
    }
}
