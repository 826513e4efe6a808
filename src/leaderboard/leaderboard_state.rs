use crate::source::{Leaderboard, SourceError};

/// Rows requested per fetch, the service's own default
pub const LEADERBOARD_LIMIT: u32 = 20;

#[derive(Debug, Default)]
pub struct LeaderboardState {
    visible: bool,
    loading: bool,
    /// Last board received; kept across close so reopening shows it while refreshing
    board: Option<Leaderboard>,
    error: Option<String>,
}

impl LeaderboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self) {
        self.visible = true;
    }

    pub fn close(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn mark_loading(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Apply a worker response. A failure keeps the previous board.
    pub fn set_result(&mut self, result: Result<Leaderboard, SourceError>) {
        self.loading = false;
        match result {
            Ok(board) => {
                self.board = Some(board);
                self.error = None;
            }
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    pub fn board(&self) -> Option<&Leaderboard> {
        self.board.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
