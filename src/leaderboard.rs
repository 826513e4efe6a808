//! Submission leaderboard
//!
//! Top submitters by approved quotes, fetched from `GET /api/leaderboard`.

pub mod leaderboard_events;
pub mod leaderboard_render;
mod leaderboard_state;

pub use leaderboard_state::{LEADERBOARD_LIMIT, LeaderboardState};
