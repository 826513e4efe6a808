//! quotebatch library - random quote terminal client with paced batch copy
//!
//! This library exposes the core functionality of quotebatch for the binary
//! and for testing purposes.

pub mod app;
pub mod batch;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod headless;
pub mod help;
pub mod leaderboard;
pub mod notification;
pub mod quote;
pub mod search;
pub mod source;
pub mod submit;

#[cfg(test)]
pub mod test_utils;
pub mod theme;
pub mod widgets;
pub mod worker;

// Re-export commonly used types for convenience
pub use app::App;
pub use config::Config;
