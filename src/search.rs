//! Keyword search
//!
//! Sends `GET /api/search` through the worker and lists the matching quotes.
//! Picking a result makes it the current quote.

pub mod search_events;
pub mod search_render;
mod search_state;

pub use search_state::SearchState;
