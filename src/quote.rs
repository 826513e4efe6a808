//! Quote panel: the current random quote and the site counters

pub mod quote_render;
mod quote_state;

pub use quote_state::{QuoteState, QuoteStatus};
