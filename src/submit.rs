//! Quote submission
//!
//! Two-field form posted to the service's public `/submit` endpoint. The
//! quote goes into the moderation queue; nothing shows up until approved.

pub mod submit_events;
pub mod submit_render;
mod submit_state;

pub use submit_state::{SubmitField, SubmitState};
