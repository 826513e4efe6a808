//! Shared layout helpers for overlays

pub mod popup;
