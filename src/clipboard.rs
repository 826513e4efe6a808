//! Clipboard module for quotebatch
//!
//! Provides clipboard functionality with support for:
//! - System clipboard (via arboard)
//! - OSC 52 escape sequences (for remote terminals)
//! - Auto mode (system with OSC 52 fallback)
//!
//! The [`ClipboardSink`] trait is the seam the batch controller writes through.

mod backend;
pub mod clipboard_events;
mod osc52;
mod system;

pub use backend::{BackendSink, ClipboardError, ClipboardResult, ClipboardSink, copy_to_clipboard};
