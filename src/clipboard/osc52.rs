//! OSC 52 clipboard backend
//!
//! Clipboard access via terminal escape sequences, for SSH and tmux sessions
//! where no system clipboard is reachable.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use std::io::{self, Write};

use super::backend::{ClipboardError, ClipboardResult};

/// Copy text by writing an OSC 52 sequence to stdout.
pub fn copy(text: &str) -> ClipboardResult {
    let sequence = encode_osc52(text);
    let mut stdout = io::stdout().lock();

    stdout
        .write_all(sequence.as_bytes())
        .and_then(|_| stdout.flush())
        .map_err(|e| ClipboardError::WriteError(e.to_string()))
}

/// Format: `\x1b]52;c;{base64}\x07` (c = clipboard selection, BEL terminator)
pub fn encode_osc52(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text))
}
