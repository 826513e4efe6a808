use arboard::Clipboard;

use super::backend::{ClipboardError, ClipboardResult};

pub fn copy(text: &str) -> ClipboardResult {
    let mut clipboard =
        Clipboard::new().map_err(|e| ClipboardError::SystemUnavailable(e.to_string()))?;

    clipboard
        .set_text(text)
        .map_err(|e| ClipboardError::WriteError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_returns_result() {
        let result = copy("test");
        assert!(result.is_ok() || matches!(result, Err(ClipboardError::SystemUnavailable(_))));
    }
}
