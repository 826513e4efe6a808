use std::str::FromStr;

use super::types::BatchError;

/// Smallest accepted batch size
pub const MIN_BATCH_COUNT: i64 = 1;

/// Largest accepted batch size
pub const MAX_BATCH_COUNT: i64 = 50;

/// A user-submitted batch size, not yet validated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchRequest {
    pub count: i64,
}

impl BatchRequest {
    pub fn new(count: i64) -> Self {
        Self { count }
    }

    /// Returns the number of items to copy, or `InvalidRequest` when the
    /// count falls outside `MIN_BATCH_COUNT..=MAX_BATCH_COUNT`
    pub fn validate(&self) -> Result<usize, BatchError> {
        if (MIN_BATCH_COUNT..=MAX_BATCH_COUNT).contains(&self.count) {
            Ok(self.count as usize)
        } else {
            Err(BatchError::InvalidRequest(format!(
                "count must be between {} and {}, got {}",
                MIN_BATCH_COUNT, MAX_BATCH_COUNT, self.count
            )))
        }
    }
}

/// Parses prompt or CLI text. Anything but a plain integer is rejected
/// (no truncation of `"12abc"` or `"3.5"`); range checking is left to
/// [`BatchRequest::validate`].
impl FromStr for BatchRequest {
    type Err = BatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        trimmed
            .parse::<i64>()
            .map(BatchRequest::new)
            .map_err(|_| {
                BatchError::InvalidRequest(format!("'{}' is not a whole number", trimmed))
            })
    }
}
