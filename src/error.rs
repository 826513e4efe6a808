use thiserror::Error;

use crate::batch::BatchError;

/// Errors that end the process in headless mode
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Batch(#[from] BatchError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_error_is_transparent() {
        let error = AppError::from(BatchError::NoItemsAvailable);
        assert_eq!(error.to_string(), "No quotes available to copy");
    }

    #[test]
    fn test_runtime_build_failure_reads_as_io() {
        let error = AppError::from(std::io::Error::other("no reactor"));
        assert_eq!(error.to_string(), "IO error: no reactor");
    }
}
