use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("Print service rejected the job: {0}.")]
    Rejected(String),

    #[error("Print device is busy with another job: {0}.")]
    DeviceBusy(String),

    #[error("No completion signal from the print service within {0:?}.")]
    CompletionTimeout(Duration),

    #[error("I/O failure while rendering: {0}")]
    Io(#[from] std::io::Error),
}

impl DispatchError {
    /// A device that is already mid-job will finish ours with the rest of
    /// its queue; that answer is success, not failure.
    pub fn is_benign_busy(&self) -> bool {
        match self {
            DispatchError::DeviceBusy(_) => true,
            DispatchError::Rejected(message) => message.to_lowercase().contains("busy"),
            _ => false,
        }
    }

    /// Timeouts are worth retrying on a later run; everything else is a
    /// hard failure for the file in question.
    pub fn is_retryable(&self) -> bool {
        matches!(self, DispatchError::CompletionTimeout(_))
    }
}
