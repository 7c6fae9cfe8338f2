use jiff::civil::Date;
use thiserror::Error;

use postcare_core::error::CoreError;
use postcare_storage::error::StorageError;

#[derive(Debug, Error)]
pub enum CheckInError {
    #[error("invalid check-in data: {0}")]
    Validation(String),

    #[error("a check-in already exists for {date}")]
    Conflict { date: Date },

    #[error("{0}")]
    NotFound(String),

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

impl From<CoreError> for CheckInError {
    fn from(e: CoreError) -> Self {
        CheckInError::Validation(e.to_string())
    }
}
