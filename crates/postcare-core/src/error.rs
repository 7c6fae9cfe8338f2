use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("{value} is not a valid date format, expected YYYY-MM-DD")]
    InvalidDate { value: String },
}
