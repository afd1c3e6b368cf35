use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("HTTP client error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("No content available for @{handle}")]
    NoContentError { handle: String },
}

pub type Result<T> = std::result::Result<T, TrackerError>;
