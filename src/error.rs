use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum MintError {
    /// Generator was configured with a malformed length range.
    #[error("invalid length range [{min}, {max}]: bounds must be positive and min <= max")]
    InvalidLengthRange { min: usize, max: usize },

    #[error("Configuration error: {0}")]
    Config(#[from] figment::Error),

    /// The backing store could not be opened, read, or written.
    #[error("Storage unavailable: {0}")]
    Storage(#[from] SqlxError),
}
