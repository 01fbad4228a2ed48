use thiserror::Error;

/// Main error type for the stats query service
#[derive(Error, Debug)]
pub enum StatsError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    // Database errors
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    // Request validation errors, reported to the caller as a structured payload
    #[error("{0}")]
    InvalidRequest(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl StatsError {
    pub fn invalid(message: impl Into<String>) -> Self {
        StatsError::InvalidRequest(message.into())
    }

    pub fn is_invalid_request(&self) -> bool {
        matches!(self, StatsError::InvalidRequest(_))
    }
}

/// Result type alias for StatsError
pub type Result<T> = std::result::Result<T, StatsError>;
