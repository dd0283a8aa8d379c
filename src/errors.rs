use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// Filesystem operation failed (create, write, list, read).
    ///
    /// The underlying `std::io::Error` is kept as-is so callers can inspect its kind.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// XML serialization failed
    #[error("XML error: {0}")]
    Xml(String),
    /// Failed to decode an input file (TOML records or configuration)
    #[error("Parse error: {0}")]
    ParseError(String),
    /// Invalid input value
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<toml::de::Error> for AppError {
    fn from(err: toml::de::Error) -> Self {
        AppError::ParseError(err.to_string())
    }
}

impl From<std::string::FromUtf8Error> for AppError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        AppError::Xml(err.to_string())
    }
}

// Custom type alias for Results in this application
pub type AppResult<T> = Result<T, AppError>;
