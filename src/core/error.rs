//! Error types for the logging backend

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Sink write failure
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Unknown severity name
    #[error("invalid log level: '{0}'")]
    InvalidLevel(String),
}
