//! Error types for configuration, logging and terminal setup.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BoardError {
    /// I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file could not be (de)serialized
    #[error("Config format error: {0}")]
    ConfigFormat(#[from] serde_json::Error),

    /// A setting is out of its accepted range
    #[error("Invalid setting {field}: {reason}")]
    InvalidSetting {
        field: &'static str,
        reason: &'static str,
    },

    /// Logger could not be installed
    #[error("Logging error: {0}")]
    Logging(String),
}

pub type BoardResult<T> = Result<T, BoardError>;
