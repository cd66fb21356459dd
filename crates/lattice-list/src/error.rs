//! Error types for list configuration.
//!
//! Rendering never fails; every error here is raised while a list is being
//! set up (parsing options, validating a grid or pagination spec, loading a
//! configuration file).

use std::path::PathBuf;

/// Result type alias for list operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while configuring a list.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An option was given a value outside its enumeration.
    #[error("Invalid value for option '{option}': {message}")]
    InvalidValue { option: String, message: String },

    /// Grid specification cannot be laid out.
    #[error("Invalid grid: {0}")]
    InvalidGrid(String),

    /// Pagination specification cannot slice the data source.
    #[error("Invalid pagination: {0}")]
    InvalidPagination(String),

    /// TOML configuration could not be parsed.
    #[error("Failed to parse list configuration: {0}")]
    Config(#[from] toml::de::Error),

    /// File I/O error.
    #[error("Failed to read list configuration '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create a value error.
    pub fn invalid_value(option: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            option: option.into(),
            message: message.into(),
        }
    }

    /// Create a grid error.
    pub fn invalid_grid(message: impl Into<String>) -> Self {
        Self::InvalidGrid(message.into())
    }

    /// Create a pagination error.
    pub fn invalid_pagination(message: impl Into<String>) -> Self {
        Self::InvalidPagination(message.into())
    }

    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
