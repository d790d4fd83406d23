//! Core error types for ursinity-core.
//!
//! The math and timer modules are total and never fail; everything here
//! comes from the filesystem or from configuration handling. Front ends
//! collect all of it into [`CoreError`] through [`Result`].

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Core error type for ursinity-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// File helper errors
    #[error("File error: {0}")]
    File(#[from] FileError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Errors raised by the file helpers.
///
/// Splits the single "something went wrong" class of the sentinel helpers
/// into the cases callers usually want to react to differently.
#[derive(Error, Debug)]
pub enum FileError {
    #[error("No such file or directory: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Permission denied: {}", path.display())]
    PermissionDenied { path: PathBuf },

    /// The path cannot name a file, e.g. it is empty or ends in `..`.
    #[error("Invalid path: '{}'", path.display())]
    InvalidPath { path: PathBuf },

    #[error("Not a directory: {}", path.display())]
    NotADirectory { path: PathBuf },

    /// A file operation was pointed at a directory.
    #[error("Is a directory: {}", path.display())]
    IsADirectory { path: PathBuf },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FileError {
    /// Classify an `io::Error` raised while operating on `path`.
    pub fn from_io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            io::ErrorKind::NotFound => FileError::NotFound { path },
            io::ErrorKind::PermissionDenied => FileError::PermissionDenied { path },
            io::ErrorKind::InvalidInput => FileError::InvalidPath { path },
            io::ErrorKind::NotADirectory => FileError::NotADirectory { path },
            io::ErrorKind::IsADirectory => FileError::IsADirectory { path },
            _ => FileError::Io { path, source },
        }
    }

    /// The path the failed operation was addressing.
    pub fn path(&self) -> &std::path::Path {
        match self {
            FileError::NotFound { path }
            | FileError::PermissionDenied { path }
            | FileError::InvalidPath { path }
            | FileError::NotADirectory { path }
            | FileError::IsADirectory { path }
            | FileError::Io { path, .. } => path,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, FileError::NotFound { .. })
    }
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {}: {message}", path.display())]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {}: {message}", path.display())]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Key does not exist in the configuration schema
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::ParseFailed(err.to_string())
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
