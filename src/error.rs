//! Error types for the guessing game crate

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the guessing game crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("{what} must not be empty")]
    EmptyText { what: &'static str },

    #[error("no saved game found at {path:?}")]
    SaveNotFound { path: PathBuf },

    #[error("saved game at {path:?} is corrupt: {reason}")]
    CorruptSave { path: PathBuf, reason: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to {operation}: {message}")]
    SerializationContext { operation: String, message: String },

    #[error("input closed while waiting for an answer")]
    InputClosed,

    #[error("scripted oracle ran out of answers at prompt '{prompt}'")]
    ScriptExhausted { prompt: String },

    #[error("scripted oracle expected a {expected} answer at prompt '{prompt}'")]
    ScriptMismatch {
        expected: &'static str,
        prompt: String,
    },
}

impl Error {
    /// Attach the offending file to a structural validation failure.
    pub(crate) fn corrupt(path: &std::path::Path, reason: impl Into<String>) -> Self {
        Error::CorruptSave {
            path: path.to_path_buf(),
            reason: reason.into(),
        }
    }
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
