//! Library error type
//!
//! Binaries wrap these in `anyhow` with context; library callers can match
//! on the variants (most usefully `MissingField`).

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// A `Required` field was never set.
    #[error("required field `{field}` is not set")]
    MissingField { field: &'static str },

    /// Encoding or decoding failed inside serde_json.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Reading or writing a file failed.
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config error: {0}")]
    Config(String),

    /// The project package could not be turned into a matcher.
    #[error("invalid package pattern: {0}")]
    Pattern(#[from] regex::Error),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
