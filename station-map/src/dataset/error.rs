//! Dataset load error types.

use std::path::PathBuf;

/// Errors that can occur while loading the station dataset.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Remote source returned an error status
    #[error("dataset source returned {status}: {message}")]
    Status { status: u16, message: String },

    /// Dataset file could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Dataset is not a JSON array of station records
    #[error("JSON parse error: {message}")]
    Json { message: String },
}
