//! Error types for the JSONL writer.

use thiserror::Error;

/// Errors that can occur while writing JSONL output.
#[derive(Error, Debug)]
pub enum JsonlPopulatorError {
    /// IO error, including failures of the underlying sink.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON serialization error: {0}")]
    Json(serde_json::Error),
}

impl From<serde_json::Error> for JsonlPopulatorError {
    fn from(error: serde_json::Error) -> Self {
        if error.is_io() {
            // Unwraps to the sink's own io::Error.
            Self::Io(error.into())
        } else {
            Self::Json(error)
        }
    }
}
