//! Error types for the CSV writer.

use thiserror::Error;

/// Errors that can occur while writing CSV output.
#[derive(Error, Debug)]
pub enum CsvPopulatorError {
    /// IO error, including failures of the underlying sink.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV error.
    #[error("CSV error: {0}")]
    Csv(csv::Error),
}

impl From<csv::Error> for CsvPopulatorError {
    fn from(error: csv::Error) -> Self {
        if !error.is_io_error() {
            return Self::Csv(error);
        }
        match error.into_kind() {
            csv::ErrorKind::Io(e) => Self::Io(e),
            other => Self::Io(std::io::Error::other(format!("{other:?}"))),
        }
    }
}
