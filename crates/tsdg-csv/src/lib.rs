//! CSV output for tsdg.
//!
//! Rows are written as `timestamp, tag values..., column values...` with
//! timestamps in RFC 3339 (second precision, `Z` suffix) and nulls as empty
//! fields.
//!
//! # Example
//!
//! ```ignore
//! use tsdg_csv::CsvPopulator;
//! use tsdg_generator::TimeSeriesGenerator;
//!
//! let generator = TimeSeriesGenerator::new(&config)?;
//! let metrics = CsvPopulator::new()
//!     .populate(&generator.header(), generator.rows()?, "/path/to/output.csv")?;
//! ```

mod error;
pub mod forward;
mod populator;

pub use error::CsvPopulatorError;
pub use forward::CsvValue;
pub use populator::{CsvPopulator, DEFAULT_BUFFER_SIZE};
pub use tsdg_core::PopulateMetrics;
