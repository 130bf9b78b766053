//! JSON lines output for tsdg.
//!
//! Each row becomes one JSON object whose keys follow the header order:
//! `timestamp`, the tag names, then the column names. Nulls are written as
//! JSON `null`.
//!
//! # Example
//!
//! ```ignore
//! use tsdg_jsonl::JsonlPopulator;
//! use tsdg_generator::TimeSeriesGenerator;
//!
//! let generator = TimeSeriesGenerator::new(&config)?;
//! let metrics = JsonlPopulator::new()
//!     .populate(&generator.header(), generator.rows()?, "/path/to/output.jsonl")?;
//! ```

mod error;
pub mod forward;
mod populator;

pub use error::JsonlPopulatorError;
pub use forward::{JsonRow, JsonValue};
pub use populator::{JsonlPopulator, DEFAULT_BUFFER_SIZE};
pub use tsdg_core::PopulateMetrics;
