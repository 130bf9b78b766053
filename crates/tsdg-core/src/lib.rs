//! Core types for tsdg.
//!
//! This crate provides the foundational types shared by the generator and
//! the writers:
//!
//! - [`GeneratorConfig`] - Configuration loaded from YAML
//! - [`DataType`] - Column types and value coercion
//! - [`Value`] / [`Row`] - Generated cells and output records
//! - [`ConfigError`] - Everything that can fail before generation starts
//! - [`PopulateMetrics`] - Throughput figures reported by every writer
//!
//! # Architecture
//!
//! ```text
//! tsdg-core (this crate)
//!    │
//!    ├─── tsdg-generator  (distributions, schedule, engine)
//!    │
//!    ├─── tsdg-csv        (Row → CSV)
//!    └─── tsdg-jsonl      (Row → JSON lines)
//! ```

pub mod duration;
pub mod error;
pub mod metrics;
pub mod schema;
pub mod types;
pub mod values;

// Re-exports for convenience
pub use duration::parse_duration_to_secs;
pub use error::ConfigError;
pub use metrics::{PopulateMetrics, PROGRESS_INTERVAL};
pub use schema::{
    ColumnConfig, DistributionConfig, DistributionSpec, GeneratorConfig, Number, StepConfig,
    TagConfig, WeightedValue, DISTRIBUTION_TYPES,
};
pub use types::DataType;
pub use values::{format_timestamp, Row, Value};
