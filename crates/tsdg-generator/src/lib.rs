//! Time-series row generator for tsdg.
//!
//! This crate turns a [`GeneratorConfig`](tsdg_core::GeneratorConfig) into a
//! lazy stream of [`Row`](tsdg_core::Row)s. Every tag permutation is an
//! independent series with its own distribution instances and random
//! streams, so a fixed seed reproduces the same output byte for byte.
//!
//! # Architecture
//!
//! ```text
//! GeneratorConfig (YAML)
//!        │
//!        ▼
//! ┌──────────────────────┐
//! │ TimeSeriesGenerator  │
//! │                      │
//! │  - schedule          │
//! │  - tags (TagSet)     │
//! │  - columns           │
//! │  - seed              │
//! └──────────┬───────────┘
//!            │ rows()
//!            ▼
//!      RowIterator ──► Row { timestamp, tags, values }
//! ```
//!
//! # Example
//!
//! ```rust
//! use tsdg_core::GeneratorConfig;
//! use tsdg_generator::TimeSeriesGenerator;
//!
//! let config = GeneratorConfig::from_yaml(r#"
//! start: 2024-01-01T00:00:00Z
//! end: 2024-01-01T00:01:00Z
//! step: 10s
//! seed: 42
//! tags:
//!   - name: host
//!     values: [web-1, web-2]
//! columns:
//!   - name: requests
//!     type: INTEGER
//!     distribution:
//!       type: mono_inc
//!       step: 1
//! "#).unwrap();
//!
//! let generator = TimeSeriesGenerator::new(&config).unwrap();
//! assert_eq!(generator.total_rows(), 12);
//! for row in generator.rows().unwrap() {
//!     println!("{row:?}");
//! }
//! ```
//!
//! # Distributions
//!
//! - `mono_inc` / `mono_dec` - Arithmetic sequences
//! - `random` - Uniform draw from a range, or from a `values` pool
//! - `uniform` - Uniform draw from a range
//! - `normal` - Gaussian draw
//! - `noise` - Random walk
//! - `periodic` - Sine wave over the step index
//! - `constant`, `constant_string`, `constant_int`, `constant_float` - Fixed value
//! - `weighted_preset` - Weighted draw from a fixed pool

pub mod column;
pub mod distributions;
pub mod generator;
pub mod schedule;
pub mod seed;
pub mod tags;

// Re-exports for convenience
pub use column::Column;
pub use distributions::{Distribution, ValueGenerator};
pub use generator::{generate, RowIterator, TimeSeriesGenerator, TIMESTAMP_COLUMN};
pub use schedule::{parse_timestamp, Schedule, ScheduleIter};
pub use tags::{Permutation, TagDimension, TagSet};
