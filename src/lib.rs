//! tsdg library
//!
//! Generates synthetic multi-series time-series data from a YAML
//! configuration and writes it as CSV or JSON lines.
//!
//! # Crates
//!
//! - `tsdg_core` - Configuration, values, errors
//! - `tsdg_generator` - Distributions, schedule, tag permutations, row engine
//! - `tsdg_csv` - CSV writer
//! - `tsdg_jsonl` - JSON lines writer
//!
//! # CLI Usage
//!
//! ```bash
//! # Write a CSV file
//! tsdg generate --config metrics.yaml --output metrics.csv
//!
//! # JSON lines with a fixed seed
//! tsdg generate --config metrics.yaml --output metrics.jsonl --seed 7
//!
//! # Check a configuration and report its size
//! tsdg validate --config metrics.yaml
//! ```

pub mod args;
pub mod generate;

pub use args::{GenerateArgs, OutputFormat, ValidateArgs};
pub use generate::{run_generate, run_validate, Summary};
