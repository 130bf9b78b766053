//! CLI argument definitions.

use clap::{Args, ValueEnum};
use std::path::{Path, PathBuf};

/// Output file format.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Comma-separated values with a header row
    #[value(name = "csv")]
    Csv,
    /// One JSON object per line
    #[value(name = "jsonl")]
    Jsonl,
}

impl OutputFormat {
    /// Guess the format from a file extension, defaulting to CSV.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("jsonl") || ext.eq_ignore_ascii_case("ndjson") => {
                Self::Jsonl
            }
            _ => Self::Csv,
        }
    }
}

/// Arguments for `tsdg generate`.
#[derive(Args, Clone, Debug)]
pub struct GenerateArgs {
    /// Path to generator YAML file
    #[arg(long, short = 'c')]
    pub config: PathBuf,

    /// Output file (replaced if it exists)
    #[arg(long, short = 'o')]
    pub output: PathBuf,

    /// Output format (default: inferred from the output extension, else csv)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Random seed for deterministic generation (overrides the config file)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Omit the CSV header row
    #[arg(long)]
    pub no_header: bool,

    /// Dry-run mode: validate the configuration and report sizes without writing
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateArgs {
    /// The format to write, after extension inference.
    pub fn output_format(&self) -> OutputFormat {
        self.format
            .unwrap_or_else(|| OutputFormat::from_path(&self.output))
    }
}

/// Arguments for `tsdg validate`.
#[derive(Args, Clone, Debug)]
pub struct ValidateArgs {
    /// Path to generator YAML file
    #[arg(long, short = 'c')]
    pub config: PathBuf,
}
