//! `generate` and `validate` command handlers.

use crate::args::{GenerateArgs, OutputFormat, ValidateArgs};
use anyhow::Context;
use std::fmt;
use std::path::Path;
use tsdg_core::{GeneratorConfig, PopulateMetrics};
use tsdg_csv::CsvPopulator;
use tsdg_generator::TimeSeriesGenerator;
use tsdg_jsonl::JsonlPopulator;

/// What a command did, for reporting.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub series: u64,
    pub timestamps: u64,
    pub total_rows: u64,
    pub seed: u64,
    /// Present only when rows were actually written
    pub metrics: Option<PopulateMetrics>,
}

impl Summary {
    fn planned(generator: &TimeSeriesGenerator) -> Self {
        Self {
            series: generator.series_count(),
            timestamps: generator.timestamp_count(),
            total_rows: generator.total_rows(),
            seed: generator.seed(),
            metrics: None,
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "series: {}, timestamps: {}, total rows: {}, seed: {}",
            self.series, self.timestamps, self.total_rows, self.seed
        )?;
        if let Some(metrics) = &self.metrics {
            write!(
                f,
                ", written: {} rows ({} bytes) in {:?}",
                metrics.rows_written, metrics.file_size_bytes, metrics.total_duration
            )?;
        }
        Ok(())
    }
}

fn load_generator(path: &Path, seed: Option<u64>) -> anyhow::Result<TimeSeriesGenerator> {
    let mut config = GeneratorConfig::from_file(path)
        .with_context(|| format!("Failed to load generator config from {path:?}"))?;
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }
    TimeSeriesGenerator::new(&config)
        .with_context(|| format!("Invalid generator config in {path:?}"))
}

/// Validate a configuration without writing anything.
pub fn run_validate(args: &ValidateArgs) -> anyhow::Result<Summary> {
    let generator = load_generator(&args.config, None)?;
    let summary = Summary::planned(&generator);
    tracing::info!("Configuration {:?} is valid: {}", args.config, summary);
    Ok(summary)
}

/// Generate rows and write them to the output file.
pub fn run_generate(args: &GenerateArgs) -> anyhow::Result<Summary> {
    let generator = load_generator(&args.config, args.seed)?;
    let mut summary = Summary::planned(&generator);

    if args.dry_run {
        tracing::info!("Dry run, nothing written: {}", summary);
        return Ok(summary);
    }

    let format = args.output_format();
    tracing::info!(
        "Generating {} rows as {:?} into {:?} (seed={})",
        summary.total_rows,
        format,
        args.output,
        summary.seed
    );

    let header = generator.header();
    let rows = generator.rows()?;
    let metrics = match format {
        OutputFormat::Csv => CsvPopulator::new()
            .with_header(!args.no_header)
            .populate(&header, rows, &args.output)
            .with_context(|| format!("Failed to write CSV to {:?}", args.output))?,
        OutputFormat::Jsonl => JsonlPopulator::new()
            .populate(&header, rows, &args.output)
            .with_context(|| format!("Failed to write JSONL to {:?}", args.output))?,
    };

    tracing::info!(
        "Generated {:?}: {} rows in {:?}",
        args.output,
        metrics.rows_written,
        metrics.total_duration
    );

    summary.metrics = Some(metrics);
    Ok(summary)
}
