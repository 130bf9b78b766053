//! JSONL writer for generated rows.

use crate::error::JsonlPopulatorError;
use crate::forward::JsonRow;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, info};
use tsdg_core::{PopulateMetrics, Row};

/// Default buffer size for JSONL writing.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// Writes a row stream as JSON lines.
#[derive(Debug, Clone, Default)]
pub struct JsonlPopulator;

impl JsonlPopulator {
    /// Create a new JSONL populator.
    pub fn new() -> Self {
        Self
    }

    /// Write every row to a JSONL file at `output_path`, replacing it.
    ///
    /// # Arguments
    ///
    /// * `header` - Object keys: timestamp, tags, then columns
    /// * `rows` - The row stream; its length is used for progress reporting
    /// * `output_path` - Path to the output JSONL file
    pub fn populate<I, P>(
        &self,
        header: &[String],
        rows: I,
        output_path: P,
    ) -> Result<PopulateMetrics, JsonlPopulatorError>
    where
        I: ExactSizeIterator<Item = Row>,
        P: AsRef<Path>,
    {
        let start_time = Instant::now();
        let output_path = output_path.as_ref();
        info!(
            "Generating JSONL file '{}' with {} rows",
            output_path.display(),
            rows.len()
        );

        let file = File::create(output_path)?;
        let buf_writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file);
        let mut metrics = self.write_rows(header, rows, buf_writer)?;

        metrics.file_size_bytes = std::fs::metadata(output_path)?.len();
        metrics.total_duration = start_time.elapsed();

        info!(
            "JSONL generation complete: {} rows, {} bytes in {:?} ({:.2} rows/sec)",
            metrics.rows_written,
            metrics.file_size_bytes,
            metrics.total_duration,
            metrics.rows_per_second()
        );

        Ok(metrics)
    }

    /// Write every row as one JSON object per line into `sink` and flush it.
    pub fn write_rows<I, W>(
        &self,
        header: &[String],
        mut rows: I,
        mut sink: W,
    ) -> Result<PopulateMetrics, JsonlPopulatorError>
    where
        I: ExactSizeIterator<Item = Row>,
        W: Write,
    {
        let start_time = Instant::now();
        let mut metrics = PopulateMetrics::default();
        let total = rows.len();

        let mut generation_time = Duration::ZERO;
        let mut write_time = Duration::ZERO;

        loop {
            let gen_start = Instant::now();
            let Some(row) = rows.next() else {
                break;
            };
            generation_time += gen_start.elapsed();

            let write_start = Instant::now();
            serde_json::to_writer(&mut sink, &JsonRow::new(header, &row))?;
            writeln!(sink)?;
            write_time += write_start.elapsed();

            metrics.rows_written += 1;
            if metrics.progress_due() {
                debug!("Written {}/{} rows", metrics.rows_written, total);
            }
        }

        sink.flush()?;

        metrics.total_duration = start_time.elapsed();
        metrics.generation_duration = generation_time;
        metrics.write_duration = write_time;
        Ok(metrics)
    }
}
