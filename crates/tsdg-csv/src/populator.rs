//! CSV writer for generated rows.

use crate::error::CsvPopulatorError;
use crate::forward::CsvValue;
use csv::Writer;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, info};
use tsdg_core::{PopulateMetrics, Row};

/// Default buffer size for CSV writing.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// Writes a row stream as CSV.
#[derive(Debug, Clone)]
pub struct CsvPopulator {
    include_header: bool,
}

impl Default for CsvPopulator {
    fn default() -> Self {
        Self::new()
    }
}

impl CsvPopulator {
    /// Create a new CSV populator. A header row is written by default.
    pub fn new() -> Self {
        Self {
            include_header: true,
        }
    }

    /// Set whether to include a header row in the CSV output.
    pub fn with_header(mut self, include_header: bool) -> Self {
        self.include_header = include_header;
        self
    }

    /// Write every row to a CSV file at `output_path`, replacing it.
    ///
    /// # Arguments
    ///
    /// * `header` - Column names: timestamp, tags, then columns
    /// * `rows` - The row stream; its length is used for progress reporting
    /// * `output_path` - Path to the output CSV file
    pub fn populate<I, P>(
        &self,
        header: &[String],
        rows: I,
        output_path: P,
    ) -> Result<PopulateMetrics, CsvPopulatorError>
    where
        I: ExactSizeIterator<Item = Row>,
        P: AsRef<Path>,
    {
        let start_time = Instant::now();
        let output_path = output_path.as_ref();
        info!(
            "Generating CSV file '{}' with {} rows",
            output_path.display(),
            rows.len()
        );

        let file = File::create(output_path)?;
        let buf_writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file);
        let mut metrics = self.write_rows(header, rows, buf_writer)?;

        metrics.file_size_bytes = std::fs::metadata(output_path)?.len();
        metrics.total_duration = start_time.elapsed();

        info!(
            "CSV generation complete: {} rows, {} bytes in {:?} ({:.2} rows/sec)",
            metrics.rows_written,
            metrics.file_size_bytes,
            metrics.total_duration,
            metrics.rows_per_second()
        );

        Ok(metrics)
    }

    /// Write every row as CSV into `sink` and flush it.
    ///
    /// `file_size_bytes` is left at zero; `total_duration` covers this call.
    pub fn write_rows<I, W>(
        &self,
        header: &[String],
        mut rows: I,
        sink: W,
    ) -> Result<PopulateMetrics, CsvPopulatorError>
    where
        I: ExactSizeIterator<Item = Row>,
        W: Write,
    {
        let start_time = Instant::now();
        let mut metrics = PopulateMetrics::default();
        let total = rows.len();
        let mut writer = Writer::from_writer(sink);

        let mut generation_time = Duration::ZERO;
        let mut write_time = Duration::ZERO;

        if self.include_header {
            let write_start = Instant::now();
            writer.write_record(header)?;
            write_time += write_start.elapsed();
        }

        loop {
            let gen_start = Instant::now();
            let Some(row) = rows.next() else {
                break;
            };
            generation_time += gen_start.elapsed();

            let write_start = Instant::now();
            writer.write_record(row_to_csv_record(row))?;
            write_time += write_start.elapsed();

            metrics.rows_written += 1;
            if metrics.progress_due() {
                debug!("Written {}/{} rows", metrics.rows_written, total);
            }
        }

        writer.flush()?;
        let mut inner = writer
            .into_inner()
            .map_err(|e| CsvPopulatorError::Io(e.into_error()))?;
        inner.flush()?;

        metrics.total_duration = start_time.elapsed();
        metrics.generation_duration = generation_time;
        metrics.write_duration = write_time;
        Ok(metrics)
    }
}

/// Convert a row to a CSV record: timestamp, tag values, column values.
fn row_to_csv_record(row: Row) -> Vec<String> {
    let mut record = Vec::with_capacity(row.width());
    record.push(row.timestamp_rfc3339());
    record.extend(row.tags);
    record.extend(
        row.values
            .into_iter()
            .map(|v| CsvValue::from(v).into_inner()),
    );
    record
}
