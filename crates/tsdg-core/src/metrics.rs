//! Writer metrics shared by every output format.

use std::time::Duration;

/// Rows between two progress log lines.
pub const PROGRESS_INTERVAL: u64 = 10_000;

/// Metrics from a populate operation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PopulateMetrics {
    /// Number of rows written.
    pub rows_written: u64,
    /// Total time taken.
    pub total_duration: Duration,
    /// Time spent generating data.
    pub generation_duration: Duration,
    /// Time spent writing data.
    pub write_duration: Duration,
    /// Output size in bytes.
    pub file_size_bytes: u64,
}

impl PopulateMetrics {
    /// Calculate rows per second.
    pub fn rows_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.rows_written as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }

    /// Calculate bytes per second.
    pub fn bytes_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.file_size_bytes as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }

    /// Whether a progress line is due after the row just written.
    pub fn progress_due(&self) -> bool {
        self.rows_written > 0 && self.rows_written % PROGRESS_INTERVAL == 0
    }
}
