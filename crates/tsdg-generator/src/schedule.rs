//! Timestamp schedule.
//!
//! A schedule covers `[start, end)`: the end instant itself is never
//! emitted.

use chrono::{DateTime, Duration, Utc};
use std::iter::FusedIterator;
use tsdg_core::ConfigError;

/// Ordered timestamps `start, start + step, …` strictly before `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schedule {
    start: DateTime<Utc>,
    step_secs: i64,
    len: u64,
}

impl Schedule {
    /// Build a schedule from RFC 3339 bounds and a step in seconds.
    pub fn build(start: &str, end: &str, step_secs: i64) -> Result<Self, ConfigError> {
        let start = parse_timestamp(start)?;
        let end = parse_timestamp(end)?;
        Self::from_bounds(start, end, step_secs)
    }

    /// Build a schedule from already parsed bounds.
    pub fn from_bounds(
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        step_secs: i64,
    ) -> Result<Self, ConfigError> {
        if step_secs <= 0 {
            return Err(ConfigError::invalid(format!(
                "step must be positive, got {step_secs}s"
            )));
        }
        if end < start {
            return Err(ConfigError::invalid(format!(
                "end ({end}) is before start ({start})"
            )));
        }

        let span = end - start;
        let whole_secs = span.num_seconds();
        let has_fraction = span.subsec_nanos() > 0;
        let mut len = (whole_secs / step_secs) as u64;
        if whole_secs % step_secs > 0 || has_fraction {
            len += 1;
        }

        Ok(Self {
            start,
            step_secs,
            len,
        })
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// Number of timestamps, computed without iterating.
    pub fn len(&self) -> u64 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Lazily yield every timestamp in order.
    pub fn iter(&self) -> ScheduleIter {
        ScheduleIter {
            start: self.start,
            step_secs: self.step_secs,
            next: 0,
            len: self.len,
        }
    }
}

/// Iterator over the timestamps of a [`Schedule`].
#[derive(Debug, Clone)]
pub struct ScheduleIter {
    start: DateTime<Utc>,
    step_secs: i64,
    next: u64,
    len: u64,
}

impl Iterator for ScheduleIter {
    type Item = DateTime<Utc>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.len {
            return None;
        }
        // Bounded by the schedule span, so neither the product nor the sum
        // can overflow.
        let offset = Duration::seconds(self.step_secs * self.next as i64);
        self.next += 1;
        Some(self.start + offset)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.len - self.next) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ScheduleIter {}

impl FusedIterator for ScheduleIter {}

/// Parse an RFC 3339 timestamp. An explicit offset is required.
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, ConfigError> {
    DateTime::parse_from_rfc3339(value.trim())
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|source| ConfigError::TimestampParse {
            value: value.to_string(),
            source,
        })
}
