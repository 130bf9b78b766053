//! Generation engine producing the row stream.

use crate::column::Column;
use crate::distributions::Distribution;
use crate::schedule::{Schedule, ScheduleIter};
use crate::seed::{entropy_seed, slot_rngs};
use crate::tags::TagSet;
use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::Rng;
use std::collections::HashSet;
use std::iter::FusedIterator;
use tracing::{debug, info};
use tsdg_core::{ConfigError, GeneratorConfig, Row, Value};

/// Name of the leading timestamp column in every header.
pub const TIMESTAMP_COLUMN: &str = "timestamp";

/// Validated generation plan.
///
/// Building the generator checks the whole configuration: schedule bounds,
/// every column and its distribution, every tag dimension, and name
/// uniqueness. Once it exists, [`TimeSeriesGenerator::rows`] cannot fail on
/// account of the configuration.
#[derive(Debug, Clone)]
pub struct TimeSeriesGenerator {
    /// Timestamps to generate
    schedule: Schedule,
    /// Columns in declaration order
    columns: Vec<Column>,
    /// Tag dimensions in declaration order
    tags: TagSet,
    /// Master seed for every slot's random streams
    seed: u64,
    /// `|schedule| * |permutations|`
    total_rows: u64,
}

impl TimeSeriesGenerator {
    /// Validate `config` and build the generation plan.
    pub fn new(config: &GeneratorConfig) -> Result<Self, ConfigError> {
        let schedule = Schedule::build(&config.start, &config.end, config.step.to_secs()?)?;

        let columns = config
            .columns
            .iter()
            .map(Column::from_config)
            .collect::<Result<Vec<_>, _>>()?;

        for column in &columns {
            column.check_horizon(schedule.len())?;
        }

        let tags = TagSet::from_configs(&config.tags)?;
        validate_names(&tags, &columns)?;

        let total_rows = schedule
            .len()
            .checked_mul(tags.count())
            .ok_or_else(|| ConfigError::invalid("total row count overflows u64"))?;

        let seed = match config.seed {
            Some(seed) => seed,
            None => {
                let seed = entropy_seed();
                debug!(seed, "No seed configured, drew one from entropy");
                seed
            }
        };

        info!(
            "Number of tag combinations: {}, timestamps: {}, total rows: {}",
            tags.count(),
            schedule.len(),
            total_rows
        );

        Ok(Self {
            schedule,
            columns,
            tags,
            seed,
            total_rows,
        })
    }

    /// Replace the master seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn tags(&self) -> &TagSet {
        &self.tags
    }

    /// Number of series (tag permutations).
    pub fn series_count(&self) -> u64 {
        self.tags.count()
    }

    pub fn timestamp_count(&self) -> u64 {
        self.schedule.len()
    }

    /// Exact number of rows [`TimeSeriesGenerator::rows`] will yield.
    pub fn total_rows(&self) -> u64 {
        self.total_rows
    }

    /// Header: timestamp, tag names, then column names.
    pub fn header(&self) -> Vec<String> {
        std::iter::once(TIMESTAMP_COLUMN)
            .chain(self.tags.names())
            .chain(self.columns.iter().map(Column::name))
            .map(str::to_string)
            .collect()
    }

    /// Create a fresh row iterator.
    ///
    /// Every call instantiates a new set of distributions, one per column per
    /// series, so each iterator starts from the beginning of every sequence.
    pub fn rows(&self) -> Result<RowIterator, ConfigError> {
        let permutations = self.tags.expand();
        let column_count = self.columns.len();

        let mut series = Vec::with_capacity(permutations.len());
        for (series_index, permutation) in permutations.into_iter().enumerate() {
            let slots = self
                .columns
                .iter()
                .enumerate()
                .map(|(column_index, column)| {
                    let (rng, null_rng) =
                        slot_rngs(self.seed, series_index, column_index, column_count);
                    Ok(Slot {
                        distribution: column.instantiate()?,
                        rng,
                        null_rng,
                        null_probability: column
                            .is_nullable()
                            .then_some(column.null_probability()),
                    })
                })
                .collect::<Result<Vec<_>, ConfigError>>()?;

            series.push(Series {
                tags: permutation.values(),
                slots,
            });
        }

        debug!(
            "Instantiated {} distributions for {} series",
            series.len() * column_count,
            series.len()
        );

        Ok(RowIterator {
            timestamps: self.schedule.iter(),
            current: None,
            series,
            position: 0,
            remaining: self.total_rows,
        })
    }
}

/// Validate `config` and return its row stream.
pub fn generate(config: &GeneratorConfig) -> Result<RowIterator, ConfigError> {
    TimeSeriesGenerator::new(config)?.rows()
}

fn validate_names(tags: &TagSet, columns: &[Column]) -> Result<(), ConfigError> {
    let mut seen = HashSet::from([TIMESTAMP_COLUMN]);
    let names = tags
        .names()
        .into_iter()
        .chain(columns.iter().map(Column::name));
    for name in names {
        if !seen.insert(name) {
            return Err(ConfigError::invalid(format!(
                "name '{name}' is used more than once across timestamp, tags and columns"
            )));
        }
    }
    Ok(())
}

/// One column of one series: its distribution and private random streams.
#[derive(Debug)]
struct Slot {
    distribution: Distribution,
    rng: StdRng,
    null_rng: StdRng,
    null_probability: Option<f64>,
}

impl Slot {
    fn next(&mut self) -> Value {
        // The distribution advances even when the cell ends up null.
        let value = self.distribution.next(&mut self.rng);
        match self.null_probability {
            Some(p) if self.null_rng.gen_bool(p) => Value::Null,
            _ => value,
        }
    }
}

/// All state belonging to one tag permutation.
#[derive(Debug)]
struct Series {
    tags: Vec<String>,
    slots: Vec<Slot>,
}

/// Lazy, finite stream of rows.
///
/// Rows come out timestamp by timestamp; within a timestamp, series follow
/// tag-permutation order.
#[derive(Debug)]
pub struct RowIterator {
    timestamps: ScheduleIter,
    current: Option<DateTime<Utc>>,
    series: Vec<Series>,
    position: usize,
    remaining: u64,
}

impl RowIterator {
    /// Rows not yet produced.
    pub fn remaining(&self) -> u64 {
        self.remaining
    }
}

impl Iterator for RowIterator {
    type Item = Row;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current.is_none() || self.position == self.series.len() {
            self.current = Some(self.timestamps.next()?);
            self.position = 0;
        }
        let timestamp = self.current?;

        let series = self.series.get_mut(self.position)?;
        let values = series.slots.iter_mut().map(Slot::next).collect();
        let row = Row::new(timestamp, series.tags.clone(), values);

        self.position += 1;
        self.remaining -= 1;
        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for RowIterator {}

impl FusedIterator for RowIterator {}
