//! Validated column descriptors.

use crate::distributions::Distribution;
use tracing::warn;
use tsdg_core::{ColumnConfig, ConfigError, DataType, DistributionConfig};

/// Immutable description of one output column.
///
/// A `Column` never holds a live distribution; the engine calls
/// [`Column::instantiate`] once per series.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    name: String,
    data_type: DataType,
    nullable: bool,
    null_probability: f64,
    distribution: DistributionConfig,
}

impl Column {
    /// Validate a column definition.
    ///
    /// The distribution is resolved and test-built against the column type
    /// here, so every parameter problem surfaces before generation starts.
    pub fn from_config(config: &ColumnConfig) -> Result<Self, ConfigError> {
        if config.name.trim().is_empty() {
            return Err(ConfigError::invalid("column name must not be empty"));
        }

        if let Some(p) = config.null_probability {
            if !(0.0..=1.0).contains(&p) {
                return Err(ConfigError::invalid(format!(
                    "column '{}': null_probability must be within [0, 1], got {p}",
                    config.name
                )));
            }
        }

        // Configurations that only carry a probability are nullable.
        let nullable = config
            .nullable
            .unwrap_or(config.null_probability.is_some());

        let null_probability = match (nullable, config.null_probability) {
            (true, p) => p.unwrap_or(0.0),
            (false, Some(p)) => {
                warn!(
                    column = %config.name,
                    null_probability = p,
                    "Ignoring null_probability on a non-nullable column"
                );
                0.0
            }
            (false, None) => 0.0,
        };

        let distribution = config.distribution.resolve()?;
        Distribution::build(&distribution, config.data_type)
            .map_err(|e| in_column(&config.name, e))?;

        Ok(Self {
            name: config.name.clone(),
            data_type: config.data_type,
            nullable,
            null_probability,
            distribution,
        })
    }

    /// Build a fresh distribution instance for one series.
    pub fn instantiate(&self) -> Result<Distribution, ConfigError> {
        Distribution::build(&self.distribution, self.data_type)
    }

    /// Check that the distribution stays representable for `steps`
    /// timestamps.
    pub fn check_horizon(&self, steps: u64) -> Result<(), ConfigError> {
        self.instantiate()
            .and_then(|distribution| distribution.check_horizon(steps))
            .map_err(|e| in_column(&self.name, e))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn data_type(&self) -> DataType {
        self.data_type
    }

    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    /// Effective probability of emitting null; always 0 for non-nullable
    /// columns.
    pub fn null_probability(&self) -> f64 {
        self.null_probability
    }

    pub fn distribution(&self) -> &DistributionConfig {
        &self.distribution
    }
}

fn in_column(name: &str, error: ConfigError) -> ConfigError {
    match error {
        ConfigError::Configuration(msg) => {
            ConfigError::Configuration(format!("column '{name}': {msg}"))
        }
        other => other,
    }
}
