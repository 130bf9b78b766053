//! Configuration schema for time-series generation.
//!
//! The schema is loaded from a YAML file and describes the time range, the
//! tag dimensions whose value combinations define the series, and the
//! columns with the distribution each one is generated from.
//!
//! ## Example
//!
//! ```yaml
//! start: 2024-01-01T00:00:00Z
//! end: 2024-01-01T01:00:00Z
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
//! ```

use crate::duration::parse_duration_to_secs;
use crate::error::ConfigError;
use crate::types::DataType;
use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value as YamlValue};
use std::fmt;
use std::fs;
use std::path::Path;

// ============================================================================
// Distributions
// ============================================================================

/// Every distribution type string the factory knows about.
pub const DISTRIBUTION_TYPES: &[&str] = &[
    "mono_inc",
    "mono_dec",
    "random",
    "uniform",
    "normal",
    "noise",
    "periodic",
    "constant",
    "constant_string",
    "constant_int",
    "constant_float",
    "weighted_preset",
];

/// Raw distribution block as written in the configuration.
///
/// The `type` key selects the variant; everything else is kept verbatim
/// until [`DistributionSpec::resolve`] type-checks it against the selected
/// variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionSpec {
    /// Distribution type string
    #[serde(rename = "type")]
    pub kind: String,

    /// Remaining parameters
    #[serde(flatten)]
    pub params: Mapping,
}

impl DistributionSpec {
    /// Create a distribution block from a type string and its parameters.
    pub fn new(kind: impl Into<String>, params: Mapping) -> Self {
        Self {
            kind: kind.into(),
            params,
        }
    }

    /// Resolve the raw block into a typed [`DistributionConfig`].
    ///
    /// Unknown type strings fail with [`ConfigError::UnknownDistribution`];
    /// missing or ill-typed parameters fail with
    /// [`ConfigError::Configuration`].
    pub fn resolve(&self) -> Result<DistributionConfig, ConfigError> {
        if !DISTRIBUTION_TYPES.contains(&self.kind.as_str()) {
            return Err(ConfigError::UnknownDistribution(self.kind.clone()));
        }

        let mut mapping = self.params.clone();
        mapping.insert(
            YamlValue::String("type".to_string()),
            YamlValue::String(self.kind.clone()),
        );

        serde_yaml::from_value(YamlValue::Mapping(mapping))
            .map_err(|e| ConfigError::invalid(format!("distribution '{}': {e}", self.kind)))
    }
}

/// One entry of a `weighted_preset` pool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedValue {
    /// The value emitted when this entry is drawn
    pub value: YamlValue,

    /// Relative weight (must be positive)
    pub weight: f64,
}

/// A numeric parameter that keeps integer literals exact.
///
/// Integers are tried first, so `1704067200000000001` stays an `i64` instead
/// of rounding through `f64`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    pub fn as_f64(&self) -> f64 {
        match self {
            Self::Int(i) => *i as f64,
            Self::Float(f) => *f,
        }
    }

    /// The exact integer value, if there is one.
    ///
    /// Integral floats count only while they fit in an `i64`.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            Self::Float(f) if f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64 => {
                Some(*f as i64)
            }
            Self::Float(_) => None,
        }
    }
}

impl Default for Number {
    fn default() -> Self {
        Self::Int(0)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
        }
    }
}

/// Typed distribution parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DistributionConfig {
    /// Monotonically increasing sequence
    MonoInc {
        /// First value
        #[serde(default)]
        start: Number,
        /// Increment per timestamp (must be positive)
        step: Number,
    },

    /// Monotonically decreasing sequence
    MonoDec {
        /// First value
        #[serde(default)]
        start: Number,
        /// Decrement per timestamp (must be positive)
        step: Number,
    },

    /// Independent uniform draw from a numeric range or a value pool
    Random {
        /// Minimum value (inclusive)
        #[serde(default, alias = "lower_bound")]
        min: Option<f64>,
        /// Maximum value (inclusive)
        #[serde(default, alias = "upper_bound")]
        max: Option<f64>,
        /// Pool of values to select from
        #[serde(default)]
        values: Vec<YamlValue>,
    },

    /// Independent uniform draw from a numeric range
    Uniform {
        /// Minimum value (inclusive)
        #[serde(alias = "lower_bound")]
        min: f64,
        /// Maximum value (inclusive)
        #[serde(alias = "upper_bound")]
        max: f64,
    },

    /// Gaussian draw
    Normal {
        /// Mean
        mean: f64,
        /// Standard deviation (non-negative)
        #[serde(alias = "std_dev")]
        stddev: f64,
    },

    /// Random walk
    Noise {
        /// Largest absolute change per timestamp
        max_fluctuation: f64,
        /// Starting level
        #[serde(default)]
        start: f64,
    },

    /// Sine wave over the timestamp index
    Periodic {
        /// Index units per radian
        period: f64,
        /// Wave amplitude
        amplitude: f64,
        /// Vertical offset
        #[serde(default)]
        bias: f64,
    },

    /// Constant of any scalar type
    Constant {
        /// The value
        value: YamlValue,
    },

    /// Constant string
    ConstantString {
        /// The value
        value: String,
    },

    /// Constant integer
    ConstantInt {
        /// The value
        value: i64,
    },

    /// Constant float
    ConstantFloat {
        /// The value
        value: f64,
    },

    /// Weighted draw from a fixed pool
    WeightedPreset {
        /// Pool entries with their weights
        preset: Vec<WeightedValue>,
    },
}

impl DistributionConfig {
    /// The type string this configuration was selected by.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MonoInc { .. } => "mono_inc",
            Self::MonoDec { .. } => "mono_dec",
            Self::Random { .. } => "random",
            Self::Uniform { .. } => "uniform",
            Self::Normal { .. } => "normal",
            Self::Noise { .. } => "noise",
            Self::Periodic { .. } => "periodic",
            Self::Constant { .. } => "constant",
            Self::ConstantString { .. } => "constant_string",
            Self::ConstantInt { .. } => "constant_int",
            Self::ConstantFloat { .. } => "constant_float",
            Self::WeightedPreset { .. } => "weighted_preset",
        }
    }

    /// Whether every value this distribution can produce is known up front.
    pub fn is_enumerable(&self) -> bool {
        match self {
            Self::Random { values, .. } => !values.is_empty(),
            Self::Constant { .. }
            | Self::ConstantString { .. }
            | Self::ConstantInt { .. }
            | Self::ConstantFloat { .. }
            | Self::WeightedPreset { .. } => true,
            _ => false,
        }
    }
}

// ============================================================================
// Columns and tags
// ============================================================================

/// Column definition as written in the configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnConfig {
    /// Column name
    pub name: String,

    /// Column type
    #[serde(rename = "type")]
    pub data_type: DataType,

    /// Whether this column may emit nulls
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nullable: Option<bool>,

    /// Probability of emitting null (0.0 to 1.0)
    #[serde(default, alias = "nullability", skip_serializing_if = "Option::is_none")]
    pub null_probability: Option<f64>,

    /// Distribution the values are drawn from
    #[serde(alias = "dist")]
    pub distribution: DistributionSpec,
}

/// Tag dimension as written in the configuration.
///
/// Values come either from an explicit list or from an enumerable
/// distribution (`constant*`, `weighted_preset`, `random` with `values`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagConfig {
    /// Tag name
    pub name: String,

    /// Explicit ordered list of values
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<YamlValue>>,

    /// Enumerable distribution to take the values from
    #[serde(default, alias = "dist", skip_serializing_if = "Option::is_none")]
    pub distribution: Option<DistributionSpec>,
}

// ============================================================================
// Top level
// ============================================================================

/// Schedule step, either integer seconds or a duration string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StepConfig {
    /// Plain seconds: `step: 10`
    Seconds(i64),

    /// Duration string: `step: 10s`
    Text(String),
}

impl StepConfig {
    /// The step in seconds. The sign is not checked here.
    pub fn to_secs(&self) -> Result<i64, ConfigError> {
        match self {
            Self::Seconds(secs) => Ok(*secs),
            Self::Text(text) => parse_duration_to_secs(text),
        }
    }
}

/// Full generator configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// First timestamp (RFC 3339, inclusive)
    pub start: String,

    /// End of the time range (RFC 3339, exclusive)
    pub end: String,

    /// Interval between timestamps
    #[serde(alias = "interval")]
    pub step: StepConfig,

    /// Master seed for every random source
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    /// Tag dimensions
    #[serde(default)]
    pub tags: Vec<TagConfig>,

    /// Column definitions
    #[serde(default, alias = "fields")]
    pub columns: Vec<ColumnConfig>,
}

impl GeneratorConfig {
    /// Load configuration from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Override the master seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Tag names in declaration order.
    pub fn tag_names(&self) -> Vec<&str> {
        self.tags.iter().map(|t| t.name.as_str()).collect()
    }

    /// Column names in declaration order.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }
}

// ============================================================================
// Tests
// ============================================================================
