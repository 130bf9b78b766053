//! Value distributions.
//!
//! A [`Distribution`] is built from a resolved [`DistributionConfig`] and the
//! column's [`DataType`]. Every parameter is checked at construction so that
//! no configuration problem can surface on the first `next()` call.
//!
//! One instance exists per (column, series) pair and must be advanced exactly
//! once per timestamp, in timestamp order.

pub mod monotonic;
pub mod periodic;
pub mod preset;
pub mod random;

use rand::distributions::Uniform;
use rand::Rng;
use serde_yaml::Value as YamlValue;
use tsdg_core::{ConfigError, DataType, DistributionConfig, Value};

pub use monotonic::Monotonic;
pub use periodic::Periodic;
pub use preset::{Constant, WeightedPreset};
pub use random::{Choice, Gaussian, RandomWalk, UniformRange};

/// Trait for generating values.
pub trait ValueGenerator {
    /// Produce the next value, advancing any internal state by one step.
    fn generate<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Value;
}

/// A value generator bound to one column of one series.
#[derive(Debug, Clone)]
pub enum Distribution {
    /// `start, start + step, …`
    MonoInc(Monotonic),
    /// `start, start - step, …`
    MonoDec(Monotonic),
    /// Uniform draw from a numeric range (`random`, `uniform`)
    Random(UniformRange),
    /// Uniform draw from a value pool (`random` with `values`)
    Choice(Choice),
    /// Gaussian draw
    Normal(Gaussian),
    /// Random walk
    Noise(RandomWalk),
    /// Sine wave
    Periodic(Periodic),
    /// Same value every call
    Constant(Constant),
    /// Weighted draw from a fixed pool
    WeightedPreset(WeightedPreset),
}

impl Distribution {
    /// Build a fresh distribution for a column of the given type.
    pub fn build(config: &DistributionConfig, data_type: DataType) -> Result<Self, ConfigError> {
        let kind = config.kind();
        let distribution = match config {
            DistributionConfig::MonoInc { start, step } => {
                Self::MonoInc(Monotonic::increasing(*start, *step, data_type)?)
            }

            DistributionConfig::MonoDec { start, step } => {
                Self::MonoDec(Monotonic::decreasing(*start, *step, data_type)?)
            }

            DistributionConfig::Random { min, max, values } => match (min, max) {
                (None, None) if !values.is_empty() => {
                    Self::Choice(Choice::new(coerce_pool(kind, values, data_type)?)?)
                }
                (Some(min), Some(max)) if values.is_empty() => {
                    Self::Random(UniformRange::new(kind, *min, *max, data_type)?)
                }
                (None, None) => {
                    return Err(ConfigError::invalid(
                        "random: requires either min and max or a values pool",
                    ))
                }
                _ if !values.is_empty() => {
                    return Err(ConfigError::invalid(
                        "random: min/max and values are mutually exclusive",
                    ))
                }
                _ => {
                    return Err(ConfigError::invalid(
                        "random: both min and max are required",
                    ))
                }
            },

            DistributionConfig::Uniform { min, max } => {
                Self::Random(UniformRange::new(kind, *min, *max, data_type)?)
            }

            DistributionConfig::Normal { mean, stddev } => {
                Self::Normal(Gaussian::new(*mean, *stddev, data_type)?)
            }

            DistributionConfig::Noise {
                max_fluctuation,
                start,
            } => Self::Noise(RandomWalk::new(*start, *max_fluctuation, data_type)?),

            DistributionConfig::Periodic {
                period,
                amplitude,
                bias,
            } => Self::Periodic(Periodic::new(*period, *amplitude, *bias, data_type)?),

            DistributionConfig::Constant { value } => {
                Self::Constant(Constant::new(coerce_yaml(kind, value, data_type)?))
            }

            DistributionConfig::ConstantString { value } => Self::Constant(Constant::new(
                coerce_literal(kind, Value::String(value.clone()), data_type)?,
            )),

            DistributionConfig::ConstantInt { value } => Self::Constant(Constant::new(
                coerce_literal(kind, Value::Integer(*value), data_type)?,
            )),

            DistributionConfig::ConstantFloat { value } => Self::Constant(Constant::new(
                coerce_literal(kind, Value::Float(*value), data_type)?,
            )),

            DistributionConfig::WeightedPreset { preset } => {
                let entries = preset
                    .iter()
                    .map(|entry| Ok((coerce_yaml(kind, &entry.value, data_type)?, entry.weight)))
                    .collect::<Result<Vec<_>, ConfigError>>()?;
                Self::WeightedPreset(WeightedPreset::new(entries)?)
            }
        };
        Ok(distribution)
    }

    /// Produce the value for the next timestamp.
    pub fn next<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Value {
        match self {
            Self::MonoInc(g) | Self::MonoDec(g) => g.generate(rng),
            Self::Random(g) => g.generate(rng),
            Self::Choice(g) => g.generate(rng),
            Self::Normal(g) => g.generate(rng),
            Self::Noise(g) => g.generate(rng),
            Self::Periodic(g) => g.generate(rng),
            Self::Constant(g) => g.generate(rng),
            Self::WeightedPreset(g) => g.generate(rng),
        }
    }

    /// Check that `steps` consecutive values stay representable.
    ///
    /// Only monotonic sequences can run out of range.
    pub fn check_horizon(&self, steps: u64) -> Result<(), ConfigError> {
        match self {
            Self::MonoInc(g) => g.check_horizon("mono_inc", steps),
            Self::MonoDec(g) => g.check_horizon("mono_dec", steps),
            _ => Ok(()),
        }
    }

    /// Every value this distribution can produce, for enumerable variants.
    pub fn all(&self) -> Option<Vec<Value>> {
        match self {
            Self::Constant(g) => Some(vec![g.value().clone()]),
            Self::WeightedPreset(g) => Some(g.values().to_vec()),
            Self::Choice(g) => Some(g.pool().to_vec()),
            _ => None,
        }
    }
}

pub(crate) fn require_finite(kind: &str, param: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::invalid(format!(
            "{kind}: {param} must be a finite number, got {value}"
        )))
    }
}

/// Inclusive float sampler over `[low, high]`.
///
/// The sampler scales by `(high - low) / (1 - ε)`, so the span must stay
/// finite after that division.
pub(crate) fn uniform_float(kind: &str, low: f64, high: f64) -> Result<Uniform<f64>, ConfigError> {
    let scale = (high - low) / (1.0 - f64::EPSILON);
    if !scale.is_finite() {
        return Err(ConfigError::invalid(format!(
            "{kind}: range [{low}, {high}] is too wide to sample"
        )));
    }
    Ok(Uniform::new_inclusive(low, high))
}

fn coerce_literal(kind: &str, value: Value, data_type: DataType) -> Result<Value, ConfigError> {
    let shown = value.to_string();
    data_type.coerce(value).ok_or_else(|| {
        ConfigError::invalid(format!(
            "{kind}: value '{shown}' is not a valid {data_type}"
        ))
    })
}

fn coerce_yaml(kind: &str, yaml: &YamlValue, data_type: DataType) -> Result<Value, ConfigError> {
    let value = Value::from_yaml(yaml).ok_or_else(|| {
        ConfigError::invalid(format!("{kind}: values must be scalars, got {yaml:?}"))
    })?;
    coerce_literal(kind, value, data_type)
}

fn coerce_pool(
    kind: &str,
    values: &[YamlValue],
    data_type: DataType,
) -> Result<Vec<Value>, ConfigError> {
    values
        .iter()
        .map(|v| coerce_yaml(kind, v, data_type))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use tsdg_core::DistributionSpec;

    fn resolve(yaml: &str) -> DistributionConfig {
        serde_yaml::from_str::<DistributionSpec>(yaml)
            .unwrap()
            .resolve()
            .unwrap()
    }

    fn build(yaml: &str, data_type: DataType) -> Result<Distribution, ConfigError> {
        Distribution::build(&resolve(yaml), data_type)
    }

    #[test]
    fn test_factory_variants() {
        let cases = [
            ("{ type: mono_inc, step: 1 }", "MonoInc"),
            ("{ type: mono_dec, step: 1 }", "MonoDec"),
            ("{ type: random, min: 0, max: 10 }", "Random"),
            ("{ type: random, values: [1, 2] }", "Choice"),
            ("{ type: uniform, lower_bound: 0, upper_bound: 1 }", "Random"),
            ("{ type: normal, mean: 0, std_dev: 1 }", "Normal"),
            ("{ type: noise, max_fluctuation: 1 }", "Noise"),
            ("{ type: periodic, period: 10, amplitude: 1 }", "Periodic"),
            ("{ type: constant_int, value: 3 }", "Constant"),
            ("{ type: weighted_preset, preset: [{ value: 1, weight: 1 }] }", "WeightedPreset"),
        ];

        for (yaml, expected) in cases {
            let distribution = build(yaml, DataType::Integer).unwrap();
            let name = format!("{distribution:?}");
            assert!(
                name.starts_with(expected),
                "{yaml} built {name}, expected {expected}"
            );
        }
    }

    #[test]
    fn test_random_requires_bounds_or_pool() {
        let missing = build("{ type: random }", DataType::Float);
        assert!(matches!(missing, Err(ConfigError::Configuration(_))));

        let half = build("{ type: random, min: 1 }", DataType::Float);
        assert!(matches!(half, Err(ConfigError::Configuration(_))));

        let both = build("{ type: random, min: 1, max: 2, values: [a] }", DataType::String);
        assert!(matches!(both, Err(ConfigError::Configuration(_))));
    }

    #[test]
    fn test_string_literal_on_numeric_column() {
        let result = build("{ type: constant_string, value: abc }", DataType::Integer);
        assert!(matches!(result, Err(ConfigError::Configuration(_))));

        let result = build("{ type: random, values: [a, b] }", DataType::Float);
        assert!(matches!(result, Err(ConfigError::Configuration(_))));
    }

    #[test]
    fn test_numeric_literal_coerced() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut distribution = build("{ type: constant, value: 2.6 }", DataType::Integer).unwrap();
        assert_eq!(distribution.next(&mut rng), Value::Integer(3));

        let mut distribution = build("{ type: constant_int, value: 2 }", DataType::String).unwrap();
        assert_eq!(distribution.next(&mut rng), Value::String("2".to_string()));
    }

    #[test]
    fn test_all_only_for_enumerable() {
        let preset = build(
            "{ type: weighted_preset, preset: [{ value: a, weight: 1 }, { value: b, weight: 2 }] }",
            DataType::String,
        )
        .unwrap();
        assert_eq!(
            preset.all(),
            Some(vec![
                Value::String("a".to_string()),
                Value::String("b".to_string())
            ])
        );

        let constant = build("{ type: constant_string, value: x }", DataType::String).unwrap();
        assert_eq!(constant.all(), Some(vec![Value::String("x".to_string())]));

        let mono = build("{ type: mono_inc, step: 1 }", DataType::Integer).unwrap();
        assert_eq!(mono.all(), None);
    }

    #[test]
    fn test_collection_values_rejected() {
        let result = build("{ type: constant, value: [1, 2] }", DataType::String);
        assert!(matches!(result, Err(ConfigError::Configuration(_))));
    }
}
