//! Tag dimensions and their cartesian product.
//!
//! Each [`Permutation`] of the tag values identifies one series. The
//! expansion order is fixed: dimensions in declaration order, values in
//! declaration order, last dimension varying fastest.

use crate::distributions::Distribution;
use std::collections::HashSet;
use tsdg_core::{ConfigError, DataType, TagConfig, Value};

/// One tag dimension: a name and its ordered values.
#[derive(Debug, Clone, PartialEq)]
pub struct TagDimension {
    name: String,
    values: Vec<String>,
}

impl TagDimension {
    /// Create a dimension. Values must be non-empty and distinct.
    pub fn new(name: impl Into<String>, values: Vec<String>) -> Result<Self, ConfigError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ConfigError::invalid("tag name must not be empty"));
        }
        if values.is_empty() {
            return Err(ConfigError::invalid(format!("tag '{name}' has no values")));
        }
        let mut seen = HashSet::new();
        if let Some(dup) = values.iter().find(|v| !seen.insert(v.as_str())) {
            return Err(ConfigError::invalid(format!(
                "tag '{name}' lists value '{dup}' more than once"
            )));
        }
        Ok(Self { name, values })
    }

    /// Build a dimension from either its explicit `values` or an enumerable
    /// distribution.
    pub fn from_config(config: &TagConfig) -> Result<Self, ConfigError> {
        let values = match (&config.values, &config.distribution) {
            (Some(_), Some(_)) => {
                return Err(ConfigError::invalid(format!(
                    "tag '{}': values and distribution are mutually exclusive",
                    config.name
                )))
            }
            (Some(values), None) => values
                .iter()
                .map(|v| {
                    Value::from_yaml(v).ok_or_else(|| {
                        ConfigError::invalid(format!(
                            "tag '{}': values must be scalars, got {v:?}",
                            config.name
                        ))
                    })
                })
                .collect::<Result<Vec<_>, _>>()?,
            (None, Some(spec)) => {
                let distribution = Distribution::build(&spec.resolve()?, DataType::String)?;
                distribution.all().ok_or_else(|| {
                    ConfigError::invalid(format!(
                        "tag '{}': distribution '{}' is not enumerable",
                        config.name, spec.kind
                    ))
                })?
            }
            (None, None) => {
                return Err(ConfigError::invalid(format!(
                    "tag '{}': either values or distribution is required",
                    config.name
                )))
            }
        };

        let values = values
            .into_iter()
            .map(|v| match v {
                Value::Null => Err(ConfigError::invalid(format!(
                    "tag '{}': null is not a valid tag value",
                    config.name
                ))),
                other => Ok(other.to_string()),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(config.name.clone(), values)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }
}

/// One choice of value per tag dimension; the identity of a series.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Permutation {
    pairs: Vec<(String, String)>,
}

impl Permutation {
    /// Values in dimension order.
    pub fn values(&self) -> Vec<String> {
        self.pairs.iter().map(|(_, v)| v.clone()).collect()
    }
}

/// Ordered set of tag dimensions.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TagSet {
    dimensions: Vec<TagDimension>,
    count: u64,
}

impl TagSet {
    /// Create a tag set. Names must be distinct and the number of
    /// permutations must fit in a `u64`.
    pub fn new(dimensions: Vec<TagDimension>) -> Result<Self, ConfigError> {
        let mut seen = HashSet::new();
        if let Some(dup) = dimensions.iter().find(|d| !seen.insert(d.name())) {
            return Err(ConfigError::invalid(format!(
                "tag '{}' is declared more than once",
                dup.name()
            )));
        }

        let count = dimensions
            .iter()
            .try_fold(1u64, |acc, d| acc.checked_mul(d.values().len() as u64))
            .ok_or_else(|| ConfigError::invalid("number of tag combinations overflows u64"))?;

        Ok(Self { dimensions, count })
    }

    /// Build from configuration.
    pub fn from_configs(configs: &[TagConfig]) -> Result<Self, ConfigError> {
        let dimensions = configs
            .iter()
            .map(TagDimension::from_config)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(dimensions)
    }

    pub fn dimensions(&self) -> &[TagDimension] {
        &self.dimensions
    }

    /// Tag names in declaration order.
    pub fn names(&self) -> Vec<&str> {
        self.dimensions.iter().map(|d| d.name()).collect()
    }

    /// Number of permutations, without materializing them. Zero dimensions
    /// count as one (empty) permutation.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Full cartesian product in odometer order.
    pub fn expand(&self) -> Vec<Permutation> {
        let mut permutations = Vec::with_capacity(usize::try_from(self.count).unwrap_or(0));
        let mut indices = vec![0usize; self.dimensions.len()];

        loop {
            permutations.push(Permutation {
                pairs: self
                    .dimensions
                    .iter()
                    .zip(&indices)
                    .map(|(d, &i)| (d.name.clone(), d.values[i].clone()))
                    .collect(),
            });

            // Advance the odometer; the last dimension turns fastest.
            let mut pos = self.dimensions.len();
            loop {
                if pos == 0 {
                    return permutations;
                }
                pos -= 1;
                indices[pos] += 1;
                if indices[pos] < self.dimensions[pos].values.len() {
                    break;
                }
                indices[pos] = 0;
            }
        }
    }
}
