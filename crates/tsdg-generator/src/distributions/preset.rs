//! Enumerable generators: constants and weighted presets.

use super::ValueGenerator;
use rand::distributions::{Distribution as _, WeightedIndex};
use rand::Rng;
use tsdg_core::{ConfigError, Value};

/// Emits the same value on every call.
#[derive(Debug, Clone)]
pub struct Constant {
    value: Value,
}

impl Constant {
    pub fn new(value: Value) -> Self {
        Self { value }
    }

    pub fn value(&self) -> &Value {
        &self.value
    }
}

impl ValueGenerator for Constant {
    fn generate<R: Rng + ?Sized>(&mut self, _rng: &mut R) -> Value {
        self.value.clone()
    }
}

/// Weighted draw from a fixed pool.
#[derive(Debug, Clone)]
pub struct WeightedPreset {
    values: Vec<Value>,
    index: WeightedIndex<f64>,
}

impl WeightedPreset {
    /// Build from `(value, weight)` pairs.
    ///
    /// Weights must be finite and non-negative with at least one positive,
    /// and their sum must be finite too.
    pub fn new(entries: Vec<(Value, f64)>) -> Result<Self, ConfigError> {
        if entries.is_empty() {
            return Err(ConfigError::invalid("weighted_preset: preset is empty"));
        }
        if let Some((value, weight)) = entries
            .iter()
            .find(|(_, w)| !w.is_finite() || *w < 0.0)
        {
            return Err(ConfigError::invalid(format!(
                "weighted_preset: invalid weight {weight} for value '{value}'"
            )));
        }

        let (values, weights): (Vec<Value>, Vec<f64>) = entries.into_iter().unzip();
        let total: f64 = weights.iter().sum();
        if !total.is_finite() {
            return Err(ConfigError::invalid(format!(
                "weighted_preset: weights sum to {total}"
            )));
        }
        let index = WeightedIndex::new(&weights)
            .map_err(|e| ConfigError::invalid(format!("weighted_preset: {e}")))?;
        Ok(Self { values, index })
    }

    /// Every value in the preset, in configuration order.
    pub fn values(&self) -> &[Value] {
        &self.values
    }
}

impl ValueGenerator for WeightedPreset {
    fn generate<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Value {
        self.values[self.index.sample(rng)].clone()
    }
}
