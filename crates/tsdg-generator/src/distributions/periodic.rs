//! Sine wave generator.

use super::{require_finite, ValueGenerator};
use rand::Rng;
use tsdg_core::{ConfigError, DataType, Value};

/// `amplitude * sin(i / period) + bias` for step index `i = 0, 1, …`.
#[derive(Debug, Clone)]
pub struct Periodic {
    period: f64,
    amplitude: f64,
    bias: f64,
    index: u64,
    data_type: DataType,
}

impl Periodic {
    pub fn new(
        period: f64,
        amplitude: f64,
        bias: f64,
        data_type: DataType,
    ) -> Result<Self, ConfigError> {
        require_finite("periodic", "period", period)?;
        require_finite("periodic", "amplitude", amplitude)?;
        require_finite("periodic", "bias", bias)?;
        if period <= 0.0 {
            return Err(ConfigError::invalid(format!(
                "periodic: period must be positive, got {period}"
            )));
        }
        Ok(Self {
            period,
            amplitude,
            bias,
            index: 0,
            data_type,
        })
    }
}

impl ValueGenerator for Periodic {
    fn generate<R: Rng + ?Sized>(&mut self, _rng: &mut R) -> Value {
        let phase = self.index as f64 / self.period;
        self.index += 1;
        self.data_type
            .from_number(self.amplitude * phase.sin() + self.bias)
    }
}
