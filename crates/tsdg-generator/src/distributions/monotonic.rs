//! Monotonic sequence generators.

use super::{require_finite, ValueGenerator};
use rand::Rng;
use tsdg_core::{ConfigError, DataType, Number, Value};

/// Arithmetic sequence `start, start + delta, start + 2 * delta, …`.
///
/// `MonoInc` uses a positive delta, `MonoDec` a negative one.
#[derive(Debug, Clone)]
pub enum Monotonic {
    /// Integral parameters on a non-float column, advanced in `i64`
    Exact {
        next: i64,
        delta: i64,
        data_type: DataType,
    },

    /// Term `i` computed as `start + i * delta`, so float sequences do not
    /// accumulate drift
    Scaled {
        start: f64,
        delta: f64,
        index: u64,
        data_type: DataType,
    },
}

impl Monotonic {
    /// Non-decreasing sequence starting at `start`.
    pub fn increasing(start: Number, step: Number, data_type: DataType) -> Result<Self, ConfigError> {
        Self::new("mono_inc", start, step, false, data_type)
    }

    /// Non-increasing sequence starting at `start`.
    pub fn decreasing(start: Number, step: Number, data_type: DataType) -> Result<Self, ConfigError> {
        Self::new("mono_dec", start, step, true, data_type)
    }

    fn new(
        kind: &str,
        start: Number,
        step: Number,
        descending: bool,
        data_type: DataType,
    ) -> Result<Self, ConfigError> {
        require_finite(kind, "start", start.as_f64())?;
        require_finite(kind, "step", step.as_f64())?;
        if step.as_f64() <= 0.0 {
            return Err(ConfigError::invalid(format!(
                "{kind}: step must be positive, got {step}"
            )));
        }

        if data_type != DataType::Float {
            if let (Some(start), Some(step)) = (start.as_i64(), step.as_i64()) {
                return Ok(Self::Exact {
                    next: start,
                    delta: if descending { -step } else { step },
                    data_type,
                });
            }
        }

        let step = step.as_f64();
        Ok(Self::Scaled {
            start: start.as_f64(),
            delta: if descending { -step } else { step },
            index: 0,
            data_type,
        })
    }

    /// Check that the first `steps` terms are representable in the column
    /// type.
    pub fn check_horizon(&self, kind: &str, steps: u64) -> Result<(), ConfigError> {
        let Some(last_index) = steps.checked_sub(1) else {
            return Ok(());
        };

        let fits = match self {
            Self::Exact { next, delta, .. } => i64::try_from(last_index)
                .ok()
                .and_then(|i| i.checked_mul(*delta))
                .and_then(|offset| next.checked_add(offset))
                .is_some(),
            Self::Scaled {
                start,
                delta,
                data_type,
                ..
            } => {
                let last = (start + last_index as f64 * delta).round();
                match data_type {
                    DataType::Integer => last >= i64::MIN as f64 && last < i64::MAX as f64,
                    _ => last.is_finite(),
                }
            }
        };

        if fits {
            Ok(())
        } else {
            Err(ConfigError::invalid(format!(
                "{kind}: sequence leaves the {} range within {steps} timestamps",
                self.data_type()
            )))
        }
    }

    fn data_type(&self) -> DataType {
        match self {
            Self::Exact { data_type, .. } | Self::Scaled { data_type, .. } => *data_type,
        }
    }
}

impl ValueGenerator for Monotonic {
    fn generate<R: Rng + ?Sized>(&mut self, _rng: &mut R) -> Value {
        match self {
            Self::Exact {
                next,
                delta,
                data_type,
            } => {
                let current = *next;
                // Only terms past the checked horizon can saturate.
                *next = next.saturating_add(*delta);
                match data_type {
                    DataType::String => Value::String(current.to_string()),
                    _ => Value::Integer(current),
                }
            }
            Self::Scaled {
                start,
                delta,
                index,
                data_type,
            } => {
                let raw = *start + *index as f64 * *delta;
                *index += 1;
                data_type.from_number(raw)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn take(generator: &mut Monotonic, n: usize) -> Vec<Value> {
        let mut rng = StdRng::seed_from_u64(0);
        (0..n).map(|_| generator.generate(&mut rng)).collect()
    }

    #[test]
    fn test_increasing_integers() {
        let mut generator =
            Monotonic::increasing(Number::Int(0), Number::Int(1), DataType::Integer).unwrap();

        let values = take(&mut generator, 4);
        assert_eq!(
            values,
            vec![
                Value::Integer(0),
                Value::Integer(1),
                Value::Integer(2),
                Value::Integer(3)
            ]
        );
    }

    #[test]
    fn test_decreasing_integers() {
        let mut generator =
            Monotonic::decreasing(Number::Int(100), Number::Int(5), DataType::Integer).unwrap();

        let values = take(&mut generator, 3);
        assert_eq!(
            values,
            vec![Value::Integer(100), Value::Integer(95), Value::Integer(90)]
        );
    }

    #[test]
    fn test_large_integers_stay_exact() {
        let start = 1_704_067_200_000_000_001;
        let mut generator =
            Monotonic::increasing(Number::Int(start), Number::Int(1), DataType::Integer).unwrap();

        let values = take(&mut generator, 4);
        assert_eq!(
            values,
            vec![
                Value::Integer(start),
                Value::Integer(start + 1),
                Value::Integer(start + 2),
                Value::Integer(start + 3)
            ]
        );

        let mut generator =
            Monotonic::decreasing(Number::Int(start), Number::Int(2), DataType::String).unwrap();
        assert_eq!(
            take(&mut generator, 2),
            vec![
                Value::String("1704067200000000001".to_string()),
                Value::String("1704067199999999999".to_string())
            ]
        );
    }

    #[test]
    fn test_fractional_step_does_not_drift() {
        let mut generator =
            Monotonic::increasing(Number::Int(0), Number::Float(0.1), DataType::Float).unwrap();

        let values = take(&mut generator, 1001);
        assert_eq!(values[1000], Value::Float(100.0));
        for pair in values.windows(2) {
            assert!(pair[0].as_f64().unwrap() <= pair[1].as_f64().unwrap());
        }
    }

    #[test]
    fn test_fractional_step_on_integer_column_rounds() {
        let mut generator =
            Monotonic::increasing(Number::Int(0), Number::Float(0.5), DataType::Integer).unwrap();

        assert_eq!(
            take(&mut generator, 3),
            vec![Value::Integer(0), Value::Integer(1), Value::Integer(1)]
        );
    }

    #[test]
    fn test_non_positive_step_rejected() {
        assert!(matches!(
            Monotonic::increasing(Number::Int(0), Number::Int(0), DataType::Integer),
            Err(ConfigError::Configuration(_))
        ));
        assert!(matches!(
            Monotonic::decreasing(Number::Int(0), Number::Int(-1), DataType::Integer),
            Err(ConfigError::Configuration(_))
        ));
        assert!(matches!(
            Monotonic::increasing(Number::Float(f64::NAN), Number::Int(1), DataType::Float),
            Err(ConfigError::Configuration(_))
        ));
    }

    #[test]
    fn test_horizon_overflow() {
        let near_max =
            Monotonic::increasing(Number::Int(i64::MAX - 2), Number::Int(1), DataType::Integer)
                .unwrap();
        assert!(near_max.check_horizon("mono_inc", 3).is_ok());
        assert!(matches!(
            near_max.check_horizon("mono_inc", 4),
            Err(ConfigError::Configuration(_))
        ));

        let near_min =
            Monotonic::decreasing(Number::Int(i64::MIN + 10), Number::Int(5), DataType::Integer)
                .unwrap();
        assert!(near_min.check_horizon("mono_dec", 3).is_ok());
        assert!(near_min.check_horizon("mono_dec", 4).is_err());

        let scaled =
            Monotonic::increasing(Number::Float(0.5), Number::Float(4e18), DataType::Integer)
                .unwrap();
        assert!(scaled.check_horizon("mono_inc", 3).is_ok());
        assert!(scaled.check_horizon("mono_inc", 4).is_err());

        assert!(near_max.check_horizon("mono_inc", 0).is_ok());
    }
}
