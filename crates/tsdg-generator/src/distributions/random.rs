//! Pseudo-random generators.
//!
//! None of these carry ordering guarantees between calls. `RandomWalk` is
//! the only one with state beyond the random source.

use super::{require_finite, uniform_float, ValueGenerator};
use rand::distributions::Uniform;
use rand::Rng;
use rand_distr::{Distribution as _, Normal};
use tsdg_core::{ConfigError, DataType, Value};

/// Uniform draw from an inclusive numeric range.
#[derive(Debug, Clone)]
pub enum UniformRange {
    /// Integer draw for `Integer` columns
    Int(Uniform<i64>),

    /// Float draw, coerced to the column type
    Float {
        sampler: Uniform<f64>,
        data_type: DataType,
    },
}

impl UniformRange {
    /// Build a range for the given column type.
    ///
    /// `Integer` columns draw from `[ceil(min), floor(max)]`, which must not
    /// be empty and must fit in an `i64`.
    pub fn new(kind: &str, min: f64, max: f64, data_type: DataType) -> Result<Self, ConfigError> {
        require_finite(kind, "min", min)?;
        require_finite(kind, "max", max)?;
        if min > max {
            return Err(ConfigError::invalid(format!(
                "{kind}: min ({min}) is greater than max ({max})"
            )));
        }

        match data_type {
            DataType::Integer => {
                let (lo, hi) = (min.ceil(), max.floor());
                if lo > hi {
                    return Err(ConfigError::invalid(format!(
                        "{kind}: no integer between {min} and {max}"
                    )));
                }
                // i64::MAX as f64 rounds up to 2^63, which is already out of range.
                if lo < i64::MIN as f64 || hi >= i64::MAX as f64 {
                    return Err(ConfigError::invalid(format!(
                        "{kind}: integer range [{min}, {max}] does not fit in 64 bits"
                    )));
                }
                Ok(Self::Int(Uniform::new_inclusive(lo as i64, hi as i64)))
            }
            _ => Ok(Self::Float {
                sampler: uniform_float(kind, min, max)?,
                data_type,
            }),
        }
    }
}

impl ValueGenerator for UniformRange {
    fn generate<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Value {
        match self {
            Self::Int(sampler) => Value::Integer(sampler.sample(rng)),
            Self::Float { sampler, data_type } => data_type.from_number(sampler.sample(rng)),
        }
    }
}

/// Uniform selection from a discrete pool of already-coerced values.
#[derive(Debug, Clone)]
pub struct Choice {
    pool: Vec<Value>,
}

impl Choice {
    /// Build from a non-empty pool.
    pub fn new(pool: Vec<Value>) -> Result<Self, ConfigError> {
        if pool.is_empty() {
            return Err(ConfigError::invalid("random: values pool is empty"));
        }
        Ok(Self { pool })
    }

    /// Every value in the pool, in configuration order.
    pub fn pool(&self) -> &[Value] {
        &self.pool
    }
}

impl ValueGenerator for Choice {
    fn generate<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Value {
        let idx = rng.gen_range(0..self.pool.len());
        self.pool[idx].clone()
    }
}

/// Gaussian draw.
#[derive(Debug, Clone)]
pub struct Gaussian {
    normal: Normal<f64>,
    data_type: DataType,
}

impl Gaussian {
    pub fn new(mean: f64, stddev: f64, data_type: DataType) -> Result<Self, ConfigError> {
        require_finite("normal", "mean", mean)?;
        require_finite("normal", "stddev", stddev)?;
        if stddev < 0.0 {
            return Err(ConfigError::invalid(format!(
                "normal: stddev must not be negative, got {stddev}"
            )));
        }
        let normal = Normal::new(mean, stddev)
            .map_err(|e| ConfigError::invalid(format!("normal: {e}")))?;
        Ok(Self { normal, data_type })
    }
}

impl ValueGenerator for Gaussian {
    fn generate<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Value {
        self.data_type.from_number(self.normal.sample(rng))
    }
}

/// Random walk: every call moves the level by a uniform draw in
/// `[-max_fluctuation, max_fluctuation]` and returns the new level.
#[derive(Debug, Clone)]
pub struct RandomWalk {
    current: f64,
    fluctuation: Uniform<f64>,
    data_type: DataType,
}

impl RandomWalk {
    pub fn new(start: f64, max_fluctuation: f64, data_type: DataType) -> Result<Self, ConfigError> {
        require_finite("noise", "start", start)?;
        require_finite("noise", "max_fluctuation", max_fluctuation)?;
        if max_fluctuation < 0.0 {
            return Err(ConfigError::invalid(format!(
                "noise: max_fluctuation must not be negative, got {max_fluctuation}"
            )));
        }
        Ok(Self {
            current: start,
            fluctuation: uniform_float("noise", -max_fluctuation, max_fluctuation)?,
            data_type,
        })
    }
}

impl ValueGenerator for RandomWalk {
    fn generate<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Value {
        self.current += self.fluctuation.sample(rng);
        self.data_type.from_number(self.current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_int_range_inclusive() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut range = UniformRange::new("random", 10.0, 12.0, DataType::Integer).unwrap();

        let mut seen = [false; 3];
        for _ in 0..200 {
            let v = range.generate(&mut rng).as_i64().unwrap();
            assert!((10..=12).contains(&v));
            seen[(v - 10) as usize] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn test_float_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut range = UniformRange::new("random", 0.0, 1.0, DataType::Float).unwrap();

        for _ in 0..100 {
            let v = range.generate(&mut rng).as_f64().unwrap();
            assert!((0.0..=1.0).contains(&v));
        }
    }

    #[test]
    fn test_degenerate_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut range = UniformRange::new("uniform", 5.0, 5.0, DataType::Float).unwrap();

        assert_eq!(range.generate(&mut rng), Value::Float(5.0));
    }

    #[test]
    fn test_invalid_ranges() {
        assert!(matches!(
            UniformRange::new("random", 2.0, 1.0, DataType::Float),
            Err(ConfigError::Configuration(_))
        ));
        assert!(matches!(
            UniformRange::new("random", 1.2, 1.8, DataType::Integer),
            Err(ConfigError::Configuration(_))
        ));
    }

    #[test]
    fn test_unsampleable_span_rejected() {
        assert!(matches!(
            UniformRange::new("random", -1e308, 1e308, DataType::Float),
            Err(ConfigError::Configuration(_))
        ));
        assert!(matches!(
            UniformRange::new("uniform", -f64::MAX, f64::MAX, DataType::String),
            Err(ConfigError::Configuration(_))
        ));

        // Wide but finite spans still sample inside the bounds.
        let mut rng = StdRng::seed_from_u64(5);
        let mut range = UniformRange::new("random", -1e307, 1e307, DataType::Float).unwrap();
        for _ in 0..100 {
            let v = range.generate(&mut rng).as_f64().unwrap();
            assert!(v.is_finite() && (-1e307..=1e307).contains(&v));
        }
    }

    #[test]
    fn test_integer_bounds_outside_i64_rejected() {
        assert!(matches!(
            UniformRange::new("random", 1e30, 2e30, DataType::Integer),
            Err(ConfigError::Configuration(_))
        ));
        assert!(matches!(
            UniformRange::new("random", -2e19, 0.0, DataType::Integer),
            Err(ConfigError::Configuration(_))
        ));

        // The same bounds are fine on a float column.
        assert!(UniformRange::new("random", 1e30, 2e30, DataType::Float).is_ok());

        let mut rng = StdRng::seed_from_u64(5);
        let mut range =
            UniformRange::new("random", i64::MIN as f64, 0.0, DataType::Integer).unwrap();
        assert!(range.generate(&mut rng).as_i64().unwrap() <= 0);
    }

    #[test]
    fn test_choice_draws_from_pool() {
        let mut rng = StdRng::seed_from_u64(1);
        let pool = vec![
            Value::String("a".to_string()),
            Value::String("b".to_string()),
        ];
        let mut choice = Choice::new(pool.clone()).unwrap();

        for _ in 0..50 {
            assert!(pool.contains(&choice.generate(&mut rng)));
        }
        assert!(Choice::new(vec![]).is_err());
    }

    #[test]
    fn test_gaussian_zero_stddev_is_constant() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut gaussian = Gaussian::new(10.0, 0.0, DataType::Float).unwrap();

        assert_eq!(gaussian.generate(&mut rng), Value::Float(10.0));
        assert!(Gaussian::new(0.0, -1.0, DataType::Float).is_err());
    }

    #[test]
    fn test_random_walk_bounded_steps() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut walk = RandomWalk::new(0.0, 2.0, DataType::Float).unwrap();

        let mut previous = 0.0;
        for _ in 0..100 {
            let v = walk.generate(&mut rng).as_f64().unwrap();
            assert!((v - previous).abs() <= 2.0);
            previous = v;
        }
    }

    #[test]
    fn test_random_walk_without_fluctuation_stays_put() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut walk = RandomWalk::new(4.0, 0.0, DataType::Integer).unwrap();

        assert_eq!(walk.generate(&mut rng), Value::Integer(4));
        assert_eq!(walk.generate(&mut rng), Value::Integer(4));
    }

    #[test]
    fn test_random_walk_unsampleable_fluctuation_rejected() {
        assert!(matches!(
            RandomWalk::new(0.0, 1e308, DataType::Float),
            Err(ConfigError::Configuration(_))
        ));
        assert!(RandomWalk::new(0.0, 1e307, DataType::Float).is_ok());
    }
}
