//! Bounded numeric fields.

use serde::Serialize;

use crate::random::RandomSource;

/// Valid range and random-walk step for one numeric field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FieldSpec {
    /// Field name, snake_case
    pub name: &'static str,
    /// Inclusive lower bound
    pub min: f64,
    /// Inclusive upper bound
    pub max: f64,
    /// Full width of the perturbation window
    pub step: f64,
}

impl FieldSpec {
    pub const fn new(name: &'static str, min: f64, max: f64, step: f64) -> Self {
        Self {
            name,
            min,
            max,
            step,
        }
    }

    /// Clamp a value into range.
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    /// One random-walk step: `clamp(prev + U(-0.5, 0.5) * step)`.
    pub fn perturb(&self, prev: f64, rng: &mut dyn RandomSource) -> f64 {
        self.clamp(prev + rng.centered() * self.step)
    }

    /// Whether a value lies in `[min, max]`.
    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{FixedRandom, SeededRandom};

    const HEART_RATE: FieldSpec = FieldSpec::new("heart_rate", 60.0, 100.0, 4.0);

    #[test]
    fn test_zero_offset_is_stable() {
        let mut rng = FixedRandom::with_offset(0.0);
        assert_eq!(HEART_RATE.perturb(72.0, &mut rng), 72.0);
    }

    #[test]
    fn test_max_offset() {
        let mut rng = FixedRandom::with_offset(0.5);
        assert_eq!(HEART_RATE.perturb(72.0, &mut rng), 74.0);
        assert_eq!(HEART_RATE.perturb(99.0, &mut rng), 100.0);
    }

    #[test]
    fn test_random_walk_stays_in_range() {
        let mut rng = SeededRandom::from_seed(42);
        let mut value = 72.0;
        for _ in 0..10_000 {
            value = HEART_RATE.perturb(value, &mut rng);
            assert!(HEART_RATE.contains(value));
        }
    }
}
