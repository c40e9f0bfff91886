//! Injectable randomness.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniform random numbers.
pub trait RandomSource: Send {
    /// Uniform value in `[0, 1)`
    fn unit(&mut self) -> f64;

    /// Uniform value in `[-0.5, 0.5)`
    fn centered(&mut self) -> f64 {
        self.unit() - 0.5
    }

    /// Uniform index in `0..len`. `len` must be non-zero.
    fn index(&mut self, len: usize) -> usize {
        let scaled = (self.unit() * len as f64) as usize;
        scaled.min(len.saturating_sub(1))
    }
}

/// `rand`-backed source, from entropy or a fixed seed.
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    /// Seed from OS entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible sequence for a seed.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn unit(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

/// Always returns the same value. For tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedRandom {
    unit: f64,
}

impl FixedRandom {
    /// Always yield `unit` from [`RandomSource::unit`]. Values up to 1.0 are
    /// allowed so the top of a perturbation range can be reached.
    pub fn new(unit: f64) -> Self {
        Self {
            unit: unit.clamp(0.0, 1.0),
        }
    }

    /// Always yield `offset` from [`RandomSource::centered`].
    pub fn with_offset(offset: f64) -> Self {
        Self::new(offset + 0.5)
    }
}

impl RandomSource for FixedRandom {
    fn unit(&mut self) -> f64 {
        self.unit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_is_reproducible() {
        let mut a = SeededRandom::from_seed(7);
        let mut b = SeededRandom::from_seed(7);
        for _ in 0..16 {
            assert_eq!(a.unit(), b.unit());
        }
    }

    #[test]
    fn test_unit_range() {
        let mut rng = SeededRandom::from_entropy();
        for _ in 0..1000 {
            let v = rng.unit();
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn test_fixed_offset() {
        let mut rng = FixedRandom::with_offset(0.0);
        assert_eq!(rng.centered(), 0.0);

        let mut rng = FixedRandom::with_offset(0.5);
        assert_eq!(rng.centered(), 0.5);
    }

    #[test]
    fn test_index_stays_in_bounds() {
        assert_eq!(FixedRandom::new(1.0).index(4), 3);
        assert_eq!(FixedRandom::new(0.0).index(4), 0);
        assert_eq!(FixedRandom::new(0.5).index(4), 2);
    }
}
