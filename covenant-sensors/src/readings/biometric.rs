//! Biometric prayer synchronisation.

use serde::Serialize;
use std::time::Duration;

#[cfg(feature = "typescript")]
use ts_rs::TS;

use crate::field::FieldSpec;
use crate::sampler::{Reading, TickContext};

pub const HEART_RATE: FieldSpec = FieldSpec::new("heart_rate", 60.0, 100.0, 4.0);
pub const BREATHING_RATE: FieldSpec = FieldSpec::new("breathing_rate", 12.0, 20.0, 2.0);
pub const STRESS_LEVEL: FieldSpec = FieldSpec::new("stress_level", 0.0, 1.0, 0.1);
pub const COHERENCE: FieldSpec = FieldSpec::new("coherence", 0.0, 1.0, 0.1);

/// Stress above which breathing meditation is recommended.
const HIGH_STRESS: f64 = 0.7;
/// Coherence above which the heart rhythm counts as optimal.
const OPTIMAL_COHERENCE: f64 = 0.8;

/// Readings from the (simulated) biometric sensors.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct BiometricReading {
    /// Beats per minute
    pub heart_rate: f64,
    /// Breaths per minute
    pub breathing_rate: f64,
    /// 0.0 - 1.0
    pub stress_level: f64,
    /// Heart coherence, 0.0 - 1.0
    pub coherence: f64,
}

impl BiometricReading {
    /// Practice suggested by the current reading.
    pub fn recommendation(&self) -> PrayerRecommendation {
        if self.stress_level > HIGH_STRESS {
            PrayerRecommendation::BreathingMeditation
        } else if self.coherence > OPTIMAL_COHERENCE {
            PrayerRecommendation::Gratitude
        } else {
            PrayerRecommendation::Centering
        }
    }
}

impl Default for BiometricReading {
    fn default() -> Self {
        Self {
            heart_rate: 72.0,
            breathing_rate: 16.0,
            stress_level: 0.3,
            coherence: 0.8,
        }
    }
}

impl Reading for BiometricReading {
    const NAME: &'static str = "biometric";
    const DEFAULT_CADENCE: Duration = Duration::from_secs(1);

    fn next(&self, ctx: &mut TickContext<'_>) -> Self {
        Self {
            heart_rate: HEART_RATE.perturb(self.heart_rate, ctx.rng),
            breathing_rate: BREATHING_RATE.perturb(self.breathing_rate, ctx.rng),
            stress_level: STRESS_LEVEL.perturb(self.stress_level, ctx.rng),
            coherence: COHERENCE.perturb(self.coherence, ctx.rng),
        }
    }

    fn bounded_fields(&self) -> Vec<(FieldSpec, f64)> {
        vec![
            (HEART_RATE, self.heart_rate),
            (BREATHING_RATE, self.breathing_rate),
            (STRESS_LEVEL, self.stress_level),
            (COHERENCE, self.coherence),
        ]
    }
}

/// Spiritual practice suggested from biometrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum PrayerRecommendation {
    /// Stress is high
    BreathingMeditation,
    /// Coherence is optimal
    Gratitude,
    /// Neither
    Centering,
}

impl PrayerRecommendation {
    pub fn message(&self) -> &'static str {
        match self {
            Self::BreathingMeditation => "Breathing meditation recommended - 'Be still and know'",
            Self::Gratitude => "Heart coherence optimal - 'Give thanks in all circumstances'",
            Self::Centering => "Centering prayer suggested - 'Come unto me, all who are weary'",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{FixedRandom, SeededRandom};
    use chrono::Utc;

    fn tick(
        reading: &BiometricReading,
        rng: &mut dyn crate::random::RandomSource,
    ) -> BiometricReading {
        reading.next(&mut TickContext {
            rng,
            now: Utc::now(),
        })
    }

    #[test]
    fn test_heart_rate_max_step() {
        let mut rng = FixedRandom::with_offset(0.5);
        let next = tick(&BiometricReading::default(), &mut rng);

        assert_eq!(next.heart_rate, 74.0);
        assert_eq!(next.breathing_rate, 17.0);
    }

    #[test]
    fn test_clamped_at_ceiling() {
        let mut rng = FixedRandom::with_offset(0.5);
        let mut reading = BiometricReading::default();
        for _ in 0..100 {
            reading = tick(&reading, &mut rng);
        }

        assert_eq!(reading.heart_rate, 100.0);
        assert_eq!(reading.breathing_rate, 20.0);
        assert_eq!(reading.stress_level, 1.0);
        assert_eq!(reading.coherence, 1.0);
    }

    #[test]
    fn test_fields_stay_in_range() {
        let mut rng = SeededRandom::from_seed(11);
        let mut reading = BiometricReading::default();
        for _ in 0..2_000 {
            reading = tick(&reading, &mut rng);
            for (spec, value) in reading.bounded_fields() {
                assert!(spec.contains(value), "{} = {}", spec.name, value);
            }
        }
    }

    #[test]
    fn test_recommendation() {
        let mut reading = BiometricReading::default();
        assert_eq!(reading.recommendation(), PrayerRecommendation::Centering);

        reading.coherence = 0.9;
        assert_eq!(reading.recommendation(), PrayerRecommendation::Gratitude);

        reading.stress_level = 0.75;
        assert_eq!(
            reading.recommendation(),
            PrayerRecommendation::BreathingMeditation
        );
    }
}
