//! Quantum ethics simulation.

use serde::Serialize;
use std::time::Duration;

#[cfg(feature = "typescript")]
use ts_rs::TS;

use crate::field::FieldSpec;
use crate::sampler::{Reading, TickContext};

pub const ETHICAL_COHERENCE: FieldSpec = FieldSpec::new("ethical_coherence", 0.0, 1.0, 0.02);
pub const SPIRITUAL_RESONANCE: FieldSpec = FieldSpec::new("spiritual_resonance", 0.0, 1.0, 0.02);
pub const ECOLOGICAL_HARMONY: FieldSpec = FieldSpec::new("ecological_harmony", 0.0, 1.0, 0.02);
pub const SOCIAL_JUSTICE: FieldSpec = FieldSpec::new("social_justice", 0.0, 1.0, 0.02);
pub const CULTURAL_PRESERVATION: FieldSpec =
    FieldSpec::new("cultural_preservation", 0.0, 1.0, 0.02);

/// State of the five ethical dimensions.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct QuantumEthicsReading {
    pub ethical_coherence: f64,
    pub spiritual_resonance: f64,
    pub ecological_harmony: f64,
    pub social_justice: f64,
    pub cultural_preservation: f64,
    /// Interconnectedness of the dimensions, 0.0 - 1.0
    pub entanglement: f64,
}

impl QuantumEthicsReading {
    /// Entanglement oscillates with wall-clock time, one radian per second.
    pub fn entanglement_at(millis: i64) -> f64 {
        (millis as f64 / 1000.0).sin() * 0.5 + 0.5
    }
}

impl Default for QuantumEthicsReading {
    fn default() -> Self {
        Self {
            ethical_coherence: 0.85,
            spiritual_resonance: 0.92,
            ecological_harmony: 0.78,
            social_justice: 0.88,
            cultural_preservation: 0.94,
            entanglement: 0.0,
        }
    }
}

impl Reading for QuantumEthicsReading {
    const NAME: &'static str = "quantum_ethics";
    const DEFAULT_CADENCE: Duration = Duration::from_millis(100);

    fn next(&self, ctx: &mut TickContext<'_>) -> Self {
        Self {
            ethical_coherence: ETHICAL_COHERENCE.perturb(self.ethical_coherence, ctx.rng),
            spiritual_resonance: SPIRITUAL_RESONANCE.perturb(self.spiritual_resonance, ctx.rng),
            ecological_harmony: ECOLOGICAL_HARMONY.perturb(self.ecological_harmony, ctx.rng),
            social_justice: SOCIAL_JUSTICE.perturb(self.social_justice, ctx.rng),
            cultural_preservation: CULTURAL_PRESERVATION
                .perturb(self.cultural_preservation, ctx.rng),
            entanglement: Self::entanglement_at(ctx.now.timestamp_millis()),
        }
    }

    fn bounded_fields(&self) -> Vec<(FieldSpec, f64)> {
        vec![
            (ETHICAL_COHERENCE, self.ethical_coherence),
            (SPIRITUAL_RESONANCE, self.spiritual_resonance),
            (ECOLOGICAL_HARMONY, self.ecological_harmony),
            (SOCIAL_JUSTICE, self.social_justice),
            (CULTURAL_PRESERVATION, self.cultural_preservation),
            (FieldSpec::new("entanglement", 0.0, 1.0, 0.0), self.entanglement),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::SeededRandom;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_entanglement_curve() {
        assert_eq!(QuantumEthicsReading::entanglement_at(0), 0.5);
        let peak = QuantumEthicsReading::entanglement_at(1571);
        assert!((peak - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_tick_uses_context_time() {
        let mut rng = SeededRandom::from_seed(1);
        let now = Utc.timestamp_millis_opt(0).unwrap();
        let next = QuantumEthicsReading::default().next(&mut TickContext { rng: &mut rng, now });

        assert_eq!(next.entanglement, 0.5);
    }

    #[test]
    fn test_dimensions_stay_in_range() {
        let mut rng = SeededRandom::from_seed(9);
        let mut reading = QuantumEthicsReading::default();
        for _ in 0..5_000 {
            reading = reading.next(&mut TickContext {
                rng: &mut rng,
                now: Utc::now(),
            });
            for (spec, value) in reading.bounded_fields() {
                assert!(spec.contains(value), "{} = {}", spec.name, value);
            }
        }
    }
}
