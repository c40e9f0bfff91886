//! Environmental sensor array.
//!
//! Advisories are derived from the reading they belong to and rebuilt on
//! every tick; a recovered field drops its advisory on the next tick.

use serde::Serialize;
use std::time::Duration;

#[cfg(feature = "typescript")]
use ts_rs::TS;

use crate::field::FieldSpec;
use crate::sampler::{Reading, TickContext};

pub const TEMPERATURE: FieldSpec = FieldSpec::new("temperature", 15.0, 40.0, 2.0);
pub const HUMIDITY: FieldSpec = FieldSpec::new("humidity", 30.0, 90.0, 5.0);
pub const AIR_QUALITY: FieldSpec = FieldSpec::new("air_quality", 0.0, 100.0, 3.0);
pub const SOLAR_RADIATION: FieldSpec = FieldSpec::new("solar_radiation", 0.0, 1200.0, 50.0);
pub const WIND_SPEED: FieldSpec = FieldSpec::new("wind_speed", 0.0, 30.0, 2.0);
pub const BIODIVERSITY_INDEX: FieldSpec = FieldSpec::new("biodiversity_index", 0.0, 1.0, 0.02);

/// Quantum fluctuation is redrawn each tick from `[0, QUANTUM_CEILING)`.
pub const QUANTUM_CEILING: f64 = 0.3;

const AIR_QUALITY_FLOOR: f64 = 50.0;
const BIODIVERSITY_FLOOR: f64 = 0.5;
const QUANTUM_INSTABILITY: f64 = 0.25;

/// Threshold-triggered advisory. Variant order is display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum Advisory {
    /// Air quality under 50
    AirQualityBelowOptimal,
    /// Biodiversity index under 0.5
    BiodiversityThreat,
    /// Quantum fluctuation over 0.25
    QuantumFieldInstability,
}

impl Advisory {
    pub fn message(&self) -> &'static str {
        match self {
            Self::AirQualityBelowOptimal => "Air quality below optimal",
            Self::BiodiversityThreat => "Biodiversity threat detected",
            Self::QuantumFieldInstability => "Quantum field instability",
        }
    }
}

/// Readings from the environmental sensor array.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct EnvironmentalReading {
    /// Degrees Celsius
    pub temperature: f64,
    /// Percent
    pub humidity: f64,
    /// 0 - 100
    pub air_quality: f64,
    /// W/m²
    pub solar_radiation: f64,
    /// km/h
    pub wind_speed: f64,
    /// 0.0 - 1.0
    pub biodiversity_index: f64,
    /// Hz, 0.0 - 0.3
    pub quantum_fluctuation: f64,
    /// Advisories triggered by this reading, sorted
    pub advisories: Vec<Advisory>,
}

impl EnvironmentalReading {
    /// Build a reading and derive its advisories.
    pub fn new(
        temperature: f64,
        humidity: f64,
        air_quality: f64,
        solar_radiation: f64,
        wind_speed: f64,
        biodiversity_index: f64,
        quantum_fluctuation: f64,
    ) -> Self {
        let mut reading = Self {
            temperature,
            humidity,
            air_quality,
            solar_radiation,
            wind_speed,
            biodiversity_index,
            quantum_fluctuation,
            advisories: Vec::new(),
        };
        reading.advisories = reading.evaluate_advisories();
        reading
    }

    /// Advisories triggered by the current field values, sorted.
    pub fn evaluate_advisories(&self) -> Vec<Advisory> {
        let mut advisories = Vec::new();
        if self.air_quality < AIR_QUALITY_FLOOR {
            advisories.push(Advisory::AirQualityBelowOptimal);
        }
        if self.biodiversity_index < BIODIVERSITY_FLOOR {
            advisories.push(Advisory::BiodiversityThreat);
        }
        if self.quantum_fluctuation > QUANTUM_INSTABILITY {
            advisories.push(Advisory::QuantumFieldInstability);
        }
        advisories.sort();
        advisories
    }

    /// Advisory messages in display order.
    pub fn advisory_messages(&self) -> Vec<&'static str> {
        self.advisories.iter().map(Advisory::message).collect()
    }
}

impl Default for EnvironmentalReading {
    fn default() -> Self {
        Self::new(24.5, 65.0, 78.0, 850.0, 12.3, 0.82, 0.156)
    }
}

impl Reading for EnvironmentalReading {
    const NAME: &'static str = "environmental";
    const DEFAULT_CADENCE: Duration = Duration::from_secs(2);

    fn next(&self, ctx: &mut TickContext<'_>) -> Self {
        Self::new(
            TEMPERATURE.perturb(self.temperature, ctx.rng),
            HUMIDITY.perturb(self.humidity, ctx.rng),
            AIR_QUALITY.perturb(self.air_quality, ctx.rng),
            SOLAR_RADIATION.perturb(self.solar_radiation, ctx.rng),
            WIND_SPEED.perturb(self.wind_speed, ctx.rng),
            BIODIVERSITY_INDEX.perturb(self.biodiversity_index, ctx.rng),
            ctx.rng.unit() * QUANTUM_CEILING,
        )
    }

    fn bounded_fields(&self) -> Vec<(FieldSpec, f64)> {
        vec![
            (TEMPERATURE, self.temperature),
            (HUMIDITY, self.humidity),
            (AIR_QUALITY, self.air_quality),
            (SOLAR_RADIATION, self.solar_radiation),
            (WIND_SPEED, self.wind_speed),
            (BIODIVERSITY_INDEX, self.biodiversity_index),
            (
                FieldSpec::new("quantum_fluctuation", 0.0, QUANTUM_CEILING, QUANTUM_CEILING),
                self.quantum_fluctuation,
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{FixedRandom, RandomSource, SeededRandom};
    use chrono::Utc;

    fn tick(reading: &EnvironmentalReading, rng: &mut dyn RandomSource) -> EnvironmentalReading {
        reading.next(&mut TickContext {
            rng,
            now: Utc::now(),
        })
    }

    #[test]
    fn test_default_has_no_advisories() {
        assert!(EnvironmentalReading::default().advisories.is_empty());
    }

    #[test]
    fn test_all_advisories_sorted() {
        let reading = EnvironmentalReading::new(20.0, 50.0, 10.0, 100.0, 5.0, 0.1, 0.29);
        assert_eq!(
            reading.advisory_messages(),
            vec![
                "Air quality below optimal",
                "Biodiversity threat detected",
                "Quantum field instability",
            ]
        );
    }

    #[test]
    fn test_advisory_clears_on_recovery() {
        let mut rng = FixedRandom::with_offset(0.5);
        let polluted = EnvironmentalReading::new(20.0, 50.0, 49.0, 100.0, 5.0, 0.8, 0.0);
        assert_eq!(polluted.advisories, vec![Advisory::AirQualityBelowOptimal]);

        // +1.5 air quality and quantum redrawn at the top of its range.
        let recovered = tick(&polluted, &mut rng);
        assert_eq!(recovered.air_quality, 50.5);
        assert_eq!(recovered.advisories, recovered.evaluate_advisories());
        assert!(!recovered.advisories.contains(&Advisory::AirQualityBelowOptimal));
    }

    #[test]
    fn test_advisories_track_snapshot() {
        let mut rng = SeededRandom::from_seed(5);
        let mut reading = EnvironmentalReading::new(20.0, 50.0, 52.0, 100.0, 5.0, 0.51, 0.1);
        for _ in 0..1_000 {
            reading = tick(&reading, &mut rng);
            assert_eq!(reading.advisories, reading.evaluate_advisories());
            for (spec, value) in reading.bounded_fields() {
                assert!(spec.contains(value), "{} = {}", spec.name, value);
            }
        }
    }
}
