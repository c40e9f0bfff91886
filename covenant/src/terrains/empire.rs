//! Empire terrain - authority held accountable to justice.

use crate::prayer::PrayerSet;
use crate::terrains::{TerrainMetric, TerrainProfile};
use crate::types::Terrain;

/// Provider for the empire terrain.
pub struct EmpireProfile;

impl EmpireProfile {
    /// Civic metrics, also used by the borderland.
    pub(crate) fn civic_metrics() -> Vec<TerrainMetric> {
        vec![
            TerrainMetric::new("transparency_score", 78),
            TerrainMetric::new("ethics_compliance", 94),
            TerrainMetric::new("citizen_welfare", 89),
            TerrainMetric::new("heritage_preservation", 91),
        ]
    }
}

impl TerrainProfile for EmpireProfile {
    fn terrain(&self) -> Terrain {
        Terrain::Empire
    }

    fn prayers(&self) -> PrayerSet {
        PrayerSet {
            sunrise: "Let authority serve justice, and power bow to mercy.",
            midday: "In halls of governance, let the voice of the humble be heard.",
            sunset: "May our legacy be measured in lives lifted, not treasures hoarded.",
        }
    }

    fn metrics(&self) -> Vec<TerrainMetric> {
        Self::civic_metrics()
    }
}
