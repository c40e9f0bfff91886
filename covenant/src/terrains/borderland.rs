//! Borderland terrain - the ground between traditions.

use crate::prayer::PrayerSet;
use crate::terrains::{EmpireProfile, TerrainMetric, TerrainProfile};
use crate::types::Terrain;

/// Provider for the borderland terrain.
pub struct BorderlandProfile;

impl TerrainProfile for BorderlandProfile {
    fn terrain(&self) -> Terrain {
        Terrain::Borderland
    }

    fn prayers(&self) -> PrayerSet {
        PrayerSet {
            sunrise: "Where worlds meet, let understanding bridge difference.",
            midday: "In the space between, find sacred ground.",
            sunset: "Honor both traditions as we forge new paths.",
        }
    }

    // Borderlands have no dedicated metric set yet and show the civic one.
    fn metrics(&self) -> Vec<TerrainMetric> {
        EmpireProfile::civic_metrics()
    }
}
