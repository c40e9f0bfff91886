//! Desert terrain - water, migration and ancestral memory.

use crate::prayer::PrayerSet;
use crate::terrains::{TerrainMetric, TerrainProfile};
use crate::types::Terrain;

/// Provider for the desert terrain.
pub struct DesertProfile;

impl TerrainProfile for DesertProfile {
    fn terrain(&self) -> Terrain {
        Terrain::Desert
    }

    fn prayers(&self) -> PrayerSet {
        PrayerSet {
            sunrise: "As water flows through parched earth, let wisdom flow through our decisions.",
            midday: "In the heat of action, grant us the shade of reflection.",
            sunset: "May our footsteps honor those who walked before us.",
        }
    }

    fn metrics(&self) -> Vec<TerrainMetric> {
        vec![
            TerrainMetric::new("water_level", 85),
            TerrainMetric::new("solar_capacity", 92),
            TerrainMetric::new("migration_paths", 3),
            TerrainMetric::new("sacred_sites", 12),
        ]
    }
}
