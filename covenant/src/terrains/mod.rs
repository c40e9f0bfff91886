//! Terrain profile definitions.
//!
//! Each terrain provides its prayers and the headline metrics shown on the
//! dashboard.

pub mod borderland;
pub mod desert;
pub mod empire;

pub use borderland::BorderlandProfile;
pub use desert::DesertProfile;
pub use empire::EmpireProfile;

use serde::{Deserialize, Serialize};

#[cfg(feature = "typescript")]
use ts_rs::TS;

use crate::prayer::PrayerSet;
use crate::types::Terrain;

/// Trait for terrain-specific content.
pub trait TerrainProfile: Send + Sync {
    /// Get the terrain this profile describes
    fn terrain(&self) -> Terrain;

    /// Prayers for each time-of-day bucket
    fn prayers(&self) -> PrayerSet;

    /// Headline metrics for the dashboard
    fn metrics(&self) -> Vec<TerrainMetric>;
}

/// A named headline metric (0 - 100 unless it is a count).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct TerrainMetric {
    /// Machine key, e.g. `water_level`
    pub key: String,
    /// Display label, e.g. `water level`
    pub label: String,
    pub value: u32,
}

impl TerrainMetric {
    /// Create a metric; the label is the key with underscores as spaces.
    pub fn new(key: &str, value: u32) -> Self {
        Self {
            key: key.to_string(),
            label: key.replace('_', " "),
            value,
        }
    }
}

/// Look up the profile for a terrain.
pub fn profile_for(terrain: Terrain) -> &'static dyn TerrainProfile {
    match terrain {
        Terrain::Desert => &DesertProfile,
        Terrain::Empire => &EmpireProfile,
        Terrain::Borderland => &BorderlandProfile,
    }
}
