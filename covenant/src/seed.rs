//! Fixed seed data loaded once at start-up.

use chrono::{DateTime, NaiveDate, Utc};

use crate::types::{
    Coordinates, EthicsDecision, ImpactAreas, LocationType, ProtectionLevel, SacredLocation,
    Terrain,
};

/// Sacred locations known to the dashboard.
pub fn sacred_locations() -> Vec<SacredLocation> {
    vec![
        SacredLocation {
            id: "1".to_string(),
            name: "Ancient Well of Remembrance".to_string(),
            location_type: LocationType::WaterSource,
            coordinates: Coordinates::new(35.2137, 31.7683),
            protection_level: ProtectionLevel::Absolute,
        },
        SacredLocation {
            id: "2".to_string(),
            name: "Nomad Migration Path".to_string(),
            location_type: LocationType::MigrationPath,
            coordinates: Coordinates::new(34.8021, 32.1056),
            protection_level: ProtectionLevel::Conditional,
        },
    ]
}

/// Recorded ethics decisions, oldest first.
pub fn ethics_decisions() -> Vec<EthicsDecision> {
    vec![
        EthicsDecision {
            id: "3".to_string(),
            action: "Deploy water monitoring sensors".to_string(),
            timestamp: at(2024, 6, 2, 8, 15),
            context: Terrain::Desert,
            impact_areas: ImpactAreas {
                soil: 0.1,
                water: 0.95,
                memory: 0.2,
                trust: 0.8,
                spirit: 0.6,
            },
            approved: true,
            override_authority: None,
            justification: "Critical for drought preparation and water justice.".to_string(),
        },
        EthicsDecision {
            id: "2".to_string(),
            action: "Implement transparent taxation interface".to_string(),
            timestamp: at(2024, 6, 3, 14, 20),
            context: Terrain::Empire,
            impact_areas: ImpactAreas {
                soil: 0.0,
                water: 0.0,
                memory: 0.1,
                trust: 0.95,
                spirit: 0.7,
            },
            approved: true,
            override_authority: None,
            justification: "Enhances civic accountability and honors stewardship principles."
                .to_string(),
        },
        EthicsDecision {
            id: "1".to_string(),
            action: "Install solar grid in Wadi Al-Noor".to_string(),
            timestamp: at(2024, 6, 4, 10, 30),
            context: Terrain::Desert,
            impact_areas: ImpactAreas {
                soil: 0.2,
                water: 0.1,
                memory: 0.8,
                trust: 0.9,
                spirit: 0.3,
            },
            approved: false,
            override_authority: Some("Elder Council of Sinai".to_string()),
            justification:
                "Site contains unmarked ancestral graves. Relocating to adjacent dune.".to_string(),
        },
    ]
}

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, 0))
        .map(|naive| naive.and_utc())
        .unwrap_or_default()
}
