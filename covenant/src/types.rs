//! Core types for the covenant domain.
//!
//! With the `typescript` feature enabled, these types can be exported to TypeScript
//! using ts-rs for consistency with the dashboard front-end.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "typescript")]
use ts_rs::TS;

use crate::terrains::{profile_for, TerrainProfile};

/// Terrain context - the selected narrative theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "lowercase")]
pub enum Terrain {
    /// Nomadic desert lands
    Desert,
    /// Seat of imperial governance
    Empire,
    /// Where traditions meet
    Borderland,
}

impl Terrain {
    /// Get string representation used by the front-end
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Desert => "desert",
            Self::Empire => "empire",
            Self::Borderland => "borderland",
        }
    }

    /// All terrains in display order
    pub fn all() -> [Self; 3] {
        [Self::Desert, Self::Empire, Self::Borderland]
    }

    /// Profile supplying prayers and metrics for this terrain
    pub fn profile(&self) -> &'static dyn TerrainProfile {
        profile_for(*self)
    }
}

impl Default for Terrain {
    fn default() -> Self {
        Self::Desert
    }
}

impl fmt::Display for Terrain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Terrain {
    type Err = CovenantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "desert" => Ok(Self::Desert),
            "empire" => Ok(Self::Empire),
            "borderland" => Ok(Self::Borderland),
            other => Err(CovenantError::UnknownTerrain(other.to_string())),
        }
    }
}

/// Governance model - display-only organisational label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "kebab-case")]
pub enum GovernanceModel {
    /// Travelling clans, consensus of elders
    Nomadic,
    /// Hereditary ducal authority
    Ducal,
    /// Council drawn from several faiths
    InterfaithCouncil,
}

impl GovernanceModel {
    /// Get string representation used by the front-end
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Nomadic => "nomadic",
            Self::Ducal => "ducal",
            Self::InterfaithCouncil => "interfaith-council",
        }
    }
}

impl Default for GovernanceModel {
    fn default() -> Self {
        Self::Nomadic
    }
}

impl fmt::Display for GovernanceModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GovernanceModel {
    type Err = CovenantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "nomadic" => Ok(Self::Nomadic),
            "ducal" => Ok(Self::Ducal),
            "interfaith-council" | "interfaith_council" => Ok(Self::InterfaithCouncil),
            other => Err(CovenantError::UnknownGovernanceModel(other.to_string())),
        }
    }
}

/// Role a user plays within the covenant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "kebab-case")]
pub enum UserRole {
    Steward,
    Elder,
    Nomad,
    Duke,
    Ethicist,
    AiWhisperer,
}

impl UserRole {
    /// Get string representation used by the front-end
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Steward => "steward",
            Self::Elder => "elder",
            Self::Nomad => "nomad",
            Self::Duke => "duke",
            Self::Ethicist => "ethicist",
            Self::AiWhisperer => "ai-whisperer",
        }
    }
}

/// The active user of the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct CovenantUser {
    /// Unique identifier
    pub id: String,
    /// Role within the covenant
    pub role: UserRole,
    /// Terrain the user is situated in
    pub location: Terrain,
    /// Granted permissions
    pub permissions: Vec<String>,
    /// Free-form cultural context
    pub cultural_context: String,
}

impl CovenantUser {
    /// Create a user with no permissions and empty cultural context.
    pub fn new(id: impl Into<String>, role: UserRole, location: Terrain) -> Self {
        Self {
            id: id.into(),
            role,
            location,
            permissions: Vec::new(),
            cultural_context: String::new(),
        }
    }

    /// Grant a permission.
    pub fn with_permission(mut self, permission: impl Into<String>) -> Self {
        self.permissions.push(permission.into());
        self
    }

    /// Set the cultural context.
    pub fn with_cultural_context(mut self, context: impl Into<String>) -> Self {
        self.cultural_context = context.into();
        self
    }

    /// Check whether the user holds a permission.
    pub fn has_permission(&self, permission: &str) -> bool {
        self.permissions.iter().any(|p| p == permission)
    }
}

/// Kind of sacred location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "kebab-case")]
pub enum LocationType {
    BurialGround,
    PrayerSite,
    MigrationPath,
    WaterSource,
}

/// How strongly a sacred location is protected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum ProtectionLevel {
    /// Elders are consulted, no veto
    Consultative,
    /// Protected unless governance grants an exception
    Conditional,
    /// Never disturbed
    Absolute,
}

/// Longitude/latitude pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct Coordinates {
    pub lon: f64,
    pub lat: f64,
}

impl Coordinates {
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }
}

/// A point of interest that must be protected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct SacredLocation {
    /// Unique identifier
    pub id: String,
    /// Human-readable name
    pub name: String,
    /// Kind of location
    #[serde(rename = "type")]
    pub location_type: LocationType,
    /// Where it is
    pub coordinates: Coordinates,
    /// Protection level
    pub protection_level: ProtectionLevel,
}

/// Dimension along which an ethics decision is assessed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum ImpactArea {
    Soil,
    Water,
    Memory,
    Trust,
    Spirit,
}

impl ImpactArea {
    /// All areas in display order
    pub fn all() -> [Self; 5] {
        [Self::Soil, Self::Water, Self::Memory, Self::Trust, Self::Spirit]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Soil => "soil",
            Self::Water => "water",
            Self::Memory => "memory",
            Self::Trust => "trust",
            Self::Spirit => "spirit",
        }
    }
}

/// Impact scores (0.0 - 1.0) per area.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct ImpactAreas {
    pub soil: f64,
    pub water: f64,
    pub memory: f64,
    pub trust: f64,
    pub spirit: f64,
}

impl ImpactAreas {
    /// Score for a single area.
    pub fn get(&self, area: ImpactArea) -> f64 {
        match area {
            ImpactArea::Soil => self.soil,
            ImpactArea::Water => self.water,
            ImpactArea::Memory => self.memory,
            ImpactArea::Trust => self.trust,
            ImpactArea::Spirit => self.spirit,
        }
    }

    /// Iterate (area, score) pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (ImpactArea, f64)> + '_ {
        ImpactArea::all().into_iter().map(move |area| (area, self.get(area)))
    }
}

/// Coarse banding of an impact score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum ImpactLevel {
    Low,
    Moderate,
    High,
}

impl ImpactLevel {
    /// Band a score: above 0.7 is high, above 0.4 moderate, otherwise low.
    pub fn from_score(score: f64) -> Self {
        if score > 0.7 {
            Self::High
        } else if score > 0.4 {
            Self::Moderate
        } else {
            Self::Low
        }
    }
}

/// A recorded ethics decision shown in the audit trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct EthicsDecision {
    /// Unique identifier
    pub id: String,
    /// What was proposed
    pub action: String,
    /// When it was decided
    pub timestamp: DateTime<Utc>,
    /// Terrain the action takes place in
    pub context: Terrain,
    /// Assessed impact per area
    pub impact_areas: ImpactAreas,
    /// Whether the action went ahead
    pub approved: bool,
    /// Authority that overrode the proposal, if any
    pub override_authority: Option<String>,
    /// Reasoning recorded with the decision
    pub justification: String,
}

impl EthicsDecision {
    /// Band the score for one impact area.
    pub fn impact_level(&self, area: ImpactArea) -> ImpactLevel {
        ImpactLevel::from_score(self.impact_areas.get(area))
    }

    /// Whether an outside authority overrode the proposal.
    pub fn is_overridden(&self) -> bool {
        self.override_authority.is_some()
    }
}

/// Error types for the covenant domain.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CovenantError {
    /// Terrain name not recognised
    #[error("Unknown terrain: {0}")]
    UnknownTerrain(String),

    /// Governance model name not recognised
    #[error("Unknown governance model: {0}")]
    UnknownGovernanceModel(String),

    /// No decision with this ID in the audit trail
    #[error("Ethics decision not found: {0}")]
    DecisionNotFound(String),
}
