//! Point-in-time view handed to the presentation layer.

use chrono::{DateTime, Utc};
use serde::Serialize;

use covenant::{EthicsDecision, TerrainMetric};
use covenant_sensors::{
    BiometricReading, EnvironmentalReading, GestureReading, HoloCommand, PrayerRecommendation,
    QuantumEthicsReading,
};
use covenant_store::AppState;

use crate::types::Result;

/// Everything the dashboard renders, captured at one moment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSnapshot {
    /// Store contents
    pub state: AppState,
    /// Headline metrics for the current terrain
    pub metrics: Vec<TerrainMetric>,
    pub biometrics: BiometricReading,
    pub biometrics_connected: bool,
    pub recommendation: PrayerRecommendation,
    pub environment: EnvironmentalReading,
    /// Advisory texts for the environment reading
    pub advisories: Vec<String>,
    pub quantum: QuantumEthicsReading,
    pub quantum_simulating: bool,
    pub hologram_active: bool,
    pub voice_enabled: bool,
    pub gesture: GestureReading,
    /// Voice commands, newest first
    pub voice_history: Vec<HoloCommand>,
    /// Ethics decisions, newest first
    pub ethics_decisions: Vec<EthicsDecision>,
    /// When the snapshot was taken
    pub taken_at: DateTime<Utc>,
}

impl DashboardSnapshot {
    /// Serialize to JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serialize to indented JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
