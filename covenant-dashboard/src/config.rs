//! Configuration for the dashboard.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use covenant::{GovernanceModel, Terrain};

use crate::types::{DashboardError, Result};

/// Longest accepted prayer refresh interval (one week).
pub const MAX_PRAYER_REFRESH_SECS: u64 = 7 * 24 * 3600;

/// Longest accepted sampler interval (one hour).
pub const MAX_SAMPLER_INTERVAL_MS: u64 = 3600 * 1000;

/// Configuration for a Covenant Dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Store configuration
    pub store: StoreConfig,
    /// Sampler configuration
    pub samplers: SamplerConfig,
    /// Voice console configuration
    pub voice: VoiceConfig,
}

impl DashboardConfig {
    /// Load config from YAML. Missing keys take their defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to YAML.
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Reject timer intervals outside their bounds and an empty history.
    pub fn validate(&self) -> Result<()> {
        let samplers = &self.samplers;
        let intervals = [
            (
                "store.prayer_refresh_secs",
                self.store.prayer_refresh_secs,
                MAX_PRAYER_REFRESH_SECS,
            ),
            (
                "samplers.biometric_interval_ms",
                samplers.biometric_interval_ms,
                MAX_SAMPLER_INTERVAL_MS,
            ),
            (
                "samplers.environmental_interval_ms",
                samplers.environmental_interval_ms,
                MAX_SAMPLER_INTERVAL_MS,
            ),
            (
                "samplers.quantum_interval_ms",
                samplers.quantum_interval_ms,
                MAX_SAMPLER_INTERVAL_MS,
            ),
            (
                "samplers.gesture_interval_ms",
                samplers.gesture_interval_ms,
                MAX_SAMPLER_INTERVAL_MS,
            ),
        ];
        for (name, value, max) in intervals {
            if value == 0 || value > max {
                return Err(DashboardError::InvalidConfig(format!(
                    "{name} must be between 1 and {max}, got {value}"
                )));
            }
        }
        if self.voice.history_limit == 0 {
            return Err(DashboardError::InvalidConfig(
                "voice.history_limit must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Store configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Terrain selected at start-up
    pub default_terrain: Terrain,
    /// Governance model selected at start-up
    pub default_governance: GovernanceModel,
    /// Prayer refresh interval (seconds)
    pub prayer_refresh_secs: u64,
}

impl StoreConfig {
    pub fn prayer_refresh_interval(&self) -> Duration {
        Duration::from_secs(self.prayer_refresh_secs)
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            default_terrain: Terrain::Desert,
            default_governance: GovernanceModel::Nomadic,
            prayer_refresh_secs: 3600, // 1 hour
        }
    }
}

/// Sampler configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplerConfig {
    /// Biometric cadence (ms)
    pub biometric_interval_ms: u64,
    /// Environmental cadence (ms)
    pub environmental_interval_ms: u64,
    /// Quantum ethics cadence (ms)
    pub quantum_interval_ms: u64,
    /// Gesture cadence (ms)
    pub gesture_interval_ms: u64,
    /// Seed for reproducible runs; entropy when absent
    pub seed: Option<u64>,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            biometric_interval_ms: 1000,
            environmental_interval_ms: 2000,
            quantum_interval_ms: 100,
            gesture_interval_ms: 3000,
            seed: None,
        }
    }
}

/// Voice console configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VoiceConfig {
    /// Commands kept in history
    pub history_limit: usize,
}

impl Default for VoiceConfig {
    fn default() -> Self {
        Self { history_limit: 5 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DashboardConfig::default();
        assert_eq!(config.store.default_terrain, Terrain::Desert);
        assert_eq!(config.store.prayer_refresh_interval(), Duration::from_secs(3600));
        assert_eq!(config.samplers.quantum_interval_ms, 100);
        assert_eq!(config.voice.history_limit, 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_yaml_roundtrip() {
        let mut config = DashboardConfig::default();
        config.store.default_terrain = Terrain::Borderland;
        config.samplers.seed = Some(42);

        let yaml = config.to_yaml().unwrap();
        let parsed = DashboardConfig::from_yaml(&yaml).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let yaml = "store:\n  default_governance: interfaith-council\n";
        let config = DashboardConfig::from_yaml(yaml).unwrap();

        assert_eq!(config.store.default_governance, GovernanceModel::InterfaithCouncil);
        assert_eq!(config.store.default_terrain, Terrain::Desert);
        assert_eq!(config.samplers.biometric_interval_ms, 1000);
    }

    #[test]
    fn test_zero_interval_rejected() {
        let yaml = "samplers:\n  quantum_interval_ms: 0\n";
        let err = DashboardConfig::from_yaml(yaml).unwrap_err();
        assert!(matches!(err, DashboardError::InvalidConfig(_)));
    }

    #[test]
    fn test_oversized_interval_rejected() {
        let yaml = "store:\n  prayer_refresh_secs: 18446744073709551615\n";
        let err = DashboardConfig::from_yaml(yaml).unwrap_err();
        assert!(matches!(err, DashboardError::InvalidConfig(_)));

        let mut config = DashboardConfig::default();
        config.samplers.gesture_interval_ms = MAX_SAMPLER_INTERVAL_MS + 1;
        assert!(matches!(config.validate(), Err(DashboardError::InvalidConfig(_))));

        config.samplers.gesture_interval_ms = MAX_SAMPLER_INTERVAL_MS;
        config.store.prayer_refresh_secs = MAX_PRAYER_REFRESH_SECS;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_bad_yaml_rejected() {
        let err = DashboardConfig::from_yaml("store:\n  default_terrain: tundra\n").unwrap_err();
        assert!(matches!(err, DashboardError::Config(_)));
    }
}
