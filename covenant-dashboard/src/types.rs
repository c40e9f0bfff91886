//! Error types for the dashboard.

use covenant::CovenantError;
use covenant_sensors::SensorError;
use covenant_store::StoreError;

/// Error types for the dashboard.
#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    /// Configuration could not be parsed
    #[error("Configuration error: {0}")]
    Config(#[from] serde_yaml::Error),

    /// Configuration parsed but is unusable
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Store error
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Sensor error
    #[error("Sensor error: {0}")]
    Sensor(#[from] SensorError),

    /// Domain error
    #[error("Covenant error: {0}")]
    Covenant(#[from] CovenantError),

    /// Snapshot serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DashboardError>;
