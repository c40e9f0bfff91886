//! Covenant Dashboard - the assembled application core
//!
//! Wires the shared store, every sensor sampler, the holographic console
//! and the ethics audit trail into one explicitly owned [`Dashboard`]:
//!
//! - **Store**: terrain, governance, user, locations, prayer
//! - **Samplers**: biometric, environmental, quantum ethics, gesture
//! - **Audit trail**: read-only ethics decisions
//!
//! # Example
//!
//! ```ignore
//! use covenant_dashboard::{Dashboard, DashboardConfig};
//!
//! let config = DashboardConfig::from_yaml(&std::fs::read_to_string("dashboard.yaml")?)?;
//! let dashboard = Dashboard::from_config(config)?;
//! dashboard.start().await?;
//! dashboard.connect_biometrics().await?;
//! let json = dashboard.snapshot().await.to_json()?;
//! ```

pub mod config;
pub mod dashboard;
pub mod snapshot;
pub mod types;

// Re-export main types
pub use config::DashboardConfig;
pub use dashboard::Dashboard;
pub use snapshot::DashboardSnapshot;
pub use types::{DashboardError, Result};
