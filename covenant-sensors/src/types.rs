//! Error types for the sensor layer.

/// Error types for samplers and the holographic console.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SensorError {
    /// Sampler already running
    #[error("Sampler already running: {0}")]
    AlreadyRunning(&'static str),

    /// Cadence is zero or too large to schedule
    #[error("Invalid cadence for {0}")]
    InvalidCadence(&'static str),

    /// Holographic projection is off
    #[error("Hologram is not active")]
    HologramInactive,

    /// Voice recognition is off
    #[error("Voice commands are disabled")]
    VoiceDisabled,
}

pub type Result<T> = std::result::Result<T, SensorError>;
