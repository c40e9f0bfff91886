//! Holographic interface - gesture projection and voice commands.
//!
//! Voice commands are simulated: each one is drawn from a fixed set of
//! command/response pairs and kept in a short newest-first history.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info};

#[cfg(feature = "typescript")]
use ts_rs::TS;

use crate::random::{RandomSource, SeededRandom};
use crate::readings::GestureReading;
use crate::sampler::Sampler;
use crate::types::{Result, SensorError};

/// Default number of voice commands kept.
pub const DEFAULT_HISTORY_LIMIT: usize = 5;

const VOICE_COMMANDS: [(&str, &str); 4] = [
    (
        "Show sacred locations",
        "Displaying 12 sacred sites within 50km radius",
    ),
    (
        "Prayer time notification",
        "Next prayer time: Maghrib at 6:47 PM",
    ),
    ("Ethics consultation", "Connecting to interfaith council..."),
    (
        "Environmental status",
        "All systems within sacred parameters",
    ),
];

/// A recognised voice command and the interface's response.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct HoloCommand {
    /// Unique command ID
    pub id: String,
    /// What was said
    pub command: String,
    /// What the interface answered
    pub response: String,
    /// When it was heard
    pub timestamp: DateTime<Utc>,
}

/// Simulated voice command console.
pub struct VoiceConsole {
    /// Whether voice recognition is on
    enabled: AtomicBool,
    /// Commands, newest first
    history: RwLock<VecDeque<HoloCommand>>,
    /// Maximum commands to retain
    history_limit: usize,
    /// Picks the next command
    rng: Mutex<Box<dyn RandomSource>>,
}

impl VoiceConsole {
    /// Create a disabled console with the default history limit.
    pub fn new() -> Self {
        Self::with_history_limit(DEFAULT_HISTORY_LIMIT)
    }

    /// Create with a custom history limit.
    pub fn with_history_limit(history_limit: usize) -> Self {
        Self {
            enabled: AtomicBool::new(false),
            history: RwLock::new(VecDeque::new()),
            history_limit,
            rng: Mutex::new(Box::new(SeededRandom::from_entropy())),
        }
    }

    /// Use a specific random source.
    pub fn with_random(mut self, rng: impl RandomSource + 'static) -> Self {
        self.rng = Mutex::new(Box::new(rng));
        self
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::SeqCst)
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::SeqCst);
        info!(enabled, "Voice commands toggled");
    }

    /// Hear one simulated command.
    pub async fn simulate_command(&self) -> Result<HoloCommand> {
        if !self.is_enabled() {
            return Err(SensorError::VoiceDisabled);
        }

        let (command, response) = {
            let mut rng = self.rng.lock().await;
            VOICE_COMMANDS[rng.index(VOICE_COMMANDS.len())]
        };
        let entry = HoloCommand {
            id: uuid::Uuid::new_v4().to_string(),
            command: command.to_string(),
            response: response.to_string(),
            timestamp: Utc::now(),
        };

        let mut history = self.history.write().await;
        history.push_front(entry.clone());
        history.truncate(self.history_limit);

        debug!(command_id = %entry.id, command = %entry.command, "Voice command simulated");
        Ok(entry)
    }

    /// Commands heard, newest first.
    pub async fn history(&self) -> Vec<HoloCommand> {
        self.history.read().await.iter().cloned().collect()
    }

    /// Forget all commands.
    pub async fn clear(&self) {
        self.history.write().await.clear();
    }
}

impl Default for VoiceConsole {
    fn default() -> Self {
        Self::new()
    }
}

/// Holographic projection with gesture tracking and voice commands.
pub struct HolographicInterface {
    gestures: Sampler<GestureReading>,
    voice: VoiceConsole,
}

impl HolographicInterface {
    pub fn new(gestures: Sampler<GestureReading>, voice: VoiceConsole) -> Self {
        Self { gestures, voice }
    }

    /// Turn on the projection and start gesture tracking.
    pub async fn activate(&self) -> Result<()> {
        self.gestures.start().await
    }

    /// Turn off the projection. Voice history is kept.
    pub async fn deactivate(&self) {
        self.gestures.stop().await;
    }

    pub async fn is_active(&self) -> bool {
        self.gestures.is_running().await
    }

    pub fn set_voice_enabled(&self, enabled: bool) {
        self.voice.set_enabled(enabled);
    }

    pub fn is_voice_enabled(&self) -> bool {
        self.voice.is_enabled()
    }

    /// Simulate a voice command. Requires an active projection with voice on.
    pub async fn simulate_voice_command(&self) -> Result<HoloCommand> {
        if !self.is_active().await {
            return Err(SensorError::HologramInactive);
        }
        self.voice.simulate_command().await
    }

    /// Most recent gesture.
    pub fn gesture(&self) -> GestureReading {
        self.gestures.snapshot()
    }

    pub fn gestures(&self) -> &Sampler<GestureReading> {
        &self.gestures
    }

    pub fn voice(&self) -> &VoiceConsole {
        &self.voice
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::FixedRandom;
    use crate::readings::Gesture;
    use std::time::Duration;

    #[tokio::test]
    async fn test_disabled_console_rejects() {
        let console = VoiceConsole::new();
        assert_eq!(
            console.simulate_command().await,
            Err(SensorError::VoiceDisabled)
        );
        assert!(console.history().await.is_empty());
    }

    #[tokio::test]
    async fn test_history_newest_first_and_capped() {
        let console = VoiceConsole::new().with_random(FixedRandom::new(0.0));
        console.set_enabled(true);

        let mut ids = Vec::new();
        for _ in 0..7 {
            ids.push(console.simulate_command().await.unwrap().id);
        }

        let history = console.history().await;
        assert_eq!(history.len(), DEFAULT_HISTORY_LIMIT);
        assert_eq!(history[0].id, ids[6]);
        assert_eq!(history[4].id, ids[2]);
        assert_eq!(history[0].command, "Show sacred locations");
        assert_eq!(
            history[0].response,
            "Displaying 12 sacred sites within 50km radius"
        );
    }

    #[tokio::test]
    async fn test_command_selection() {
        let console = VoiceConsole::new().with_random(FixedRandom::new(0.99));
        console.set_enabled(true);

        let command = console.simulate_command().await.unwrap();
        assert_eq!(command.command, "Environmental status");
    }

    #[tokio::test(start_paused = true)]
    async fn test_hologram_gestures_and_voice() {
        let gestures = Sampler::builder(GestureReading::default())
            .random(FixedRandom::new(0.3))
            .build();
        let holo = HolographicInterface::new(gestures, VoiceConsole::new());
        holo.set_voice_enabled(true);

        assert_eq!(
            holo.simulate_voice_command().await,
            Err(SensorError::HologramInactive)
        );

        holo.activate().await.unwrap();
        let mut rx = holo.gestures().subscribe();
        rx.changed().await.unwrap();
        assert_eq!(holo.gesture().gesture, Some(Gesture::OpenPalm));
        assert!(holo.simulate_voice_command().await.is_ok());

        holo.deactivate().await;
        tokio::time::sleep(Duration::from_secs(10)).await;
        assert!(!holo.is_active().await);
        assert_eq!(holo.voice().history().await.len(), 1);
    }
}
