//! Dashboard - owns the store and every sensor.
//!
//! The enhanced dashboard is the only aggregation; there is no separate
//! minimal mode.

use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use covenant::{CovenantUser, EthicsAuditTrail, GovernanceModel, Terrain};
use covenant_sensors::{
    BiometricReading, EnvironmentalReading, GestureReading, HoloCommand, HolographicInterface,
    QuantumEthicsReading, Reading, Sampler, SamplerBuilder, SeededRandom, VoiceConsole,
};
use covenant_store::{CovenantStore, HourClock, LocalClock, PrayerRefresher};

use crate::config::DashboardConfig;
use crate::snapshot::DashboardSnapshot;
use crate::types::Result;

/// The assembled dashboard.
pub struct Dashboard {
    /// Configuration
    config: DashboardConfig,
    /// Shared view state
    store: Arc<CovenantStore>,
    /// Keeps the prayer current
    refresher: PrayerRefresher,
    /// Runs while sensors are connected
    biometrics: Sampler<BiometricReading>,
    /// Runs from start to shutdown
    environment: Sampler<EnvironmentalReading>,
    /// Runs while simulating
    quantum: Sampler<QuantumEthicsReading>,
    /// Gesture projection and voice
    holo: HolographicInterface,
    /// Read-only ethics decisions
    audit: EthicsAuditTrail,
}

impl Dashboard {
    /// Create a dashboard with default configuration.
    pub fn new() -> Self {
        Self::assemble(DashboardConfig::default(), Arc::new(LocalClock))
    }

    /// Create from configuration, using the local wall clock.
    pub fn from_config(config: DashboardConfig) -> Result<Self> {
        Self::with_clock(config, Arc::new(LocalClock))
    }

    /// Create from configuration with a custom hour clock.
    pub fn with_clock(config: DashboardConfig, clock: Arc<dyn HourClock>) -> Result<Self> {
        config.validate()?;
        Ok(Self::assemble(config, clock))
    }

    fn assemble(config: DashboardConfig, clock: Arc<dyn HourClock>) -> Self {
        let store = Arc::new(CovenantStore::with_defaults(
            clock,
            config.store.default_terrain,
            config.store.default_governance,
        ));
        let refresher = PrayerRefresher::with_interval(
            Arc::clone(&store),
            config.store.prayer_refresh_interval(),
        );

        let samplers = &config.samplers;
        let seed = samplers.seed;
        let biometrics = sampler(
            BiometricReading::default(),
            samplers.biometric_interval_ms,
            seed,
            0,
        );
        let environment = sampler(
            EnvironmentalReading::default(),
            samplers.environmental_interval_ms,
            seed,
            1,
        );
        let quantum = sampler(
            QuantumEthicsReading::default(),
            samplers.quantum_interval_ms,
            seed,
            2,
        );
        let gestures = sampler(GestureReading::default(), samplers.gesture_interval_ms, seed, 3);

        let mut voice = VoiceConsole::with_history_limit(config.voice.history_limit);
        if let Some(seed) = seed {
            voice = voice.with_random(SeededRandom::from_seed(seed.wrapping_add(4)));
        }

        info!(
            terrain = %config.store.default_terrain,
            seeded = seed.is_some(),
            "Assembled covenant dashboard"
        );

        Self {
            config,
            store,
            refresher,
            biometrics,
            environment,
            quantum,
            holo: HolographicInterface::new(gestures, voice),
            audit: EthicsAuditTrail::seeded(),
        }
    }

    /// Start the always-on tasks: environmental sampling and prayer refresh.
    pub async fn start(&self) -> Result<()> {
        self.environment.start().await?;
        self.refresher.start().await?;
        info!("Covenant dashboard started");
        Ok(())
    }

    /// Stop every running task.
    pub async fn shutdown(&self) {
        self.refresher.stop().await;
        self.environment.stop().await;
        self.biometrics.stop().await;
        self.quantum.stop().await;
        self.holo.deactivate().await;
        info!("Covenant dashboard shut down");
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// Handle to the shared store.
    pub fn store(&self) -> Arc<CovenantStore> {
        Arc::clone(&self.store)
    }

    pub fn audit_trail(&self) -> &EthicsAuditTrail {
        &self.audit
    }

    pub fn biometrics(&self) -> &Sampler<BiometricReading> {
        &self.biometrics
    }

    pub fn environment(&self) -> &Sampler<EnvironmentalReading> {
        &self.environment
    }

    pub fn quantum(&self) -> &Sampler<QuantumEthicsReading> {
        &self.quantum
    }

    pub fn hologram(&self) -> &HolographicInterface {
        &self.holo
    }

    /// Switch terrain (theme toggle).
    pub async fn set_terrain(&self, terrain: Terrain) {
        self.store.set_terrain(terrain).await;
    }

    pub async fn set_governance_model(&self, model: GovernanceModel) {
        self.store.set_governance_model(model).await;
    }

    pub async fn set_current_user(&self, user: CovenantUser) {
        self.store.set_current_user(user).await;
    }

    /// Connect the biometric sensors.
    pub async fn connect_biometrics(&self) -> Result<()> {
        Ok(self.biometrics.start().await?)
    }

    /// Disconnect the biometric sensors; the last reading is kept.
    pub async fn disconnect_biometrics(&self) {
        self.biometrics.stop().await;
    }

    pub async fn start_quantum_simulation(&self) -> Result<()> {
        Ok(self.quantum.start().await?)
    }

    pub async fn stop_quantum_simulation(&self) {
        self.quantum.stop().await;
    }

    pub async fn activate_hologram(&self) -> Result<()> {
        Ok(self.holo.activate().await?)
    }

    pub async fn deactivate_hologram(&self) {
        self.holo.deactivate().await;
    }

    pub fn set_voice_enabled(&self, enabled: bool) {
        self.holo.set_voice_enabled(enabled);
    }

    pub async fn simulate_voice_command(&self) -> Result<HoloCommand> {
        Ok(self.holo.simulate_voice_command().await?)
    }

    /// Capture everything the presentation layer renders.
    pub async fn snapshot(&self) -> DashboardSnapshot {
        let state = self.store.state().await;
        let metrics = state.terrain.profile().metrics();
        let biometrics = self.biometrics.snapshot();
        let environment = self.environment.snapshot();
        let advisories = environment
            .advisory_messages()
            .into_iter()
            .map(str::to_string)
            .collect();

        DashboardSnapshot {
            state,
            metrics,
            recommendation: biometrics.recommendation(),
            biometrics,
            biometrics_connected: self.biometrics.is_running().await,
            advisories,
            environment,
            quantum: self.quantum.snapshot(),
            quantum_simulating: self.quantum.is_running().await,
            hologram_active: self.holo.is_active().await,
            voice_enabled: self.holo.is_voice_enabled(),
            gesture: self.holo.gesture(),
            voice_history: self.holo.voice().history().await,
            ethics_decisions: self.audit.decisions().to_vec(),
            taken_at: chrono::Utc::now(),
        }
    }
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a sampler; seeded samplers get distinct streams via `offset`.
fn sampler<R: Reading>(
    initial: R,
    interval_ms: u64,
    seed: Option<u64>,
    offset: u64,
) -> Sampler<R> {
    let builder = SamplerBuilder::new(initial).cadence(Duration::from_millis(interval_ms));
    match seed {
        Some(seed) => builder.seed(seed.wrapping_add(offset)).build(),
        None => builder.build(),
    }
}
