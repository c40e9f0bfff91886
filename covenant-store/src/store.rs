//! CovenantStore - the shared application state.
//!
//! Every field is independently settable. The only cross-field rule is the
//! prayer: it is derived from the terrain and the hour bucket and is replaced
//! under the same lock that changes the terrain, so no reader ever sees a
//! prayer for a terrain other than the current one.

use serde::Serialize;
use std::sync::{Arc, OnceLock};
use tokio::sync::{watch, RwLock};
use tracing::{debug, info};

use covenant::seed;
use covenant::{CovenantUser, GovernanceModel, Prayer, PrayerBook, SacredLocation, Terrain};

use crate::clock::{HourClock, LocalClock};

/// Error types for the store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// Store read before it was created
    #[error("Covenant store accessed before it was created")]
    NotInitialized,

    /// Store installed twice
    #[error("Covenant store already initialized")]
    AlreadyInitialized,

    /// Refresh task already running
    #[error("Prayer refresher already running")]
    AlreadyRunning,

    /// Refresh interval is zero or too large to schedule
    #[error("Invalid prayer refresh interval: {0:?}")]
    InvalidInterval(std::time::Duration),
}

/// Point-in-time copy of the store.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppState {
    pub terrain: Terrain,
    pub governance_model: GovernanceModel,
    pub current_user: Option<CovenantUser>,
    pub sacred_locations: Vec<SacredLocation>,
    pub current_prayer: Prayer,
}

/// Independently settable fields.
#[derive(Debug)]
struct Fields {
    terrain: Terrain,
    governance_model: GovernanceModel,
    current_user: Option<CovenantUser>,
}

/// Shared dashboard state.
pub struct CovenantStore {
    /// Settable fields
    fields: Arc<RwLock<Fields>>,
    /// Seeded once, never mutated
    sacred_locations: Arc<Vec<SacredLocation>>,
    /// Derived prayer, published to subscribers
    prayer: watch::Sender<Prayer>,
    /// Hour source for bucket selection
    clock: Arc<dyn HourClock>,
}

impl CovenantStore {
    /// Create a store with default values and the local wall clock.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(LocalClock))
    }

    /// Create a store with default values and a custom clock.
    pub fn with_clock(clock: Arc<dyn HourClock>) -> Self {
        Self::with_defaults(clock, Terrain::default(), GovernanceModel::default())
    }

    /// Create a store with injected initial selections.
    pub fn with_defaults(
        clock: Arc<dyn HourClock>,
        terrain: Terrain,
        governance_model: GovernanceModel,
    ) -> Self {
        let prayer = PrayerBook::prayer_for(terrain, clock.hour());
        let (prayer_tx, _) = watch::channel(prayer);

        info!(
            terrain = %terrain,
            governance_model = %governance_model,
            "Created covenant store"
        );

        Self {
            fields: Arc::new(RwLock::new(Fields {
                terrain,
                governance_model,
                current_user: None,
            })),
            sacred_locations: Arc::new(seed::sacred_locations()),
            prayer: prayer_tx,
            clock,
        }
    }

    /// Current terrain.
    pub async fn terrain(&self) -> Terrain {
        self.fields.read().await.terrain
    }

    /// Current governance model.
    pub async fn governance_model(&self) -> GovernanceModel {
        self.fields.read().await.governance_model
    }

    /// Active user, if one has been set.
    pub async fn current_user(&self) -> Option<CovenantUser> {
        self.fields.read().await.current_user.clone()
    }

    /// Sacred locations seeded at creation.
    pub fn sacred_locations(&self) -> &[SacredLocation] {
        &self.sacred_locations
    }

    /// Prayer derived for the current terrain and last computed hour bucket.
    pub fn current_prayer(&self) -> Prayer {
        self.prayer.borrow().clone()
    }

    /// Consistent snapshot of every field.
    pub async fn state(&self) -> AppState {
        let fields = self.fields.read().await;
        AppState {
            terrain: fields.terrain,
            governance_model: fields.governance_model,
            current_user: fields.current_user.clone(),
            sacred_locations: self.sacred_locations.to_vec(),
            current_prayer: self.prayer.borrow().clone(),
        }
    }

    /// Replace the terrain and immediately recompute the prayer.
    pub async fn set_terrain(&self, terrain: Terrain) {
        let mut fields = self.fields.write().await;
        let previous = fields.terrain;
        fields.terrain = terrain;
        let changed = self.publish_prayer(terrain);

        info!(from = %previous, to = %terrain, prayer_changed = changed, "Terrain changed");
    }

    /// Replace the governance model.
    pub async fn set_governance_model(&self, governance_model: GovernanceModel) {
        let mut fields = self.fields.write().await;
        fields.governance_model = governance_model;

        info!(governance_model = %governance_model, "Governance model changed");
    }

    /// Replace the active user wholesale.
    pub async fn set_current_user(&self, user: CovenantUser) {
        let mut fields = self.fields.write().await;
        info!(user_id = %user.id, role = user.role.as_str(), "Current user set");
        fields.current_user = Some(user);
    }

    /// Re-derive the prayer from the current terrain and the clock.
    ///
    /// Returns whether the prayer text changed.
    pub async fn recompute_prayer(&self) -> bool {
        let fields = self.fields.read().await;
        self.publish_prayer(fields.terrain)
    }

    /// Subscribe to prayer changes.
    pub fn subscribe_prayer(&self) -> watch::Receiver<Prayer> {
        self.prayer.subscribe()
    }

    /// Compute and publish; subscribers are only woken on change.
    fn publish_prayer(&self, terrain: Terrain) -> bool {
        let next = PrayerBook::prayer_for(terrain, self.clock.hour());
        let changed = self.prayer.send_if_modified(|current| {
            if *current == next {
                false
            } else {
                *current = next;
                true
            }
        });

        debug!(
            terrain = %terrain,
            changed,
            "Recomputed prayer"
        );
        changed
    }
}

impl Default for CovenantStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Holder for a store that may not exist yet.
///
/// Reading an empty slot is a construction-order bug and fails loudly
/// instead of handing out defaults that would later diverge.
#[derive(Default)]
pub struct StoreSlot {
    inner: OnceLock<Arc<CovenantStore>>,
}

impl StoreSlot {
    /// Create an empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the store. Only the first call succeeds.
    pub fn install(&self, store: Arc<CovenantStore>) -> Result<(), StoreError> {
        self.inner
            .set(store)
            .map_err(|_| StoreError::AlreadyInitialized)
    }

    /// Get the installed store.
    pub fn get(&self) -> Result<Arc<CovenantStore>, StoreError> {
        self.inner.get().cloned().ok_or(StoreError::NotInitialized)
    }

    /// Whether a store has been installed.
    pub fn is_initialized(&self) -> bool {
        self.inner.get().is_some()
    }
}
