//! Covenant Store - shared view state for the dashboard
//!
//! Holds the selected terrain and governance model, the active user, the
//! sacred locations and the derived prayer. Consumers receive an
//! `Arc<CovenantStore>` at start-up; nothing here is an ambient global.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐  set_terrain / set_governance_model / set_current_user
//! │ presentation │──────────────────────────────────────────────┐
//! └──────▲───────┘                                              │
//!        │ state() / subscribe_prayer()               ┌─────────▼─────────┐
//!        └────────────────────────────────────────────│   CovenantStore   │
//!                                                     └─────────▲─────────┘
//!                                   recompute_prayer() every hour │
//!                                                     ┌─────────┴─────────┐
//!                                                     │  PrayerRefresher  │
//!                                                     └───────────────────┘
//! ```

pub mod clock;
pub mod refresher;
pub mod store;

// Re-export main types
pub use clock::{FixedClock, HourClock, LocalClock};
pub use refresher::PrayerRefresher;
pub use store::{AppState, CovenantStore, StoreError, StoreSlot};
