//! Covenant domain model
//!
//! This crate holds everything the dashboard knows that does not depend on
//! time passing or on a runtime:
//!
//! - **Terrain**: Desert, Empire, Borderland - the narrative theme driving
//!   prayer text, associated governance model and headline metrics
//! - **Governance model**: display label for the organisational style
//! - **Sacred locations**: fixed points of interest seeded at start-up
//! - **Ethics decisions**: the read-only audit trail shown on the dashboard
//!
//! # Key Components
//!
//! - [`TerrainProfile`]: Per-terrain prayers, governance and metrics
//! - [`PrayerBook`]: Maps (terrain, hour-of-day) to one fixed prayer string
//! - [`EthicsAuditTrail`]: Read-only queries over the seeded decisions
//!
//! # Example
//!
//! ```
//! use covenant::{PrayerBook, PrayerBucket, Terrain};
//!
//! let prayer = PrayerBook::prayer_for(Terrain::Desert, 8);
//! assert_eq!(prayer.bucket, PrayerBucket::Sunrise);
//! ```

pub mod audit;
pub mod prayer;
pub mod seed;
pub mod terrains;
pub mod types;

// Re-export main types
pub use audit::EthicsAuditTrail;
pub use prayer::{Prayer, PrayerBook, PrayerBucket, PrayerSet};
pub use terrains::*;
pub use types::*;
