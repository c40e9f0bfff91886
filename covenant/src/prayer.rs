//! Prayer selection from terrain and time of day.
//!
//! The day is split into three buckets and each terrain supplies one fixed
//! string per bucket, so the whole table has exactly nine entries.

use serde::{Deserialize, Serialize};

#[cfg(feature = "typescript")]
use ts_rs::TS;

use crate::types::Terrain;

/// Time-of-day window used to pick a prayer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum PrayerBucket {
    /// Hours 0 - 9
    Sunrise,
    /// Hours 10 - 15
    Midday,
    /// Hours 16 - 23
    Sunset,
}

impl PrayerBucket {
    /// Bucket for an hour of the day. Hours past 23 count as sunset.
    pub fn from_hour(hour: u32) -> Self {
        if hour < 10 {
            Self::Sunrise
        } else if hour < 16 {
            Self::Midday
        } else {
            Self::Sunset
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sunrise => "sunrise",
            Self::Midday => "midday",
            Self::Sunset => "sunset",
        }
    }
}

/// The three prayers a terrain offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrayerSet {
    pub sunrise: &'static str,
    pub midday: &'static str,
    pub sunset: &'static str,
}

impl PrayerSet {
    /// Text for a bucket.
    pub fn get(&self, bucket: PrayerBucket) -> &'static str {
        match bucket {
            PrayerBucket::Sunrise => self.sunrise,
            PrayerBucket::Midday => self.midday,
            PrayerBucket::Sunset => self.sunset,
        }
    }
}

/// A prayer together with the inputs it was derived from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct Prayer {
    /// Terrain the prayer was selected for
    pub terrain: Terrain,
    /// Time-of-day bucket it was selected for
    pub bucket: PrayerBucket,
    /// The prayer text
    pub text: String,
}

/// Lookup over the static prayer table.
pub struct PrayerBook;

impl PrayerBook {
    /// Fixed text for a (terrain, bucket) pair.
    pub fn text(terrain: Terrain, bucket: PrayerBucket) -> &'static str {
        terrain.profile().prayers().get(bucket)
    }

    /// Prayer for a terrain at an hour of the day.
    pub fn prayer_for(terrain: Terrain, hour: u32) -> Prayer {
        let bucket = PrayerBucket::from_hour(hour);
        Prayer {
            terrain,
            bucket,
            text: Self::text(terrain, bucket).to_string(),
        }
    }
}
