//! Holographic gesture recognition.

use serde::Serialize;
use std::time::Duration;

#[cfg(feature = "typescript")]
use ts_rs::TS;

use crate::sampler::{Reading, TickContext};

/// A recognised hand gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum Gesture {
    PeaceSign,
    OpenPalm,
    PrayerHands,
    BlessingGesture,
}

impl Gesture {
    pub const ALL: [Gesture; 4] = [
        Gesture::PeaceSign,
        Gesture::OpenPalm,
        Gesture::PrayerHands,
        Gesture::BlessingGesture,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::PeaceSign => "Peace Sign",
            Self::OpenPalm => "Open Palm",
            Self::PrayerHands => "Prayer Hands",
            Self::BlessingGesture => "Blessing Gesture",
        }
    }
}

/// Most recently recognised gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct GestureReading {
    pub gesture: Option<Gesture>,
}

impl Reading for GestureReading {
    const NAME: &'static str = "gesture";
    const DEFAULT_CADENCE: Duration = Duration::from_secs(3);

    fn next(&self, ctx: &mut TickContext<'_>) -> Self {
        Self {
            gesture: Some(Gesture::ALL[ctx.rng.index(Gesture::ALL.len())]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::FixedRandom;
    use chrono::Utc;

    #[test]
    fn test_pick_by_index() {
        let mut rng = FixedRandom::new(0.6);
        let next = GestureReading::default().next(&mut TickContext {
            rng: &mut rng,
            now: Utc::now(),
        });
        assert_eq!(next.gesture, Some(Gesture::PrayerHands));
    }
}
