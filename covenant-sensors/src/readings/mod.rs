//! Concrete readings for each dashboard widget.

pub mod biometric;
pub mod environmental;
pub mod gesture;
pub mod quantum;

pub use biometric::{BiometricReading, PrayerRecommendation};
pub use environmental::{Advisory, EnvironmentalReading};
pub use gesture::{Gesture, GestureReading};
pub use quantum::QuantumEthicsReading;
