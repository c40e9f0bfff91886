//! Covenant Sensors - simulated sensor feeds
//!
//! Each widget owns a [`Sampler`] that perturbs its reading on a fixed
//! cadence. Samplers share nothing with each other or with the store:
//!
//! - **Biometric**: heart rate, breathing, stress, coherence (1 s, while connected)
//! - **Environmental**: climate and ecology fields plus advisories (2 s)
//! - **Quantum ethics**: five ethical dimensions and entanglement (100 ms, while simulating)
//! - **Gesture**: holographic gesture recognition (3 s, while projecting)
//!
//! Randomness is injected through [`RandomSource`] so tests can pin it.

pub mod field;
pub mod holo;
pub mod random;
pub mod readings;
pub mod sampler;
pub mod types;

// Re-export main types
pub use field::FieldSpec;
pub use holo::{HoloCommand, HolographicInterface, VoiceConsole};
pub use random::{FixedRandom, RandomSource, SeededRandom};
pub use readings::*;
pub use sampler::{Reading, Sampler, SamplerBuilder, TickContext};
pub use types::{Result, SensorError};
