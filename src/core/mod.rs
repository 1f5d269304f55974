//! Core deterministic primitives.
//!
//! All types in this module are designed for perfect cross-platform determinism.

pub mod fixed;
pub mod wide;
pub mod vec2;
pub mod vec3;
pub mod rng;
pub mod hash;

// Re-export core types
pub use fixed::{Fixed32, FIXED_ONE, FIXED_HALF, FIXED_SCALE};
pub use wide::Fixed64;
pub use vec2::FixedVec2;
pub use vec3::FixedVec3;
pub use rng::DeterministicRandom;
pub use hash::{StreamHash, StreamHasher};
