//! # Lockstep Math
//!
//! Deterministic fixed-point geometry predicates and a seeded LCG for
//! lockstep and replay-based simulations.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       LOCKSTEP MATH                          │
//! ├─────────────────────────────────────────────────────────────┤
//! │  core/           - Deterministic primitives                  │
//! │  ├── fixed.rs    - Q16.16 narrow fixed-point (Fixed32)       │
//! │  ├── wide.rs     - Q32.32 wide fixed-point (Fixed64)         │
//! │  ├── vec2.rs     - 2D vector                                 │
//! │  ├── vec3.rs     - 3D vector                                 │
//! │  ├── rng.rs      - Deterministic LCG                         │
//! │  └── hash.rs     - Stream hashing for replay verification    │
//! │                                                              │
//! │  geometry/       - Predicates (pure)                         │
//! │  ├── segment.rs  - Segment/segment and segment/rect crossing │
//! │  ├── bounds.rs   - Rect and box containment, rect overlap    │
//! │  └── metric.rs   - Distances and interpolation               │
//! │                                                              │
//! │  check.rs        - Replay self-check (config, digest report) │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Determinism Guarantee
//!
//! - No floating-point arithmetic in any predicate or draw used for state
//! - All randomness from a seeded LCG with fixed constants
//! - Geometry functions are pure and safe to call from any thread
//! - `DeterministicRandom` mutates on every draw; give each consumer its own
//!
//! Given identical inputs and seed, results are bit-identical on any platform.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod check;
pub mod core;
pub mod error;
pub mod geometry;

// Re-export commonly used types
pub use crate::core::fixed::Fixed32;
pub use crate::core::wide::Fixed64;
pub use crate::core::vec2::FixedVec2;
pub use crate::core::vec3::FixedVec3;
pub use crate::core::rng::DeterministicRandom;
pub use crate::core::hash::{StreamHash, StreamHasher};
pub use crate::error::RangeError;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
