//! Stream Hashing for Replay Verification
//!
//! Fingerprints a run so two machines can compare results with one digest:
//! - Cross-platform determinism checks
//! - Replay validation after engine upgrades

use sha2::{Digest, Sha256};

use super::fixed::Fixed32;
use super::vec2::FixedVec2;
use super::vec3::FixedVec3;
use super::wide::Fixed64;

/// Hash output type (256 bits / 32 bytes)
pub type StreamHash = [u8; 32];

/// Domain separator for generator/predicate streams
pub const STREAM_DOMAIN: &[u8] = b"LOCKSTEP_MATH_STREAM_V1";

/// Deterministic hasher for output streams.
///
/// Wraps SHA-256 with helpers for fixed-point types.
/// Order of updates is critical for determinism.
pub struct StreamHasher {
    hasher: Sha256,
}

impl Default for StreamHasher {
    fn default() -> Self {
        Self::new(STREAM_DOMAIN)
    }
}

impl StreamHasher {
    /// Create a new hasher with domain separator.
    pub fn new(domain: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(domain);
        Self { hasher }
    }

    /// Update with raw bytes.
    #[inline]
    pub fn update_bytes(&mut self, bytes: &[u8]) {
        self.hasher.update(bytes);
    }

    /// Update with an i32 value (little-endian).
    #[inline]
    pub fn update_i32(&mut self, value: i32) {
        self.hasher.update(value.to_le_bytes());
    }

    /// Update with an i64 value (little-endian).
    #[inline]
    pub fn update_i64(&mut self, value: i64) {
        self.hasher.update(value.to_le_bytes());
    }

    /// Update with an f64 bit pattern (little-endian).
    #[inline]
    pub fn update_f64(&mut self, value: f64) {
        self.hasher.update(value.to_bits().to_le_bytes());
    }

    /// Update with a boolean.
    #[inline]
    pub fn update_bool(&mut self, value: bool) {
        self.hasher.update([value as u8]);
    }

    /// Update with a narrow fixed-point value.
    #[inline]
    pub fn update_fixed32(&mut self, value: Fixed32) {
        self.update_i32(value.raw());
    }

    /// Update with a wide fixed-point value.
    #[inline]
    pub fn update_fixed64(&mut self, value: Fixed64) {
        self.update_i64(value.raw());
    }

    /// Update with a FixedVec2.
    #[inline]
    pub fn update_vec2(&mut self, value: FixedVec2) {
        self.update_fixed32(value.x);
        self.update_fixed32(value.y);
    }

    /// Update with a FixedVec3.
    #[inline]
    pub fn update_vec3(&mut self, value: FixedVec3) {
        self.update_fixed32(value.x);
        self.update_fixed32(value.y);
        self.update_fixed32(value.z);
    }

    /// Finalize and return the hash.
    pub fn finalize(self) -> StreamHash {
        self.hasher.finalize().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hasher_determinism() {
        let mut h1 = StreamHasher::default();
        let mut h2 = StreamHasher::default();

        h1.update_vec2(FixedVec2::from_ints(1, 2));
        h1.update_fixed64(Fixed64::ONE);
        h2.update_vec2(FixedVec2::from_ints(1, 2));
        h2.update_fixed64(Fixed64::ONE);

        assert_eq!(h1.finalize(), h2.finalize());
    }

    #[test]
    fn test_hasher_order_matters() {
        let mut h1 = StreamHasher::default();
        h1.update_i32(1);
        h1.update_i32(2);

        let mut h2 = StreamHasher::default();
        h2.update_i32(2);
        h2.update_i32(1);

        assert_ne!(h1.finalize(), h2.finalize());
    }

    #[test]
    fn test_domain_separation() {
        let mut h1 = StreamHasher::new(b"A");
        let mut h2 = StreamHasher::new(b"B");
        h1.update_bool(true);
        h2.update_bool(true);
        assert_ne!(h1.finalize(), h2.finalize());
    }

    #[test]
    fn test_vec3_hash_matches_components() {
        let v = FixedVec3::from_ints(3, -1, 8);
        let mut h1 = StreamHasher::default();
        h1.update_vec3(v);

        let mut h2 = StreamHasher::default();
        h2.update_fixed32(v.x);
        h2.update_fixed32(v.y);
        h2.update_fixed32(v.z);

        assert_eq!(h1.finalize(), h2.finalize());
    }
}
