//! Deterministic Random Number Generator
//!
//! Linear-congruential generator with fixed constants:
//!
//! ```text
//! seed ← (1664525 · seed + 1013904223) mod 2^32
//! out  ← seed >> 16
//! ```
//!
//! Given the same seed, produces an identical sequence on all platforms.
//!
//! ## Signed state
//!
//! The seed is a signed 64-bit value stored verbatim. The multiply and add
//! wrap, and `mod` truncates toward zero, so a negative seed (or one large
//! enough to wrap the multiply) keeps the state negative and `next_int`
//! returns negative values. Seeds in `[0, 2^32)` always yield outputs in
//! `[0, 65536)`. This is part of the replay contract and is not corrected.
//!
//! ## Threading
//!
//! Every draw mutates the seed, so an instance must not be shared between
//! simulations. Give each consumer its own generator (or a `clone()` to fork
//! an identical stream).

use std::fmt;

use tracing::debug;

use super::fixed::Fixed32;
use super::wide::Fixed64;
use crate::error::RangeError;

/// LCG multiplier
pub const LCG_MULTIPLIER: i64 = 1_664_525;

/// LCG increment
pub const LCG_INCREMENT: i64 = 1_013_904_223;

/// LCG modulus (2^32)
pub const LCG_MODULUS: i64 = 1 << 32;

/// Seeded LCG producing integer, fixed-point and float draws.
///
/// # Example
///
/// ```
/// use lockstep_math::core::rng::DeterministicRandom;
///
/// let mut rng = DeterministicRandom::new(12345);
/// assert_eq!(rng.next_int(), 1337); // Always the same!
/// ```
#[derive(Clone, Default)]
pub struct DeterministicRandom {
    seed: i64,
}

// State stays private, even in logs.
impl fmt::Debug for DeterministicRandom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeterministicRandom").finish_non_exhaustive()
    }
}

impl DeterministicRandom {
    /// Create a generator. The seed is stored as-is.
    pub fn new(seed: i64) -> Self {
        Self { seed }
    }

    /// Advance the state and return its upper 16 bits.
    ///
    /// Non-negative for seeds in `[0, 2^32)`; may be negative otherwise.
    #[inline]
    pub fn next_int(&mut self) -> i32 {
        self.seed = LCG_MULTIPLIER
            .wrapping_mul(self.seed)
            .wrapping_add(LCG_INCREMENT)
            % LCG_MODULUS;
        (self.seed >> 16) as i32
    }

    /// Draw `min + next_int() % (max - min)`.
    ///
    /// The remainder truncates toward zero (it takes the sign of the raw
    /// draw), so a negative stream can land below `min`.
    ///
    /// # Errors
    ///
    /// [`RangeError::EmptyRange`] when `min >= max`.
    pub fn next_int_range(&mut self, min: i32, max: i32) -> Result<i32, RangeError> {
        if min >= max {
            debug!(min, max, "rejected empty random range");
            return Err(RangeError::EmptyRange { min, max });
        }
        let span = max.wrapping_sub(min);
        Ok(min.wrapping_add(self.next_int().wrapping_rem(span)))
    }

    /// Integer draw from `[min, max)` as a narrow fixed-point value.
    pub fn next_fixed32(&mut self, min: i32, max: i32) -> Result<Fixed32, RangeError> {
        self.next_int_range(min, max).map(Fixed32::from_int)
    }

    /// Integer draw from `[min, max)` as a wide fixed-point value.
    pub fn next_fixed64(&mut self, min: i32, max: i32) -> Result<Fixed64, RangeError> {
        self.next_int_range(min, max).map(Fixed64::from_int)
    }

    /// Fraction `k / 1000` with `k` in `[0, 1000)`.
    ///
    /// Always in `[0, 1)`. A negative raw draw is folded back into
    /// `[0, 1000)`, so non-negative streams match `next_int_range(0, 1000)`.
    /// Negative streams deliberately differ from that draw: seed -12345 gives
    /// 68/1000 here where the range draw would give -932.
    pub fn next_fraction(&mut self) -> Fixed32 {
        Fixed32::ratio1000(self.next_int().rem_euclid(1000))
    }

    /// `next_int() / i32::MAX` as a float.
    ///
    /// Despite the conventional `[0, 1)` intent, raw draws never exceed
    /// 65535 so the value stays tiny, and negative streams give negative
    /// results. Not for simulation state.
    pub fn next_double(&mut self) -> f64 {
        self.next_int() as f64 / i32::MAX as f64
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_rng_known_values() {
        // These values must never change!
        // If they do, existing replays will break.
        let mut rng = DeterministicRandom::new(12345);
        let values: Vec<i32> = (0..5).map(|_| rng.next_int()).collect();
        assert_eq!(values, vec![1337, 1084, 35596, 41609, 59639]);

        let mut rng = DeterministicRandom::new(0);
        let values: Vec<i32> = (0..5).map(|_| rng.next_int()).collect();
        assert_eq!(values, vec![15470, 18256, 53708, 43769, 25170]);
    }

    #[test]
    fn test_default_is_seed_zero() {
        let mut a = DeterministicRandom::default();
        let mut b = DeterministicRandom::new(0);
        assert_eq!(a.next_int(), b.next_int());
    }

    #[test]
    fn test_negative_seed_yields_negative_draws() {
        let mut rng = DeterministicRandom::new(-12345);
        let values: Vec<i32> = (0..5).map(|_| rng.next_int()).collect();
        assert_eq!(values, vec![-35932, -30109, -59251, -19607, -9298]);
    }

    #[test]
    fn test_wrapping_seed() {
        // The multiply wraps and the state goes negative
        let mut rng = DeterministicRandom::new(i64::MAX);
        let values: Vec<i32> = (0..3).map(|_| rng.next_int()).collect();
        assert_eq!(values, vec![-50091, -53225, -56701]);
    }

    #[test]
    fn test_next_int_range_known_values() {
        let mut rng = DeterministicRandom::new(12345);
        let values: Vec<i32> = (0..5).map(|_| rng.next_int_range(0, 100).unwrap()).collect();
        assert_eq!(values, vec![37, 84, 96, 9, 39]);
    }

    #[test]
    fn test_next_int_range_truncating_remainder() {
        // -35932 % 100 == -32 (sign follows the dividend)
        let mut rng = DeterministicRandom::new(-12345);
        let values: Vec<i32> = (0..5).map(|_| rng.next_int_range(0, 100).unwrap()).collect();
        assert_eq!(values, vec![-32, -9, -51, -7, -98]);
    }

    #[test]
    fn test_next_int_range_offset() {
        let mut rng = DeterministicRandom::new(12345);
        // 1337 % 20 == 17
        assert_eq!(rng.next_int_range(-10, 10), Ok(7));
    }

    #[test]
    fn test_next_int_range_rejects_empty() {
        let mut rng = DeterministicRandom::new(1);
        assert_eq!(rng.next_int_range(5, 5), Err(RangeError::EmptyRange { min: 5, max: 5 }));
        assert_eq!(rng.next_int_range(6, 5), Err(RangeError::EmptyRange { min: 6, max: 5 }));
    }

    #[test]
    fn test_rejected_range_leaves_state() {
        let mut a = DeterministicRandom::new(77);
        let mut b = DeterministicRandom::new(77);
        assert!(a.next_int_range(3, 3).is_err());
        assert_eq!(a.next_int(), b.next_int());
    }

    #[test]
    fn test_full_i32_span() {
        let mut rng = DeterministicRandom::new(12345);
        // span wraps to -1; 1337 % -1 == 0
        assert_eq!(rng.next_int_range(i32::MIN, i32::MAX), Ok(i32::MIN));
    }

    #[test]
    fn test_next_fixed_ints() {
        let mut rng = DeterministicRandom::new(12345);
        assert_eq!(rng.next_fixed32(0, 100), Ok(Fixed32::from_int(37)));
        assert_eq!(rng.next_fixed64(0, 100), Ok(Fixed64::from_int(84)));
        assert!(rng.next_fixed32(1, 1).is_err());
        assert!(rng.next_fixed64(2, 1).is_err());
    }

    #[test]
    fn test_next_fraction_known_values() {
        let mut rng = DeterministicRandom::new(12345);
        // 1337 % 1000 = 337 -> 337/1000
        assert_eq!(rng.next_fraction(), Fixed32::ratio1000(337));

        let mut rng = DeterministicRandom::new(-12345);
        // -35932 folds to 68
        assert_eq!(rng.next_fraction(), Fixed32::ratio1000(68));
    }

    #[test]
    fn test_fraction_folds_negative_range_draw() {
        let mut literal = DeterministicRandom::new(-12345);
        let mut folded = DeterministicRandom::new(-12345);
        assert_eq!(literal.next_int_range(0, 1000), Ok(-932));
        let f = folded.next_fraction();
        assert_eq!(f.raw(), 4456);
        assert_ne!(f, Fixed32::ratio1000(-932));
    }

    #[test]
    fn test_debug_hides_state() {
        let rng = DeterministicRandom::new(424242);
        let shown = format!("{:?}", rng);
        assert_eq!(shown, "DeterministicRandom { .. }");
        assert!(!shown.contains("424242"));
    }

    #[test]
    fn test_next_double() {
        let mut rng = DeterministicRandom::new(12345);
        assert_eq!(rng.next_double(), 1337.0 / i32::MAX as f64);

        let mut rng = DeterministicRandom::new(-12345);
        assert!(rng.next_double() < 0.0);
    }

    #[test]
    fn test_clone_forks_stream() {
        let mut rng = DeterministicRandom::new(999);
        rng.next_int();
        let mut fork = rng.clone();
        for _ in 0..100 {
            assert_eq!(rng.next_int(), fork.next_int());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = DeterministicRandom::new(12345);
        let mut rng2 = DeterministicRandom::new(54321);
        assert_ne!(rng1.next_int(), rng2.next_int());
    }

    proptest! {
        #[test]
        fn prop_same_seed_same_sequence(seed in any::<i64>(), ops in prop::collection::vec(0u8..6, 1..64)) {
            let mut a = DeterministicRandom::new(seed);
            let mut b = DeterministicRandom::new(seed);
            for op in ops {
                match op {
                    0 => prop_assert_eq!(a.next_int(), b.next_int()),
                    1 => prop_assert_eq!(a.next_int_range(-50, 50), b.next_int_range(-50, 50)),
                    2 => prop_assert_eq!(a.next_fixed32(0, 10), b.next_fixed32(0, 10)),
                    3 => prop_assert_eq!(a.next_fixed64(0, 10), b.next_fixed64(0, 10)),
                    4 => prop_assert_eq!(a.next_fraction(), b.next_fraction()),
                    _ => prop_assert_eq!(a.next_double().to_bits(), b.next_double().to_bits()),
                }
            }
        }

        #[test]
        fn prop_range_error_iff_empty(seed in any::<i64>(), min in any::<i32>(), max in any::<i32>()) {
            let mut rng = DeterministicRandom::new(seed);
            let result = rng.next_int_range(min, max);
            prop_assert_eq!(result.is_err(), min >= max);
        }

        #[test]
        fn prop_canonical_seed_draw_in_range(seed in 0i64..(1i64 << 32), min in -1000i32..1000, len in 1i32..1000) {
            let mut rng = DeterministicRandom::new(seed);
            let max = min + len;
            let value = rng.next_int_range(min, max).unwrap();
            prop_assert!(value >= min && value < max);
        }

        #[test]
        fn prop_fraction_in_unit_interval(seed in any::<i64>()) {
            let mut rng = DeterministicRandom::new(seed);
            for _ in 0..16 {
                let f = rng.next_fraction();
                prop_assert!(f >= Fixed32::ZERO && f < Fixed32::ONE);
            }
        }
    }
}
