//! Q32.32 Fixed-Point Arithmetic (wide precision)
//!
//! Same rounding rules as [`Fixed32`](super::fixed::Fixed32), with an i64
//! backing store and i128 intermediates.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

/// Number of fractional bits (32)
pub const WIDE_SCALE: i32 = 32;

/// 1.0 in wide fixed-point
pub const WIDE_ONE: i64 = 1 << WIDE_SCALE;

/// Wide fixed-point scalar (Q32.32).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fixed64(i64);

impl Fixed64 {
    /// Zero constant
    pub const ZERO: Self = Self(0);

    /// One constant
    pub const ONE: Self = Self(WIDE_ONE);

    /// Create from raw Q32.32 value
    #[inline]
    pub const fn from_raw(raw: i64) -> Self {
        Self(raw)
    }

    /// Create from integer. Every i32 is representable.
    #[inline]
    pub const fn from_int(i: i32) -> Self {
        Self((i as i64) << WIDE_SCALE)
    }

    /// `k / 100`, truncated toward zero.
    #[inline]
    pub fn ratio100(k: i32) -> Self {
        Self::ratio(k, 100)
    }

    /// `k / 1000`, truncated toward zero.
    #[inline]
    pub fn ratio1000(k: i32) -> Self {
        Self::ratio(k, 1000)
    }

    #[inline]
    fn ratio(numerator: i32, denominator: i64) -> Self {
        Self(((numerator as i64) << WIDE_SCALE) / denominator)
    }

    /// Get raw Q32.32 value
    #[inline]
    pub const fn raw(self) -> i64 {
        self.0
    }

    /// Absolute value
    #[inline]
    pub fn abs(self) -> Self {
        Self(self.0.wrapping_abs())
    }

    /// Square root (zero for non-positive input)
    pub fn sqrt(self) -> Self {
        if self.0 <= 0 {
            return Self::ZERO;
        }
        Self(isqrt_u128((self.0 as u128) << WIDE_SCALE) as i64)
    }

    /// Smaller of two values
    #[inline]
    pub fn min(self, other: Self) -> Self {
        if self < other { self } else { other }
    }

    /// Larger of two values
    #[inline]
    pub fn max(self, other: Self) -> Self {
        if self > other { self } else { other }
    }

    /// Clamp into `[min, max]`
    #[inline]
    pub fn clamp(self, min: Self, max: Self) -> Self {
        self.min(max).max(min)
    }

    /// Convert to float for display.
    #[inline]
    pub fn to_f64(self) -> f64 {
        self.0 as f64 / WIDE_ONE as f64
    }
}

fn isqrt_u128(n: u128) -> u128 {
    let mut rem = n;
    let mut root = 0u128;
    let mut bit = 1u128 << 126;

    while bit > rem {
        bit >>= 2;
    }

    while bit != 0 {
        if rem >= root + bit {
            rem -= root + bit;
            root = (root >> 1) + bit;
        } else {
            root >>= 1;
        }
        bit >>= 2;
    }

    root
}

impl Add for Fixed64 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self(self.0.wrapping_add(rhs.0))
    }
}

impl Sub for Fixed64 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self(self.0.wrapping_sub(rhs.0))
    }
}

impl Mul for Fixed64 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        let wide = (self.0 as i128) * (rhs.0 as i128);
        Self((wide >> WIDE_SCALE) as i64)
    }
}

impl Div for Fixed64 {
    type Output = Self;
    #[inline]
    fn div(self, rhs: Self) -> Self {
        if rhs.0 == 0 {
            return Self::ZERO;
        }
        let wide = (self.0 as i128) << WIDE_SCALE;
        Self((wide / rhs.0 as i128) as i64)
    }
}

impl Div<i32> for Fixed64 {
    type Output = Self;
    #[inline]
    fn div(self, rhs: i32) -> Self {
        if rhs == 0 {
            return Self::ZERO;
        }
        Self(self.0.wrapping_div(rhs as i64))
    }
}

impl Neg for Fixed64 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self(self.0.wrapping_neg())
    }
}

impl From<i32> for Fixed64 {
    fn from(value: i32) -> Self {
        Self::from_int(value)
    }
}

impl fmt::Debug for Fixed64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fixed64({:.6})", self.to_f64())
    }
}

impl fmt::Display for Fixed64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}", self.to_f64())
    }
}
