//! Q16.16 Fixed-Point Arithmetic (narrow precision)
//!
//! Deterministic fixed-point math for simulation code.
//! All operations use integer arithmetic only - no floats in predicates.
//!
//! ## Format: Q16.16
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Bit Layout: Q16.16 (32-bit signed integer)                 │
//! ├─────────────────────────────────────────────────────────────┤
//! │  [S][IIIIIIIIIIIIIIII][FFFFFFFFFFFFFFFF]                    │
//! │   │  └──── 16 bits ────┘└──── 16 bits ────┘                 │
//! │   └─ Sign bit                                               │
//! │                                                             │
//! │  Range: -32768.0 to +32767.99998 (approx)                   │
//! │  Precision: 1/65536 ≈ 0.000015 units                        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Rounding
//!
//! - `+`, `-`, negation: wrapping two's complement
//! - `*`: i64 product, arithmetic shift (rounds toward negative infinity)
//! - `/`: i64 pre-shifted numerator, truncates toward zero, `x / 0 == 0`
//! - `ratio100` / `ratio1000`: truncate toward zero
//! - `sqrt`: exact floor of the true root at 16 fractional bits

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

/// Raw Q16.16 fixed-point value stored as i32.
pub type Fixed = i32;

/// Number of fractional bits (16)
pub const FIXED_SCALE: i32 = 16;

/// 1.0 in fixed-point (65536)
pub const FIXED_ONE: Fixed = 1 << FIXED_SCALE;

/// 0.5 in fixed-point (32768)
pub const FIXED_HALF: Fixed = FIXED_ONE >> 1;

// =============================================================================
// RAW OPERATIONS (All deterministic, wrapping semantics)
// =============================================================================

/// Multiply two fixed-point numbers.
///
/// Uses i64 intermediate to prevent overflow, then shifts back.
#[inline]
pub fn fixed_mul(a: Fixed, b: Fixed) -> Fixed {
    let wide = (a as i64) * (b as i64);
    (wide >> FIXED_SCALE) as Fixed
}

/// Divide two fixed-point numbers.
///
/// Pre-shifts numerator to maintain precision.
/// Divide-by-zero returns 0 (not panic).
#[inline]
pub fn fixed_div(a: Fixed, b: Fixed) -> Fixed {
    if b == 0 {
        return 0;
    }
    let wide = (a as i64) << FIXED_SCALE;
    (wide / b as i64) as Fixed
}

/// Square root via bitwise integer square root.
///
/// Returns 0 for non-positive inputs. Perfect squares come back exact.
#[inline]
pub fn fixed_sqrt(x: Fixed) -> Fixed {
    if x <= 0 {
        return 0;
    }
    isqrt_u64((x as u64) << FIXED_SCALE) as Fixed
}

/// Absolute value of a fixed-point number.
#[inline]
pub fn fixed_abs(x: Fixed) -> Fixed {
    if x < 0 { x.wrapping_neg() } else { x }
}

/// Minimum of two fixed-point numbers.
#[inline]
pub fn fixed_min(a: Fixed, b: Fixed) -> Fixed {
    if a < b { a } else { b }
}

/// Maximum of two fixed-point numbers.
#[inline]
pub fn fixed_max(a: Fixed, b: Fixed) -> Fixed {
    if a > b { a } else { b }
}

/// Clamp a fixed-point number to a range.
#[inline]
pub fn fixed_clamp(value: Fixed, min: Fixed, max: Fixed) -> Fixed {
    fixed_max(min, fixed_min(max, value))
}

/// `numerator / denominator` as fixed-point, truncated toward zero.
#[inline]
pub fn fixed_ratio(numerator: i32, denominator: i32) -> Fixed {
    if denominator == 0 {
        return 0;
    }
    (((numerator as i64) << FIXED_SCALE) / denominator as i64) as Fixed
}

/// Floor of the square root of `n`, one result bit per iteration.
fn isqrt_u64(n: u64) -> u64 {
    let mut rem = n;
    let mut root = 0u64;
    let mut bit = 1u64 << 62;

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

// =============================================================================
// FIXED32 WRAPPER
// =============================================================================

/// Narrow fixed-point scalar (Q16.16) with operator overloading.
///
/// Every operation is a pure function of the operand bit patterns, so results
/// are identical on every platform and optimization level.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fixed32(Fixed);

impl Fixed32 {
    /// Zero constant
    pub const ZERO: Self = Self(0);

    /// One constant
    pub const ONE: Self = Self(FIXED_ONE);

    /// One half
    pub const HALF: Self = Self(FIXED_HALF);

    /// Create from raw fixed-point value
    #[inline]
    pub const fn from_raw(raw: Fixed) -> Self {
        Self(raw)
    }

    /// Create from integer
    #[inline]
    pub const fn from_int(i: i32) -> Self {
        Self(i.wrapping_shl(FIXED_SCALE as u32))
    }

    /// `k / 100`, truncated toward zero.
    #[inline]
    pub fn ratio100(k: i32) -> Self {
        Self(fixed_ratio(k, 100))
    }

    /// `k / 1000`, truncated toward zero.
    #[inline]
    pub fn ratio1000(k: i32) -> Self {
        Self(fixed_ratio(k, 1000))
    }

    /// Get raw fixed-point value
    #[inline]
    pub const fn raw(self) -> Fixed {
        self.0
    }

    /// Absolute value
    #[inline]
    pub fn abs(self) -> Self {
        Self(fixed_abs(self.0))
    }

    /// Square root (zero for non-positive input)
    #[inline]
    pub fn sqrt(self) -> Self {
        Self(fixed_sqrt(self.0))
    }

    /// Smaller of two values
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self(fixed_min(self.0, other.0))
    }

    /// Larger of two values
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self(fixed_max(self.0, other.0))
    }

    /// Clamp into `[min, max]`
    #[inline]
    pub fn clamp(self, min: Self, max: Self) -> Self {
        Self(fixed_clamp(self.0, min.0, max.0))
    }

    /// Convert to float for display. Never feed the result back into simulation.
    #[inline]
    pub fn to_f32(self) -> f32 {
        self.0 as f32 / FIXED_ONE as f32
    }
}

impl Add for Fixed32 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self(self.0.wrapping_add(rhs.0))
    }
}

impl Sub for Fixed32 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self(self.0.wrapping_sub(rhs.0))
    }
}

impl Mul for Fixed32 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self(fixed_mul(self.0, rhs.0))
    }
}

impl Div for Fixed32 {
    type Output = Self;
    #[inline]
    fn div(self, rhs: Self) -> Self {
        Self(fixed_div(self.0, rhs.0))
    }
}

/// Division by a plain integer (raw truncating division, `x / 0 == 0`).
impl Div<i32> for Fixed32 {
    type Output = Self;
    #[inline]
    fn div(self, rhs: i32) -> Self {
        if rhs == 0 {
            return Self::ZERO;
        }
        Self(self.0.wrapping_div(rhs))
    }
}

impl Neg for Fixed32 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self(self.0.wrapping_neg())
    }
}

impl From<i32> for Fixed32 {
    fn from(value: i32) -> Self {
        Self::from_int(value)
    }
}

impl fmt::Debug for Fixed32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fixed32({:.4})", self.to_f32())
    }
}

impl fmt::Display for Fixed32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}", self.to_f32())
    }
}

// =============================================================================
// TESTS
// =============================================================================
