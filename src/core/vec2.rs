//! Fixed-Point 2D Vector
//!
//! Deterministic 2D vector over narrow [`Fixed32`] components.

use std::fmt;
use std::ops::{Add, Neg, Sub};

use serde::{Deserialize, Serialize};

use super::fixed::Fixed32;
use super::vec3::FixedVec3;

/// 2D vector with fixed-point components.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct FixedVec2 {
    /// X component
    pub x: Fixed32,
    /// Y component
    pub y: Fixed32,
}

impl FixedVec2 {
    /// Zero vector
    pub const ZERO: Self = Self { x: Fixed32::ZERO, y: Fixed32::ZERO };

    /// Create a new vector from fixed-point components.
    #[inline]
    pub const fn new(x: Fixed32, y: Fixed32) -> Self {
        Self { x, y }
    }

    /// Create a vector from integer components.
    #[inline]
    pub const fn from_ints(x: i32, y: i32) -> Self {
        Self {
            x: Fixed32::from_int(x),
            y: Fixed32::from_int(y),
        }
    }

    /// Scale by a fixed-point scalar.
    #[inline]
    pub fn scale(self, scalar: Fixed32) -> Self {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
        }
    }

    /// 2D cross product (determinant), `x·other.y − y·other.x`.
    /// Positive if other is counter-clockwise from self.
    #[inline]
    pub fn cross(self, other: Self) -> Fixed32 {
        self.x * other.y - self.y * other.x
    }

    /// Extend to 3D with `z = 0`.
    #[inline]
    pub fn to_vec3(self) -> FixedVec3 {
        FixedVec3::new(self.x, self.y, Fixed32::ZERO)
    }

    /// Convert to float tuple for rendering.
    #[inline]
    pub fn to_floats(self) -> (f32, f32) {
        (self.x.to_f32(), self.y.to_f32())
    }
}

impl Add for FixedVec2 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl Sub for FixedVec2 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl Neg for FixedVec2 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self { x: -self.x, y: -self.y }
    }
}

impl fmt::Debug for FixedVec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (fx, fy) = self.to_floats();
        write!(f, "Vec2({:.3}, {:.3})", fx, fy)
    }
}

impl fmt::Display for FixedVec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (fx, fy) = self.to_floats();
        write!(f, "({:.3}, {:.3})", fx, fy)
    }
}
