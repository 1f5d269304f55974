//! Distances and Interpolation

use crate::core::fixed::Fixed32;
use crate::core::vec2::FixedVec2;
use crate::core::vec3::FixedVec3;

/// Weight on the largest axis delta (0.94)
const MAX_WEIGHT: i32 = 94;
/// Weight on the middle axis delta (0.38)
const MID_WEIGHT: i32 = 38;
/// Weight on the smallest axis delta (0.22)
const MIN_WEIGHT: i32 = 22;

/// Exact Euclidean distance between two points.
#[inline]
pub fn distance_to(p: FixedVec2, q: FixedVec2) -> Fixed32 {
    let dx = p.x - q.x;
    let dy = p.y - q.y;
    (dx * dx + dy * dy).sqrt()
}

/// Square-root-free 3D distance estimate.
///
/// `0.94·max + 0.38·mid + 0.22·min` over the absolute axis deltas, ranked by
/// magnitude. `mid` is `sum − max − min`, so ties resolve to the remaining delta.
pub fn approximate_real_distance_to(p: FixedVec3, q: FixedVec3) -> Fixed32 {
    let dx = (p.x - q.x).abs();
    let dy = (p.y - q.y).abs();
    let dz = (p.z - q.z).abs();

    let max = dx.max(dy).max(dz);
    let min = dx.min(dy).min(dz);
    let mid = dx + dy + dz - max - min;

    Fixed32::ratio100(MAX_WEIGHT) * max
        + Fixed32::ratio100(MID_WEIGHT) * mid
        + Fixed32::ratio100(MIN_WEIGHT) * min
}

/// `a + (b − a)·t`. `t` is not clamped; values outside `[0, 1]` extrapolate.
#[inline]
pub fn lerp(a: FixedVec2, b: FixedVec2, t: Fixed32) -> FixedVec2 {
    FixedVec2::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
}

impl FixedVec2 {
    /// Exact distance to another point. See [`distance_to`].
    #[inline]
    pub fn distance_to(self, other: Self) -> Fixed32 {
        distance_to(self, other)
    }

    /// Interpolate toward `other`. See [`lerp`].
    #[inline]
    pub fn lerp(self, other: Self, t: Fixed32) -> Self {
        lerp(self, other, t)
    }
}

impl FixedVec3 {
    /// Fast distance estimate. See [`approximate_real_distance_to`].
    #[inline]
    pub fn approximate_real_distance_to(self, other: Self) -> Fixed32 {
        approximate_real_distance_to(self, other)
    }
}
