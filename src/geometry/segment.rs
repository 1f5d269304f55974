//! Segment Intersection
//!
//! Orientation-based crossing tests. Orientation signs are computed from
//! exact widened products, so no rounding or overflow can flip a side.

use std::cmp::Ordering;

use crate::core::fixed::Fixed32;
use crate::core::vec2::FixedVec2;

use super::bounds::{centered_rect_bounds, is_point_inside_centered_rect};

/// 2D scalar cross product `a.x·b.y − a.y·b.x` in narrow fixed-point.
#[inline]
pub fn cross(a: FixedVec2, b: FixedVec2) -> Fixed32 {
    a.cross(b)
}

/// Which side of the line `origin → toward` the point lies on.
///
/// Evaluated on raw integers: deltas in i64, products in i128.
#[inline]
fn orientation(origin: FixedVec2, toward: FixedVec2, point: FixedVec2) -> Ordering {
    let ux = toward.x.raw() as i64 - origin.x.raw() as i64;
    let uy = toward.y.raw() as i64 - origin.y.raw() as i64;
    let vx = point.x.raw() as i64 - origin.x.raw() as i64;
    let vy = point.y.raw() as i64 - origin.y.raw() as i64;
    let det = (ux as i128) * (vy as i128) - (uy as i128) * (vx as i128);
    det.cmp(&0)
}

/// True if the two sides are opposite, or either is on the line.
#[inline]
fn straddles(p: Ordering, q: Ordering) -> bool {
    p == Ordering::Equal || q == Ordering::Equal || p != q
}

/// Does segment `a→b` cross segment `c→d`?
///
/// Crossing means each segment's endpoints lie on opposite sides of, or
/// touch, the other segment's line. Touching endpoints and collinear
/// segments count as crossing, even collinear segments that do not overlap.
/// Symmetric under swapping the two segments.
pub fn is_segment_crossing_segment(a: FixedVec2, b: FixedVec2, c: FixedVec2, d: FixedVec2) -> bool {
    straddles(orientation(a, b, c), orientation(a, b, d))
        && straddles(orientation(c, d, a), orientation(c, d, b))
}

/// Does segment `seg_start→seg_end` touch the rectangle centered at
/// `rect_center` with full extent `rect_size`?
///
/// True if either endpoint is inside (inclusive) or the segment crosses one
/// of the edges, walked clockwise from top-left to top-right (y down).
pub fn is_segment_crossing_rect(
    seg_start: FixedVec2,
    seg_end: FixedVec2,
    rect_center: FixedVec2,
    rect_size: FixedVec2,
) -> bool {
    if is_point_inside_centered_rect(seg_start, rect_center, rect_size)
        || is_point_inside_centered_rect(seg_end, rect_center, rect_size)
    {
        return true;
    }

    let (min, max) = centered_rect_bounds(rect_center, rect_size);
    let top_left = min;
    let top_right = FixedVec2::new(max.x, min.y);
    let bottom_right = max;
    let bottom_left = FixedVec2::new(min.x, max.y);

    [
        (top_left, top_right),
        (top_right, bottom_right),
        (bottom_right, bottom_left),
        (bottom_left, top_left),
    ]
    .into_iter()
    .any(|(from, to)| is_segment_crossing_segment(seg_start, seg_end, from, to))
}
