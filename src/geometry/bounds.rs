//! Axis-Aligned Containment and Overlap
//!
//! Two rectangle conventions coexist and are kept apart by name:
//!
//! ```text
//! centered:  bounds = center ± size/2   (inclusive)
//! top-left:  bounds = [pos, pos + size) (half-open)
//! ```
//!
//! Boxes are always centered with inclusive bounds.

use crate::core::vec2::FixedVec2;
use crate::core::vec3::FixedVec3;

/// Min and max corners of a centered rectangle.
#[inline]
pub(crate) fn centered_rect_bounds(center: FixedVec2, size: FixedVec2) -> (FixedVec2, FixedVec2) {
    let half = FixedVec2::new(size.x / 2, size.y / 2);
    (center - half, center + half)
}

/// Is `point` inside the rectangle centered at `rect_center`? Edges count.
#[inline]
pub fn is_point_inside_centered_rect(point: FixedVec2, rect_center: FixedVec2, rect_size: FixedVec2) -> bool {
    let (min, max) = centered_rect_bounds(rect_center, rect_size);
    point.x >= min.x && point.x <= max.x && point.y >= min.y && point.y <= max.y
}

/// Do two top-left anchored rectangles overlap?
///
/// Strict comparisons: rectangles sharing only an edge or corner do not overlap.
#[inline]
pub fn is_rect_overlap_top_left(
    pos_a: FixedVec2,
    size_a: FixedVec2,
    pos_b: FixedVec2,
    size_b: FixedVec2,
) -> bool {
    pos_a.x < pos_b.x + size_b.x
        && pos_a.x + size_a.x > pos_b.x
        && pos_a.y < pos_b.y + size_b.y
        && pos_a.y + size_a.y > pos_b.y
}

/// Is `point` inside the box centered at `box_center`? Faces count.
#[inline]
pub fn is_point_inside_box(point: FixedVec3, box_center: FixedVec3, box_size: FixedVec3) -> bool {
    let half = FixedVec3::new(box_size.x / 2, box_size.y / 2, box_size.z / 2);
    let min = box_center - half;
    let max = box_center + half;

    point.x >= min.x
        && point.x <= max.x
        && point.y >= min.y
        && point.y <= max.y
        && point.z >= min.z
        && point.z <= max.z
}
