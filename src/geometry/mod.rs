//! Geometry predicates over fixed-point vectors.
//!
//! Every function here is pure and total: any fixed-point input (including
//! zero-length segments and zero-size rectangles) yields a result, and the
//! result depends only on input bit patterns.

pub mod bounds;
pub mod metric;
pub mod segment;

pub use bounds::{is_point_inside_box, is_point_inside_centered_rect, is_rect_overlap_top_left};
pub use metric::{approximate_real_distance_to, distance_to, lerp};
pub use segment::{cross, is_segment_crossing_rect, is_segment_crossing_segment};
