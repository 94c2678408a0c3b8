//! `draw_*` helpers on [`DrawList`](super::DrawList), one file per shape family.
//!
//! Each file also exposes the pure transform/point builders its helpers use.

pub mod circle;
pub mod line;
pub mod rect;

pub use circle::{circle_outline_points, circle_transform, CIRCLE_DETAIL};
pub use line::{line_transform, line_transform_3d, wide_line_transform};
pub use rect::{rectangle_outline_points, UNIT_QUAD_CORNERS};
