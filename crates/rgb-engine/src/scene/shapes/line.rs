use crate::coords::{Transformation, Vec2, Vec3};
use crate::paint::Color;
use crate::scene::{DrawList, Primitive};

/// Maps the unit segment (0,0)→(1,0) onto `p1`→`p2`.
#[inline]
pub fn line_transform(p1: Vec2, p2: Vec2) -> Transformation {
    Transformation::from_basis(p1, p2 - p1, Vec2::ZERO)
}

/// 3D variant of [`line_transform`].
#[inline]
pub fn line_transform_3d(p1: Vec3, p2: Vec3) -> Transformation {
    Transformation::from_basis_3d(p1, p2 - p1, Vec3::ZERO, Vec3::ZERO)
}

/// Places the unit square so its long axis runs along `p1`→`p2` and its short
/// axis spans `width`, centered on the line.
///
/// Coincident endpoints give a zero-area rectangle.
pub fn wide_line_transform(p1: Vec2, p2: Vec2, width: f32) -> Transformation {
    let delta = p2 - p1;
    let half = delta.perp().with_length(width * 0.5);
    Transformation::from_basis(p1 - half, delta, half * 2.0)
}

impl DrawList {
    /// Records a one-pixel line from `p1` to `p2`.
    #[inline]
    pub fn draw_line(&mut self, p1: Vec2, p2: Vec2, color: Color) {
        self.push(Primitive::Line, line_transform(p1, p2), color);
    }

    /// Records a line between two 3D points.
    ///
    /// Only meaningful with a view-projection set through
    /// [`set_view_projection`](DrawList::set_view_projection); the pixel
    /// projection ignores depth.
    #[inline]
    pub fn draw_line_3d(&mut self, p1: Vec3, p2: Vec3, color: Color) {
        self.push(Primitive::Line, line_transform_3d(p1, p2), color);
    }

    /// Records a filled line of the given `width`.
    #[inline]
    pub fn draw_wide_line(&mut self, p1: Vec2, p2: Vec2, width: f32, color: Color) {
        self.draw_rectangle(wide_line_transform(p1, p2, width), color);
    }
}
