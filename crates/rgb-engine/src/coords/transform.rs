use super::{Vec2, Vec3};

/// Affine map from unit-shape space to world space.
///
/// Stored as an origin plus the images of the three unit axes. Basis vectors
/// may be degenerate (a line template only needs `x`), so the map is not
/// required to be invertible.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transformation {
    pub position: Vec3,
    pub x: Vec3,
    pub y: Vec3,
    pub z: Vec3,
}

impl Default for Transformation {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transformation {
    pub const IDENTITY: Transformation = Transformation {
        position: Vec3::ZERO,
        x: Vec3::new(1.0, 0.0, 0.0),
        y: Vec3::new(0.0, 1.0, 0.0),
        z: Vec3::new(0.0, 0.0, 1.0),
    };

    /// Uniform `scale`, then `rotation` radians, then translation to `position`.
    pub fn new(position: Vec2, rotation: f32, scale: f32) -> Self {
        let x = Vec2::X.rotate(rotation) * scale;
        let y = Vec2::Y.rotate(rotation) * scale;
        Self::from_basis(position, x, y)
    }

    /// Maps the origin to `position`, unit x to `x` and unit y to `y` (plane only).
    pub const fn from_basis(position: Vec2, x: Vec2, y: Vec2) -> Self {
        Self {
            position: Vec3::from_xy(position),
            x: Vec3::from_xy(x),
            y: Vec3::from_xy(y),
            z: Vec3::new(0.0, 0.0, 1.0),
        }
    }

    pub const fn from_basis_3d(position: Vec3, x: Vec3, y: Vec3, z: Vec3) -> Self {
        Self { position, x, y, z }
    }

    /// Axis-aligned placement of the unit square at `origin` with `size`.
    pub const fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self::from_basis(origin, Vec2::new(size.x, 0.0), Vec2::new(0.0, size.y))
    }

    #[inline]
    pub fn apply(&self, p: Vec2) -> Vec2 {
        self.position.xy() + self.x.xy() * p.x + self.y.xy() * p.y
    }

    #[inline]
    pub fn apply_3d(&self, p: Vec3) -> Vec3 {
        self.position + self.x * p.x + self.y * p.y + self.z * p.z
    }

    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Column-major model matrix.
    pub fn to_mat4(&self) -> glam::Mat4 {
        glam::Mat4::from_cols(
            glam::Vec3::from(self.x).extend(0.0),
            glam::Vec3::from(self.y).extend(0.0),
            glam::Vec3::from(self.z).extend(0.0),
            glam::Vec3::from(self.position).extend(1.0),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f32::consts::FRAC_PI_2;

    fn approx(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < 1e-5
    }

    #[test]
    fn identity_leaves_points() {
        let p = Vec2::new(4.0, -2.0);
        assert_eq!(Transformation::IDENTITY.apply(p), p);
    }

    #[test]
    fn new_scales_rotates_then_translates() {
        let t = Transformation::new(Vec2::new(10.0, 20.0), FRAC_PI_2, 2.0);
        assert!(approx(t.apply(Vec2::ZERO), Vec2::new(10.0, 20.0)));
        assert!(approx(t.apply(Vec2::X), Vec2::new(10.0, 22.0)));
        assert!(approx(t.apply(Vec2::Y), Vec2::new(8.0, 20.0)));
    }

    #[test]
    fn from_origin_size_spans_rect() {
        let t = Transformation::from_origin_size(Vec2::new(5.0, 6.0), Vec2::new(30.0, 40.0));
        assert_eq!(t.apply(Vec2::new(1.0, 1.0)), Vec2::new(35.0, 46.0));
    }

    #[test]
    fn matrix_agrees_with_apply() {
        let t = Transformation::from_basis(
            Vec2::new(1.0, 2.0),
            Vec2::new(3.0, 1.0),
            Vec2::new(-1.0, 4.0),
        );
        let m = t.to_mat4();
        for p in [Vec2::ZERO, Vec2::X, Vec2::Y, Vec2::new(0.25, 0.75)] {
            let q = m.transform_point3(glam::Vec3::new(p.x, p.y, 0.0));
            assert!(approx(Vec2::new(q.x, q.y), t.apply(p)));
        }
    }

    #[test]
    fn apply_3d_uses_all_axes() {
        let t = Transformation::from_basis_3d(
            Vec3::new(1.0, 1.0, 1.0),
            Vec3::new(2.0, 0.0, 0.0),
            Vec3::new(0.0, 3.0, 0.0),
            Vec3::new(0.0, 0.0, 4.0),
        );
        assert_eq!(t.apply_3d(Vec3::new(1.0, 1.0, 1.0)), Vec3::new(3.0, 4.0, 5.0));
    }
}
