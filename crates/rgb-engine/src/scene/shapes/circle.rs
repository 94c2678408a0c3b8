use core::f32::consts::TAU;

use crate::coords::{Transformation, Vec2};
use crate::paint::Color;
use crate::scene::{DrawList, Primitive};

/// Number of segments in the circle tessellation (filled and outline).
pub const CIRCLE_DETAIL: u32 = 40;

/// Places the unit circle at `center` with `radius`.
#[inline]
pub fn circle_transform(center: Vec2, radius: f32) -> Transformation {
    Transformation::new(center, 0.0, radius)
}

/// Point `i` of the outline polygon, `i` taken modulo [`CIRCLE_DETAIL`].
#[inline]
fn rim_point(center: Vec2, radius: f32, i: u32) -> Vec2 {
    let angle = TAU * (i % CIRCLE_DETAIL) as f32 / CIRCLE_DETAIL as f32;
    center + Vec2::new(radius, 0.0).rotate(angle)
}

/// Segment endpoints of the outline polygon, in drawing order.
///
/// Segment `i` starts at `center + rotate((radius, 0), 2πi/40)`; the last
/// segment ends exactly where the first one starts.
pub fn circle_outline_points(center: Vec2, radius: f32) -> impl Iterator<Item = (Vec2, Vec2)> {
    (0..CIRCLE_DETAIL).map(move |i| (rim_point(center, radius, i), rim_point(center, radius, i + 1)))
}

impl DrawList {
    /// Records a filled circle.
    #[inline]
    pub fn draw_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.push(Primitive::Circle, circle_transform(center, radius), color);
    }

    /// Records a circle outline as [`CIRCLE_DETAIL`] line draws.
    pub fn draw_circle_outline(&mut self, center: Vec2, radius: f32, color: Color) {
        for (a, b) in circle_outline_points(center, radius) {
            self.draw_line(a, b, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < 1e-4
    }

    // ── outline ───────────────────────────────────────────────────────────

    #[test]
    fn outline_has_detail_segments() {
        assert_eq!(circle_outline_points(Vec2::ZERO, 1.0).count(), CIRCLE_DETAIL as usize);
    }

    #[test]
    fn outline_segment_starts_follow_rotation() {
        let center = Vec2::new(50.0, -20.0);
        let radius = 12.0;
        for (i, (start, _)) in circle_outline_points(center, radius).enumerate() {
            let expected = center + Vec2::new(radius, 0.0).rotate(TAU * i as f32 / 40.0);
            assert!(approx(start, expected), "segment {i}: {start:?} != {expected:?}");
        }
    }

    #[test]
    fn outline_is_connected_and_closes_exactly() {
        let segs: Vec<(Vec2, Vec2)> = circle_outline_points(Vec2::new(3.0, 4.0), 7.5).collect();
        for w in segs.windows(2) {
            assert_eq!(w[0].1, w[1].0);
        }
        assert_eq!(segs[segs.len() - 1].1, segs[0].0);
    }

    #[test]
    fn outline_points_lie_on_circle() {
        let center = Vec2::new(-8.0, 2.0);
        for (a, _) in circle_outline_points(center, 5.0) {
            assert!(((a - center).length() - 5.0).abs() < 1e-4);
        }
    }

    #[test]
    fn outline_records_one_line_per_segment() {
        let mut list = DrawList::new();
        list.draw_circle_outline(Vec2::ZERO, 10.0, Color::WHITE);
        assert_eq!(list.len(), CIRCLE_DETAIL as usize);
        assert!(list.items().iter().all(|c| c.primitive == Primitive::Line));
    }

    // ── filled ────────────────────────────────────────────────────────────

    #[test]
    fn filled_circle_scales_unit_circle() {
        let mut list = DrawList::new();
        list.draw_circle(Vec2::new(100.0, 50.0), 25.0, Color::RED);

        let cmd = list.items()[0];
        assert_eq!(cmd.primitive, Primitive::Circle);
        assert_eq!(cmd.color, Color::RED);
        assert!(approx(cmd.transform.apply(Vec2::ZERO), Vec2::new(100.0, 50.0)));
        assert!(approx(cmd.transform.apply(Vec2::X), Vec2::new(125.0, 50.0)));
        assert!(approx(cmd.transform.apply(Vec2::Y), Vec2::new(100.0, 75.0)));
    }
}
