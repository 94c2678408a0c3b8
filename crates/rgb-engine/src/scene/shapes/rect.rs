use crate::coords::{Transformation, Vec2};
use crate::paint::Color;
use crate::scene::{DrawList, Primitive};

/// Unit-square corners in outline order.
pub const UNIT_QUAD_CORNERS: [Vec2; 4] = [
    Vec2::new(0.0, 0.0),
    Vec2::new(1.0, 0.0),
    Vec2::new(1.0, 1.0),
    Vec2::new(0.0, 1.0),
];

/// Transformed unit-square corners: (0,0), (1,0), (1,1), (0,1).
pub fn rectangle_outline_points(transform: &Transformation) -> [Vec2; 4] {
    UNIT_QUAD_CORNERS.map(|c| transform.apply(c))
}

impl DrawList {
    /// Records the unit square placed by `transform`, filled.
    #[inline]
    pub fn draw_rectangle(&mut self, transform: Transformation, color: Color) {
        self.push(Primitive::Rectangle, transform, color);
    }

    /// Records the border of the unit square placed by `transform` as four lines.
    pub fn draw_rectangle_outline(&mut self, transform: Transformation, color: Color) {
        let p = rectangle_outline_points(&transform);
        for i in 0..p.len() {
            self.draw_line(p[i], p[(i + 1) % p.len()], color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rectangle_uses_caller_transform_verbatim() {
        let t = Transformation::new(Vec2::new(4.0, 5.0), 0.3, 2.0);
        let mut list = DrawList::new();
        list.draw_rectangle(t, Color::BLUE);

        let cmd = list.items()[0];
        assert_eq!(cmd.primitive, Primitive::Rectangle);
        assert_eq!(cmd.transform, t);
    }

    #[test]
    fn outline_points_follow_corner_order() {
        let t = Transformation::from_origin_size(Vec2::new(10.0, 20.0), Vec2::new(4.0, 2.0));
        assert_eq!(
            rectangle_outline_points(&t),
            [
                Vec2::new(10.0, 20.0),
                Vec2::new(14.0, 20.0),
                Vec2::new(14.0, 22.0),
                Vec2::new(10.0, 22.0),
            ]
        );
    }

    #[test]
    fn outline_is_four_lines_in_closed_loop() {
        let t = Transformation::new(Vec2::new(-3.0, 8.0), 1.1, 15.0);
        let mut list = DrawList::new();
        list.draw_rectangle_outline(t, Color::WHITE);

        assert_eq!(list.len(), 4);
        assert!(list.items().iter().all(|c| c.primitive == Primitive::Line));

        let corners = rectangle_outline_points(&t);
        for (i, cmd) in list.items().iter().enumerate() {
            let start = cmd.transform.apply(Vec2::ZERO);
            let end = cmd.transform.apply(Vec2::X);
            assert_eq!(start, corners[i]);
            assert!((end - corners[(i + 1) % 4]).length() < 1e-4);
        }
    }
}
