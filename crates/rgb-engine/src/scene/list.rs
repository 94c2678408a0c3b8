use super::{DrawCmd, Primitive};
use crate::coords::Transformation;
use crate::paint::Color;

/// Recorded draw stream for a frame.
///
/// Every `draw_*` helper appends commands; the renderer issues them in
/// insertion order, one GPU draw call per command.
///
/// ```ignore
/// let mut list = DrawList::new();
/// list.draw_circle(Vec2::new(100.0, 100.0), 40.0, Color::RED);
/// list.draw_line(Vec2::ZERO, Vec2::new(50.0, 50.0), Color::WHITE);
/// renderer.render(ctx, target, &list);
/// list.clear();
/// ```
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawCmd>,

    /// Replaces the renderer's pixel-space projection when set.
    view_projection: Option<glam::Mat4>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded commands and the projection override. Keeps allocated capacity.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.view_projection = None;
    }

    /// Returns commands in draw order.
    #[inline]
    pub fn items(&self) -> &[DrawCmd] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Uses `m` as view-projection for every command in this list.
    #[inline]
    pub fn set_view_projection(&mut self, m: glam::Mat4) {
        self.view_projection = Some(m);
    }

    #[inline]
    pub fn view_projection(&self) -> Option<glam::Mat4> {
        self.view_projection
    }

    /// Appends one command.
    #[inline]
    pub fn push(&mut self, primitive: Primitive, transform: Transformation, color: Color) {
        debug_assert!(transform.is_finite(), "DrawList::push: non-finite transform {transform:?}");
        debug_assert!(color.is_finite(), "DrawList::push: non-finite color {color:?}");
        self.items.push(DrawCmd::new(primitive, transform, color));
    }
}
