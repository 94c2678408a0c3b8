use crate::coords::Transformation;
use crate::paint::Color;

/// Geometry template a command is drawn with.
///
/// Extending the scene:
/// - add a variant here
/// - add the template to `render::geometry`
/// - add `draw_*` helpers in a file under `scene::shapes`
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Primitive {
    /// Unit circle, filled.
    Circle,
    /// Unit segment (0,0)→(1,0).
    Line,
    /// Unit square, filled.
    Rectangle,
}

/// One draw call: template + model transform + color.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DrawCmd {
    pub primitive: Primitive,
    pub transform: Transformation,
    pub color: Color,
}

impl DrawCmd {
    #[inline]
    pub fn new(primitive: Primitive, transform: Transformation, color: Color) -> Self {
        Self { primitive, transform, color }
    }
}
