//! GPU rendering subsystem.
//!
//! `ShapeRenderer` consumes a `scene::DrawList` and issues wgpu commands.
//! It owns its GPU resources (shader, pipelines, template buffers, uniforms).
//!
//! Convention:
//! - Shape templates are unit geometry; each command's `Transformation` is the model matrix.
//! - The view-projection defaults to logical pixels (top-left origin, +Y down).

mod ctx;
pub mod shapes;

pub use ctx::{RenderCtx, RenderTarget};
pub use shapes::ShapeRenderer;
