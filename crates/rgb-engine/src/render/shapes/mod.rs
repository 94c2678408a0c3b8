//! Shape rendering: shared color shader, template geometry, renderer.

mod common;
mod geometry;
mod renderer;

pub use renderer::ShapeRenderer;
