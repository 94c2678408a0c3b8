//! Immediate-mode drawing facade.
//!
//! Responsibilities:
//! - record draw commands in call order
//! - build the unit-shape transform for each primitive
//! - keep shape-specific helpers isolated per shape file under `scene::shapes`
//!
//! Recorded commands are turned into GPU draw calls by `render::ShapeRenderer`.

mod cmd;
mod list;

pub mod shapes;

pub use cmd::{DrawCmd, Primitive};
pub use list::DrawList;
