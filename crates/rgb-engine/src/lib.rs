//! RGB engine crate.
//!
//! Immediate-mode 2D drawing on wgpu: record shapes into a `scene::DrawList`
//! each frame and hand it to `render::ShapeRenderer`. The platform pieces
//! (`device`, `window`, `core`, `time`) host that loop.

pub mod coords;
pub mod paint;
pub mod scene;
pub mod render;

pub mod device;
pub mod window;
pub mod core;
pub mod time;

pub mod logging;
