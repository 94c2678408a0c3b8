//! Coordinate and geometry types shared by the drawing facade and renderers.
//!
//! Canonical CPU space:
//! - Logical pixels (DPI-aware)
//! - Origin top-left
//! - +X right, +Y down
//!
//! Shape templates live in unit space and are placed in the world with a
//! [`Transformation`]. The renderer converts world space to NDC.

mod transform;
mod vec2;
mod vec3;
mod viewport;

pub use transform::Transformation;
pub use vec2::Vec2;
pub use vec3::Vec3;
pub use viewport::Viewport;
