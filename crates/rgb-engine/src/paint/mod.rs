//! Color representation shared by the drawing facade and renderers.
//!
//! Colors are linear with premultiplied alpha; geometry types live in `coords`.

mod color;

pub use color::Color;
