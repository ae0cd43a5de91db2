//! Paint model shared between the turtle layer and the renderer.
//!
//! Colors are linear premultiplied RGBA. Geometry types remain in `coords`.

pub mod color;

pub use color::Color;
