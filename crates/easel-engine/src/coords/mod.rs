//! Coordinate and geometry types shared across the renderer and the turtle layer.
//!
//! Canonical CPU space:
//! - Logical pixels (DPI-aware)
//! - Origin top-left
//! - +X right, +Y down
//!
//! The renderer converts to NDC in its shader using a viewport uniform.

mod vec2;
mod viewport;

pub use vec2::Vec2;
pub use viewport::Viewport;
