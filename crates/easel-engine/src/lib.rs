//! Easel engine crate.
//!
//! This crate owns the platform + GPU runtime pieces used by the turtle layer:
//! window loop, device, draw list and the path renderer.

pub mod device;
pub mod window;
pub mod core;

pub mod logging;
pub mod coords;
pub mod render;
pub mod paint;
pub mod scene;
