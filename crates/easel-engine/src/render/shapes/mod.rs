//! Shape renderers.

mod common;

pub mod path;

pub use path::PathRenderer;
