use crate::scene::shapes::fill_path::FillPathCmd;
use crate::scene::shapes::stroke_path::StrokePathCmd;

/// Renderer-agnostic draw command stream.
///
/// Extending the scene:
/// - add a new shape module under `scene::shapes::*`
/// - add a new variant here
/// - implement push helpers inside that shape module
/// - teach `render::shapes::path` to tessellate it
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    FillPath(FillPathCmd),
    StrokePath(StrokePathCmd),
}
