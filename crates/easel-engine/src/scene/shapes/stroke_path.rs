use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Open polyline stroke payload.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokePathCmd {
    pub points: Vec<Vec2>,
    /// Line width in logical pixels.
    pub width: f32,
    pub color: Color,
}

impl StrokePathCmd {
    #[inline]
    pub fn new(points: Vec<Vec2>, width: f32, color: Color) -> Self {
        Self { points, width, color }
    }
}

impl DrawList {
    /// Records a polyline stroke.
    #[inline]
    pub fn push_stroke_path(&mut self, z: ZIndex, points: Vec<Vec2>, width: f32, color: Color) {
        self.push(z, DrawCmd::StrokePath(StrokePathCmd::new(points, width, color)));
    }
}
