use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, Slot, ZIndex};

/// Filled polygon payload.
///
/// `points` is an implicitly closed outline. Self-intersecting outlines are
/// filled with the even-odd rule.
#[derive(Debug, Clone, PartialEq)]
pub struct FillPathCmd {
    pub points: Vec<Vec2>,
    pub color: Color,
}

impl FillPathCmd {
    #[inline]
    pub fn new(points: Vec<Vec2>, color: Color) -> Self {
        Self { points, color }
    }
}

impl DrawList {
    /// Records a filled polygon on top of everything pushed so far.
    #[inline]
    pub fn push_fill_path(&mut self, z: ZIndex, points: Vec<Vec2>, color: Color) {
        self.push(z, DrawCmd::FillPath(FillPathCmd::new(points, color)));
    }

    /// Records a filled polygon at a previously reserved paint position.
    #[inline]
    pub fn fill_slot_with_path(&mut self, slot: Slot, points: Vec<Vec2>, color: Color) {
        self.fill_slot(slot, DrawCmd::FillPath(FillPathCmd::new(points, color)));
    }
}
