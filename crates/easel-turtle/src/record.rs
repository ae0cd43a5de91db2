use easel_engine::paint::Color;

use crate::geom::Point;
use crate::surface::{Pen, Surface};

/// One call received by a [`Recorder`].
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Background(Color),
    Stroke { from: Point, to: Point, pen: Pen },
    /// `slot` is the index of the reservation this fill was painted at.
    Fill { slot: usize, outline: Vec<Point>, color: Color },
}

/// Headless surface that keeps every call in order.
///
/// Used to validate a drawing before a window exists and to inspect what a
/// drawer produced.
#[derive(Debug, Default)]
pub struct Recorder {
    ops: Vec<Op>,
    reserved: usize,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn ops(&self) -> &[Op] {
        &self.ops
    }

    pub fn strokes(&self) -> impl Iterator<Item = (Point, Point, Pen)> + '_ {
        self.ops.iter().filter_map(|op| match op {
            Op::Stroke { from, to, pen } => Some((*from, *to, *pen)),
            _ => None,
        })
    }

    /// Fills in the order they were closed.
    pub fn fills(&self) -> impl Iterator<Item = (&[Point], Color)> + '_ {
        self.ops.iter().filter_map(|op| match op {
            Op::Fill { outline, color, .. } => Some((outline.as_slice(), *color)),
            _ => None,
        })
    }

    /// Number of fill positions reserved so far.
    #[inline]
    pub fn reserved_fills(&self) -> usize {
        self.reserved
    }
}

impl Surface for Recorder {
    type FillSlot = usize;

    fn set_background(&mut self, color: Color) {
        self.ops.push(Op::Background(color));
    }

    fn stroke(&mut self, from: Point, to: Point, pen: Pen) {
        self.ops.push(Op::Stroke { from, to, pen });
    }

    fn reserve_fill(&mut self) -> usize {
        let slot = self.reserved;
        self.reserved += 1;
        slot
    }

    fn fill(&mut self, slot: usize, outline: &[Point], color: Color) {
        self.ops.push(Op::Fill { slot, outline: outline.to_vec(), color });
    }
}
