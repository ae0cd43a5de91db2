use easel_engine::paint::Color;

use crate::geom::Point;

/// Stroke style carried by the turtle.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Pen {
    pub color: Color,
    /// Line width in world units.
    pub width: f32,
}

impl Default for Pen {
    fn default() -> Self {
        Self {
            color: Color::from_premul(0.0, 0.0, 0.0, 1.0),
            width: 1.0,
        }
    }
}

/// Rendering surface a [`Turtle`](crate::Turtle) paints on.
///
/// Coordinates are world units. Strokes appear in call order. A fill is
/// painted at the position reserved by [`reserve_fill`](Surface::reserve_fill),
/// which the turtle calls when the fill opens; strokes made while the fill
/// is open therefore stay visible on top of it.
pub trait Surface {
    /// Handle for a reserved fill position.
    type FillSlot;

    fn set_background(&mut self, color: Color);

    fn stroke(&mut self, from: Point, to: Point, pen: Pen);

    fn reserve_fill(&mut self) -> Self::FillSlot;

    /// Paints the interior of `outline` (implicitly closed) at `slot`.
    fn fill(&mut self, slot: Self::FillSlot, outline: &[Point], color: Color);
}
