use easel_engine::coords::{Vec2, Viewport};
use easel_engine::paint::Color;
use easel_engine::scene::{DrawList, Slot, ZIndex};

use crate::geom::Point;
use crate::surface::{Pen, Surface};

/// Polyline being extended by consecutive strokes with the same pen.
struct PendingStroke {
    points: Vec<Vec2>,
    pen: Pen,
}

/// [`Surface`] that records into an engine [`DrawList`].
///
/// World coordinates map to logical pixels with the world origin at the
/// viewport center and +Y flipped to point down. Contiguous strokes sharing a
/// pen are merged into one polyline so joins render cleanly.
///
/// Pending strokes are flushed on [`finish`](Self::finish) or drop.
pub struct DrawListSurface<'a> {
    draw_list: &'a mut DrawList,
    origin: Vec2,
    z: ZIndex,
    background: Option<Color>,
    pending: Option<PendingStroke>,
}

impl<'a> DrawListSurface<'a> {
    pub fn new(draw_list: &'a mut DrawList, viewport: Viewport) -> Self {
        Self {
            draw_list,
            origin: viewport.center(),
            z: ZIndex::DEFAULT,
            background: None,
            pending: None,
        }
    }

    /// World point to logical pixels.
    #[inline]
    pub fn to_pixels(&self, p: Point) -> Vec2 {
        Vec2::new(self.origin.x + p.x as f32, self.origin.y - p.y as f32)
    }

    /// Flushes pending strokes and returns the requested background.
    pub fn finish(mut self) -> Option<Color> {
        self.flush();
        self.background
    }

    fn flush(&mut self) {
        if let Some(PendingStroke { points, pen }) = self.pending.take() {
            self.draw_list.push_stroke_path(self.z, points, pen.width, pen.color);
        }
    }
}

impl Surface for DrawListSurface<'_> {
    type FillSlot = Slot;

    fn set_background(&mut self, color: Color) {
        self.background = Some(color);
    }

    fn stroke(&mut self, from: Point, to: Point, pen: Pen) {
        let (from, to) = (self.to_pixels(from), self.to_pixels(to));

        if let Some(pending) = self.pending.as_mut() {
            let joins = pending.pen == pen
                && pending.points.last().is_some_and(|last| last.distance(from) < 1e-3);
            if joins {
                pending.points.push(to);
                return;
            }
        }

        self.flush();
        self.pending = Some(PendingStroke { points: vec![from, to], pen });
    }

    fn reserve_fill(&mut self) -> Slot {
        // Strokes made before the fill opened must stay beneath it.
        self.flush();
        self.draw_list.reserve_slot(self.z)
    }

    fn fill(&mut self, slot: Slot, outline: &[Point], color: Color) {
        let points = outline.iter().map(|&p| self.to_pixels(p)).collect();
        self.draw_list.fill_slot_with_path(slot, points, color);
    }
}

impl Drop for DrawListSurface<'_> {
    fn drop(&mut self) {
        self.flush();
    }
}
