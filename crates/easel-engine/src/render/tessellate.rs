//! CPU tessellation of draw-list paths into a single indexed triangle mesh.

use bytemuck::{Pod, Zeroable};
use lyon::math::point;
use lyon::path::Path;
use lyon::tessellation::{
    BuffersBuilder, FillOptions, FillRule, FillTessellator, FillVertex, LineCap, LineJoin,
    StrokeOptions, StrokeTessellator, StrokeVertex, VertexBuffers,
};

use crate::coords::Vec2;
use crate::scene::{DrawCmd, DrawList};

/// Vertex emitted by the tessellator: logical-pixel position + premultiplied color.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub(crate) struct PathVertex {
    pub pos: [f32; 2],
    pub color: [f32; 4],
}

impl PathVertex {
    const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x2, // pos
        1 => Float32x4  // color
    ];

    pub(crate) fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<PathVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

/// Reusable tessellator state; output buffers keep their capacity between runs.
pub(crate) struct Tessellator {
    fill: FillTessellator,
    stroke: StrokeTessellator,
    fill_options: FillOptions,
    mesh: VertexBuffers<PathVertex, u32>,
}

impl Default for Tessellator {
    fn default() -> Self {
        Self {
            fill: FillTessellator::new(),
            stroke: StrokeTessellator::new(),
            fill_options: FillOptions::default().with_fill_rule(FillRule::EvenOdd),
            mesh: VertexBuffers::new(),
        }
    }
}

impl Tessellator {
    /// Rebuilds the mesh from `draw_list` in paint order.
    ///
    /// Triangles are emitted back-to-front so a single draw call reproduces the
    /// painter's order. Paths that fail to tessellate are dropped with a warning
    /// and leave no partial geometry behind.
    pub(crate) fn build(&mut self, draw_list: &mut DrawList) -> &VertexBuffers<PathVertex, u32> {
        self.mesh.vertices.clear();
        self.mesh.indices.clear();

        for item in draw_list.iter_in_paint_order() {
            let vertex_mark = self.mesh.vertices.len();
            let index_mark = self.mesh.indices.len();

            let result = match &item.cmd {
                DrawCmd::FillPath(cmd) => {
                    if cmd.points.len() < 3 {
                        continue;
                    }
                    let color = cmd.color.to_array();
                    let path = build_path(&cmd.points, true);
                    self.fill.tessellate_path(
                        &path,
                        &self.fill_options,
                        &mut BuffersBuilder::new(&mut self.mesh, |v: FillVertex| PathVertex {
                            pos: v.position().to_array(),
                            color,
                        }),
                    )
                }
                DrawCmd::StrokePath(cmd) => {
                    if cmd.points.len() < 2 || cmd.width <= 0.0 {
                        continue;
                    }
                    let color = cmd.color.to_array();
                    let path = build_path(&cmd.points, false);
                    // Tk draws turtle lines with round caps and joins.
                    let options = StrokeOptions::default()
                        .with_line_width(cmd.width)
                        .with_line_cap(LineCap::Round)
                        .with_line_join(LineJoin::Round);
                    self.stroke.tessellate_path(
                        &path,
                        &options,
                        &mut BuffersBuilder::new(&mut self.mesh, |v: StrokeVertex| PathVertex {
                            pos: v.position().to_array(),
                            color,
                        }),
                    )
                }
            };

            if let Err(err) = result {
                log::warn!("dropping path {:?}: tessellation failed: {err:?}", item.key);
                self.mesh.vertices.truncate(vertex_mark);
                self.mesh.indices.truncate(index_mark);
            }
        }

        &self.mesh
    }

    /// The mesh produced by the last [`build`](Self::build).
    pub(crate) fn mesh(&self) -> &VertexBuffers<PathVertex, u32> {
        &self.mesh
    }
}

fn build_path(points: &[Vec2], close: bool) -> Path {
    let mut builder = Path::builder();
    let mut iter = points.iter();
    if let Some(first) = iter.next() {
        builder.begin(point(first.x, first.y));
        for p in iter {
            builder.line_to(point(p.x, p.y));
        }
        builder.end(close);
    }
    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::Color;
    use crate::scene::ZIndex;

    fn square(at: f32, size: f32) -> Vec<Vec2> {
        vec![
            Vec2::new(at, at),
            Vec2::new(at + size, at),
            Vec2::new(at + size, at + size),
            Vec2::new(at, at + size),
        ]
    }

    // ── fills ─────────────────────────────────────────────────────────────

    #[test]
    fn square_fill_becomes_two_triangles() {
        let mut list = DrawList::new();
        list.push_fill_path(ZIndex::DEFAULT, square(0.0, 10.0), Color::from_straight(1.0, 0.0, 0.0, 1.0));

        let mut tess = Tessellator::default();
        let mesh = tess.build(&mut list);
        assert_eq!(mesh.indices.len(), 6);
        assert!(mesh.vertices.len() >= 4);
        assert!(mesh.vertices.iter().all(|v| v.color == [1.0, 0.0, 0.0, 1.0]));
    }

    #[test]
    fn degenerate_fill_is_skipped() {
        let mut list = DrawList::new();
        list.push_fill_path(ZIndex::DEFAULT, vec![Vec2::zero(), Vec2::new(5.0, 0.0)], Color::transparent());

        let mut tess = Tessellator::default();
        assert!(tess.build(&mut list).indices.is_empty());
    }

    #[test]
    fn fill_vertices_stay_inside_outline() {
        let mut list = DrawList::new();
        list.push_fill_path(ZIndex::DEFAULT, square(20.0, 30.0), Color::transparent());

        let mut tess = Tessellator::default();
        for v in &tess.build(&mut list).vertices {
            assert!((20.0..=50.0).contains(&v.pos[0]));
            assert!((20.0..=50.0).contains(&v.pos[1]));
        }
    }

    // ── strokes ───────────────────────────────────────────────────────────

    #[test]
    fn stroke_produces_triangles() {
        let mut list = DrawList::new();
        list.push_stroke_path(ZIndex::DEFAULT, vec![Vec2::zero(), Vec2::new(100.0, 0.0)], 2.0, Color::transparent());

        let mut tess = Tessellator::default();
        let mesh = tess.build(&mut list);
        assert!(!mesh.indices.is_empty());
        assert_eq!(mesh.indices.len() % 3, 0);
    }

    #[test]
    fn zero_width_stroke_is_skipped() {
        let mut list = DrawList::new();
        list.push_stroke_path(ZIndex::DEFAULT, vec![Vec2::zero(), Vec2::new(100.0, 0.0)], 0.0, Color::transparent());

        let mut tess = Tessellator::default();
        assert!(tess.build(&mut list).vertices.is_empty());
    }

    // ── ordering ──────────────────────────────────────────────────────────

    #[test]
    fn mesh_follows_paint_order() {
        let red = Color::from_straight(1.0, 0.0, 0.0, 1.0);
        let black = Color::from_straight(0.0, 0.0, 0.0, 1.0);

        let mut list = DrawList::new();
        let slot = list.reserve_slot(ZIndex::DEFAULT);
        list.push_stroke_path(ZIndex::DEFAULT, square(0.0, 10.0), 1.0, black);
        list.fill_slot_with_path(slot, square(0.0, 10.0), red);

        let mut tess = Tessellator::default();
        let mesh = tess.build(&mut list);
        assert_eq!(mesh.vertices.first().map(|v| v.color), Some(red.to_array()));
        assert_eq!(mesh.vertices.last().map(|v| v.color), Some(black.to_array()));
    }

    #[test]
    fn rebuild_discards_previous_mesh() {
        let mut list = DrawList::new();
        list.push_fill_path(ZIndex::DEFAULT, square(0.0, 10.0), Color::transparent());

        let mut tess = Tessellator::default();
        let first = tess.build(&mut list).indices.len();
        let second = tess.build(&mut list).indices.len();
        assert_eq!(first, second);
    }
}
