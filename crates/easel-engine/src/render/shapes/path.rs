use crate::render::tessellate::{PathVertex, Tessellator};
use crate::render::{RenderCtx, RenderTarget};
use crate::scene::DrawList;

use super::common::{
    grow_capacity, premul_alpha_blend, viewport_ubo_min_binding_size, ViewportUniform,
};

/// Renderer for `DrawCmd::FillPath` and `DrawCmd::StrokePath`.
///
/// Every path is tessellated on the CPU into one shared triangle mesh in paint
/// order, uploaded once per draw-list revision and drawn with a single indexed
/// call. Geometry stays in logical pixels; the viewport uniform maps it to NDC.
#[derive(Default)]
pub struct PathRenderer {
    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,

    bind_group_layout: Option<wgpu::BindGroupLayout>,
    bind_group: Option<wgpu::BindGroup>,
    viewport_ubo: Option<wgpu::Buffer>,

    vbo: Option<wgpu::Buffer>,
    vertex_capacity: usize,
    ibo: Option<wgpu::Buffer>,
    index_capacity: usize,
    index_count: u32,

    tessellator: Tessellator,
    uploaded_revision: Option<u64>,
}

impl PathRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders all paths in `draw_list` into `target`.
    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        draw_list: &mut DrawList,
    ) {
        self.ensure_pipeline(ctx);
        self.ensure_bindings(ctx);
        self.upload_mesh(ctx, draw_list);

        if self.index_count == 0 {
            return;
        }

        self.write_viewport_uniform(ctx);

        let Some(pipeline) = self.pipeline.as_ref() else { return };
        let Some(bind_group) = self.bind_group.as_ref() else { return };
        let Some(vbo) = self.vbo.as_ref() else { return };
        let Some(ibo) = self.ibo.as_ref() else { return };

        let mut rpass = target.overlay_pass("easel path pass");
        rpass.set_pipeline(pipeline);
        rpass.set_bind_group(0, bind_group, &[]);
        rpass.set_vertex_buffer(0, vbo.slice(..));
        rpass.set_index_buffer(ibo.slice(..), wgpu::IndexFormat::Uint32);
        rpass.draw_indexed(0..self.index_count, 0, 0..1);
    }

    /// Re-tessellates and uploads when the draw list changed since the last upload.
    fn upload_mesh(&mut self, ctx: &RenderCtx<'_>, draw_list: &mut DrawList) {
        let revision = draw_list.revision();
        if self.uploaded_revision == Some(revision) {
            return;
        }

        let (vertex_count, index_count) = {
            let mesh = self.tessellator.build(draw_list);
            (mesh.vertices.len(), mesh.indices.len())
        };
        log::debug!(
            "tessellated draw list r{revision}: {} items -> {vertex_count} vertices, {} triangles",
            draw_list.len(),
            index_count / 3,
        );

        self.ensure_capacity(ctx, vertex_count, index_count);

        let mesh = self.tessellator.mesh();
        if let (Some(vbo), Some(ibo), true) = (self.vbo.as_ref(), self.ibo.as_ref(), index_count > 0) {
            ctx.queue.write_buffer(vbo, 0, bytemuck::cast_slice(&mesh.vertices));
            ctx.queue.write_buffer(ibo, 0, bytemuck::cast_slice(&mesh.indices));
        }

        self.index_count = index_count as u32;
        self.uploaded_revision = Some(revision);
    }

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return;
        }

        let shader_src = include_str!("shaders/path.wgsl");
        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("easel path shader"),
            source: wgpu::ShaderSource::Wgsl(shader_src.into()),
        });

        let bind_group_layout =
            ctx.device
                .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                    label: Some("easel path bgl"),
                    entries: &[wgpu::BindGroupLayoutEntry {
                        binding: 0,
                        visibility: wgpu::ShaderStages::VERTEX,
                        ty: wgpu::BindingType::Buffer {
                            ty: wgpu::BufferBindingType::Uniform,
                            has_dynamic_offset: false,
                            min_binding_size: Some(viewport_ubo_min_binding_size()),
                        },
                        count: None,
                    }],
                });

        let pipeline_layout =
            ctx.device
                .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                    label: Some("easel path pipeline layout"),
                    bind_group_layouts: &[&bind_group_layout],
                    immediate_size: 0,
                });

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("easel path pipeline"),
            layout: Some(&pipeline_layout),

            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[PathVertex::layout()],
            },

            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    blend: Some(premul_alpha_blend()),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            // lyon emits mixed winding, so culling must stay off.
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },

            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        self.pipeline_format = Some(ctx.surface_format);
        self.pipeline = Some(pipeline);
        self.bind_group_layout = Some(bind_group_layout);

        self.bind_group = None;
        self.viewport_ubo = None;
    }

    fn ensure_bindings(&mut self, ctx: &RenderCtx<'_>) {
        if self.bind_group.is_some() && self.viewport_ubo.is_some() {
            return;
        }
        let Some(bgl) = self.bind_group_layout.as_ref() else { return };

        let viewport_ubo = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("easel path viewport ubo"),
            size: std::mem::size_of::<ViewportUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("easel path bind group"),
            layout: bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: viewport_ubo.as_entire_binding(),
            }],
        });

        self.viewport_ubo = Some(viewport_ubo);
        self.bind_group = Some(bind_group);
    }

    fn write_viewport_uniform(&mut self, ctx: &RenderCtx<'_>) {
        let Some(ubo) = self.viewport_ubo.as_ref() else { return };
        let u = ViewportUniform::new(ctx.viewport);
        ctx.queue.write_buffer(ubo, 0, bytemuck::bytes_of(&u));
    }

    fn ensure_capacity(&mut self, ctx: &RenderCtx<'_>, vertices: usize, indices: usize) {
        if vertices > self.vertex_capacity || self.vbo.is_none() {
            let cap = grow_capacity(vertices, 256);
            self.vbo = Some(ctx.device.create_buffer(&wgpu::BufferDescriptor {
                label: Some("easel path vbo"),
                size: (cap * std::mem::size_of::<PathVertex>()) as u64,
                usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            }));
            self.vertex_capacity = cap;
        }

        if indices > self.index_capacity || self.ibo.is_none() {
            let cap = grow_capacity(indices, 1024);
            self.ibo = Some(ctx.device.create_buffer(&wgpu::BufferDescriptor {
                label: Some("easel path ibo"),
                size: (cap * std::mem::size_of::<u32>()) as u64,
                usage: wgpu::BufferUsages::INDEX | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            }));
            self.index_capacity = cap;
        }
    }
}
