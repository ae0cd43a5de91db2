use crate::coords::Viewport;
use crate::device::Gpu;
use crate::paint::Color;

/// GPU handles a renderer needs while recording one frame.
pub struct RenderCtx<'a> {
    pub device: &'a wgpu::Device,
    pub queue: &'a wgpu::Queue,
    pub surface_format: wgpu::TextureFormat,
    /// Logical size the draw list coordinates are expressed in.
    pub viewport: Viewport,
}

impl<'a> RenderCtx<'a> {
    pub fn for_frame(gpu: &'a Gpu<'_>, viewport: Viewport) -> Self {
        Self {
            device: gpu.device(),
            queue: gpu.queue(),
            surface_format: gpu.surface_format(),
            viewport,
        }
    }
}

/// Color attachment and encoder of the frame being recorded.
pub struct RenderTarget<'a> {
    pub encoder: &'a mut wgpu::CommandEncoder,
    pub color_view: &'a wgpu::TextureView,
}

impl<'a> RenderTarget<'a> {
    #[inline]
    pub fn new(encoder: &'a mut wgpu::CommandEncoder, color_view: &'a wgpu::TextureView) -> Self {
        Self { encoder, color_view }
    }

    /// Pass that wipes the target to `color`.
    pub fn clear_pass(&mut self, color: Color) -> wgpu::RenderPass<'_> {
        self.pass("easel clear", wgpu::LoadOp::Clear(color.to_wgpu()))
    }

    /// Pass that paints over what earlier passes left.
    pub fn overlay_pass(&mut self, label: &'static str) -> wgpu::RenderPass<'_> {
        self.pass(label, wgpu::LoadOp::Load)
    }

    fn pass(&mut self, label: &'static str, load: wgpu::LoadOp<wgpu::Color>) -> wgpu::RenderPass<'_> {
        self.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some(label),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: self.color_view,
                resolve_target: None,
                ops: wgpu::Operations { load, store: wgpu::StoreOp::Store },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        })
    }
}
