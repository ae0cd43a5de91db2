use anyhow::{Context, Result};
use wgpu::SurfaceError;
use winit::dpi::PhysicalSize;
use winit::window::Window;

use super::surface;
use super::{GpuFrame, GpuInit, SurfaceErrorAction};

/// Device, queue and swapchain for one window.
///
/// Borrows the window for `'w`; the runtime keeps both in one
/// self-referencing entry so the window cannot be dropped first.
pub struct Gpu<'w> {
    surface: wgpu::Surface<'w>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    /// Last drawable size seen, physical px. May be 0x0 while minimized.
    size: PhysicalSize<u32>,
}

impl<'w> Gpu<'w> {
    /// Binds a surface to `window` and opens a device that can present to it.
    ///
    /// Every failure is fatal; there is no software fallback.
    pub async fn new(window: &'w Window, init: GpuInit) -> Result<Self> {
        let size = window.inner_size();
        anyhow::ensure!(size.width > 0 && size.height > 0, "window has zero size");

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });
        let surface = instance
            .create_surface(window)
            .context("failed to create wgpu surface")?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: init.power_preference,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .context("no GPU adapter can present to this window")?;
        let (device, queue) = open_device(&adapter, &init).await?;

        let caps = surface.get_capabilities(&adapter);
        let format = surface::choose_surface_format(&caps, init.prefer_srgb)
            .context("surface reports no formats")?;
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width,
            height: size.height,
            present_mode: init.present_mode,
            alpha_mode: surface::choose_alpha_mode(&caps, init.alpha_mode),
            view_formats: Vec::new(),
            desired_maximum_frame_latency: init.desired_maximum_frame_latency,
        };
        surface.configure(&device, &config);

        let info = adapter.get_info();
        log::info!("gpu ready: {} ({:?}), surface {format:?}", info.name, info.backend);

        Ok(Self { surface, device, queue, config, size })
    }

    #[inline]
    pub fn surface_format(&self) -> wgpu::TextureFormat {
        self.config.format
    }

    #[inline]
    pub fn device(&self) -> &wgpu::Device {
        &self.device
    }

    #[inline]
    pub fn queue(&self) -> &wgpu::Queue {
        &self.queue
    }

    pub fn resize(&mut self, new_size: PhysicalSize<u32>) {
        log::debug!("surface resize {}x{}", new_size.width, new_size.height);
        surface::apply_resize(&self.surface, &self.device, &mut self.config, &mut self.size, new_size);
    }

    /// Acquires the next swapchain texture with a fresh encoder.
    pub fn begin_frame(&self) -> std::result::Result<GpuFrame, SurfaceError> {
        let surface_texture = self.surface.get_current_texture()?;
        let view = surface_texture.texture.create_view(&Default::default());
        let encoder = self.device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("easel frame encoder"),
        });
        Ok(GpuFrame { surface_texture, view, encoder })
    }

    /// Submits the frame's commands and presents it.
    pub fn submit(&self, frame: GpuFrame) {
        let GpuFrame { surface_texture, view, encoder } = frame;
        self.queue.submit([encoder.finish()]);
        drop(view);
        surface_texture.present();
    }

    pub fn handle_surface_error(&mut self, err: SurfaceError) -> SurfaceErrorAction {
        surface::map_surface_error(&self.surface, &self.device, &self.config, self.size, err)
    }
}

async fn open_device(adapter: &wgpu::Adapter, init: &GpuInit) -> Result<(wgpu::Device, wgpu::Queue)> {
    adapter
        .request_device(&wgpu::DeviceDescriptor {
            label: Some("easel device"),
            required_features: init.required_features,
            required_limits: init.required_limits.clone(),
            experimental_features: wgpu::ExperimentalFeatures::disabled(),
            memory_hints: wgpu::MemoryHints::MemoryUsage,
            trace: wgpu::Trace::Off,
        })
        .await
        .context("failed to open wgpu device")
}
