use anyhow::{Context, Result};
use ouroboros::self_referencing;

use winit::application::ApplicationHandler;
use winit::dpi::{LogicalSize, PhysicalSize};
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::core::{App, AppControl, FrameCtx, WindowCtx};
use crate::device::{Gpu, GpuInit};

/// Window settings, applied once at creation.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
    pub resizable: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "easel".to_string(),
            initial_size: LogicalSize::new(800.0, 600.0),
            resizable: true,
        }
    }
}

pub struct Runtime;

impl Runtime {
    /// Opens one window and blocks until the viewer closes it.
    ///
    /// Redraws happen on demand only: when the window first appears, after
    /// resizes and scale changes, and when a frame had to be skipped.
    /// Window or GPU initialization failures end the loop and are returned.
    pub fn run<A>(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Result<()>
    where
        A: App + 'static,
    {
        let event_loop = EventLoop::new().context("failed to create event loop")?;
        event_loop.set_control_flow(ControlFlow::Wait);

        let mut state = RuntimeState { config, gpu_init, app, surface: None, fatal: None };
        event_loop.run_app(&mut state).context("event loop failed")?;

        state.fatal.map_or(Ok(()), Err)
    }
}

/// Window plus the GPU context borrowing it.
#[self_referencing]
struct WindowSurface {
    frames: u64,

    window: Window,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

impl WindowSurface {
    fn open(event_loop: &ActiveEventLoop, config: &RuntimeConfig, gpu_init: GpuInit) -> Result<Self> {
        let attrs = Window::default_attributes()
            .with_title(config.title.as_str())
            .with_inner_size(config.initial_size)
            .with_resizable(config.resizable);
        let window = event_loop.create_window(attrs).context("failed to create window")?;

        WindowSurfaceTryBuilder {
            frames: 0,
            window,
            gpu_builder: |window| pollster::block_on(Gpu::new(window, gpu_init)).context("failed to initialize GPU"),
        }
        .try_build()
    }

    fn request_redraw(&self) {
        self.with_window(|w| w.request_redraw());
    }

    fn resize(&mut self, size: PhysicalSize<u32>) {
        self.with_gpu_mut(|gpu| gpu.resize(size));
        self.request_redraw();
    }

    fn frame<A: App>(&mut self, app: &mut A) -> AppControl {
        self.with_mut(|fields| {
            let mut ctx = FrameCtx {
                window: WindowCtx { window: fields.window },
                gpu: fields.gpu,
                frame_index: *fields.frames,
            };
            *fields.frames += 1;
            app.on_frame(&mut ctx)
        })
    }
}

struct RuntimeState<A> {
    config: RuntimeConfig,
    gpu_init: GpuInit,
    app: A,
    surface: Option<WindowSurface>,
    fatal: Option<anyhow::Error>,
}

impl<A: App> RuntimeState<A> {
    fn close(&mut self, event_loop: &ActiveEventLoop) {
        self.surface = None;
        event_loop.exit();
    }
}

impl<A: App> ApplicationHandler for RuntimeState<A> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.surface.is_some() {
            return;
        }

        match WindowSurface::open(event_loop, &self.config, self.gpu_init.clone()) {
            Ok(surface) => {
                surface.request_redraw();
                self.surface = Some(surface);
            }
            Err(err) => {
                log::error!("{err:#}");
                self.fatal = Some(err);
                self.close(event_loop);
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        if self.app.on_window_event(&event) == AppControl::Exit {
            self.close(event_loop);
            return;
        }
        let Some(surface) = self.surface.as_mut() else { return };

        match event {
            WindowEvent::CloseRequested => {
                log::info!("window closed");
                self.close(event_loop);
            }
            WindowEvent::Resized(size) => surface.resize(size),
            WindowEvent::ScaleFactorChanged { .. } => {
                let size = surface.with_window(|w| w.inner_size());
                surface.resize(size);
            }
            WindowEvent::RedrawRequested => {
                if surface.frame(&mut self.app) == AppControl::Exit {
                    self.close(event_loop);
                }
            }
            _ => {}
        }
    }
}
