use winit::window::Window;

use crate::coords::Viewport;
use crate::device::{Gpu, SurfaceErrorAction};
use crate::paint::Color;
use crate::render::{RenderCtx, RenderTarget};

use super::app::AppControl;

/// Per-window handle.
pub struct WindowCtx<'a> {
    pub window: &'a Window,
}

impl<'a> WindowCtx<'a> {
    /// Returns the logical window size as a viewport.
    pub fn viewport(&self) -> Viewport {
        let phys = self.window.inner_size();
        let logi: winit::dpi::LogicalSize<f64> = phys.to_logical(self.window.scale_factor());
        Viewport::new(logi.width as f32, logi.height as f32)
    }
}

/// Per-frame context passed to `core::App::on_frame`.
///
/// Lifetimes:
/// - `'a` is the duration of the callback invocation
/// - `'w` is the window-borrow lifetime carried by `Gpu<'w>`
pub struct FrameCtx<'a, 'w> {
    pub window: WindowCtx<'a>,
    pub gpu: &'a mut Gpu<'w>,
    /// Zero-based count of frames rendered for this window.
    pub frame_index: u64,
}

impl<'a, 'w> FrameCtx<'a, 'w> {
    /// Clears the surface with `clear`, calls `draw` with a ready [`RenderCtx`] and
    /// [`RenderTarget`], then presents the frame.
    ///
    /// Recoverable surface errors skip the frame and schedule another redraw.
    pub fn render<F>(&mut self, clear: Color, draw: F) -> AppControl
    where
        F: FnOnce(&RenderCtx<'_>, &mut RenderTarget<'_>),
    {
        let viewport = self.window.viewport();
        if !viewport.is_valid() {
            // Minimized; nothing to present until the next resize.
            return AppControl::Continue;
        }

        let mut frame = match self.gpu.begin_frame() {
            Ok(f) => f,
            Err(err) => {
                let action = self.gpu.handle_surface_error(err.clone());
                log::debug!("surface error {err:?} -> {action:?}");
                if action == SurfaceErrorAction::Fatal {
                    log::error!("fatal surface error: {err}");
                    return AppControl::Exit;
                }
                if action.wants_redraw() {
                    self.window.window.request_redraw();
                }
                return AppControl::Continue;
            }
        };

        {
            let mut target = RenderTarget::new(&mut frame.encoder, &frame.view);
            drop(target.clear_pass(clear));

            let rctx = RenderCtx::for_frame(self.gpu, viewport);
            draw(&rctx, &mut target);
        }

        self.window.window.pre_present_notify();
        self.gpu.submit(frame);

        AppControl::Continue
    }
}
