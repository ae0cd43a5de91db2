use easel_engine::coords::Viewport;
use easel_engine::core::{App, AppControl, FrameCtx};
use easel_engine::paint::Color;
use easel_engine::render::shapes::PathRenderer;
use easel_engine::scene::DrawList;
use easel_turtle::scene::draw_scene;
use easel_turtle::{DrawListSurface, Turtle, TurtleError};

/// Window app that shows the turtle scene.
///
/// The scene is recorded into the draw list on the first frame and again
/// whenever the logical window size changes, since turtle coordinates are
/// anchored at the window center.
pub struct SceneApp {
    draw_list: DrawList,
    renderer: PathRenderer,
    recorded_for: Option<Viewport>,
    background: Color,
}

impl SceneApp {
    pub fn new() -> Self {
        Self {
            draw_list: DrawList::new(),
            renderer: PathRenderer::new(),
            recorded_for: None,
            background: Color::from_srgb_u8(255, 255, 255, 255),
        }
    }

    fn record(&mut self, viewport: Viewport) -> Result<(), TurtleError> {
        self.draw_list.clear();

        let mut turtle = Turtle::new(DrawListSurface::new(&mut self.draw_list, viewport));
        draw_scene(&mut turtle)?;
        if let Some(background) = turtle.into_surface().finish() {
            self.background = background;
        }

        self.recorded_for = Some(viewport);
        log::debug!(
            "recorded scene for {}x{}: {} draw items",
            viewport.width,
            viewport.height,
            self.draw_list.len()
        );
        Ok(())
    }
}

impl Default for SceneApp {
    fn default() -> Self {
        Self::new()
    }
}

impl App for SceneApp {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let viewport = ctx.window.viewport();
        if viewport.is_valid() && self.recorded_for != Some(viewport) {
            if let Err(err) = self.record(viewport) {
                log::error!("failed to draw scene: {err}");
                return AppControl::Exit;
            }
        }

        if ctx.frame_index == 0 {
            log::info!("showing scene at {}x{}", viewport.width, viewport.height);
        }

        let draw_list = &mut self.draw_list;
        let renderer = &mut self.renderer;
        ctx.render(self.background, |rctx, target| {
            renderer.render(rctx, target, draw_list);
        })
    }
}
