mod app;

use anyhow::{Context, Result};
use easel_engine::device::GpuInit;
use easel_engine::logging::{init_logging, LoggingConfig};
use easel_engine::window::{Runtime, RuntimeConfig};
use easel_turtle::scene::draw_scene;
use easel_turtle::{Recorder, Turtle};
use winit::dpi::LogicalSize;

use crate::app::SceneApp;

const TITLE: &str = "Turtle Graphics Assignment";
const WIDTH: f64 = 900.0;
const HEIGHT: f64 = 1000.0;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    // Draw once headless so a broken scene fails before any window opens.
    let mut preflight = Turtle::new(Recorder::new());
    draw_scene(&mut preflight).context("scene failed to draw")?;
    let recorded = preflight.into_surface();
    log::info!(
        "scene ready: {} strokes, {} fills",
        recorded.strokes().count(),
        recorded.fills().count()
    );

    let config = RuntimeConfig {
        title: TITLE.to_string(),
        initial_size: LogicalSize::new(WIDTH, HEIGHT),
        resizable: true,
    };

    Runtime::run(config, GpuInit::default(), SceneApp::new()).context("window closed with an error")
}
