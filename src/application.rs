use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;

use crate::output::{self, ColorMapping, ImageSink};
use crate::renderer::{FrameBuffer, RenderSettings, Renderer};
use crate::scene::Scene;

#[derive(Debug)]
pub struct AppState {
    started: Instant,
    elapsed_time: f32,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
            elapsed_time: 0.0,
        }
    }

    pub fn update(&mut self) {
        self.elapsed_time = self.started.elapsed().as_secs_f32();
    }

    /// Seconds since the application started, as of the last `update`.
    pub fn elapsed_time(&self) -> f32 {
        self.elapsed_time
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone)]
pub struct OutputSettings {
    pub path: PathBuf,
    pub mapping: ColorMapping,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            path: PathBuf::from("sphere.tga"),
            mapping: ColorMapping::Clamp,
        }
    }
}

/// Renders one scene and hands the frame to an image sink.
pub struct Application {
    scene: Scene,
    renderer: Renderer,
    sink: Box<dyn ImageSink>,
    state: AppState,
}

impl Application {
    pub fn new(scene: Scene, settings: RenderSettings, output: &OutputSettings) -> Result<Self> {
        output::check_writable(&output.path)?;
        Ok(Self::with_sink(
            scene,
            settings,
            output::sink_for_path(&output.path, output.mapping),
        ))
    }

    pub fn with_sink(scene: Scene, settings: RenderSettings, sink: Box<dyn ImageSink>) -> Self {
        Self {
            scene,
            renderer: Renderer::new(settings),
            sink,
            state: AppState::new(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn run(&mut self) -> Result<FrameBuffer> {
        let frame = self.renderer.render(&self.scene);
        self.sink.write(&frame)?;

        self.state.update();
        tracing::info!("finished in {:.3}s", self.state.elapsed_time());
        Ok(frame)
    }
}
