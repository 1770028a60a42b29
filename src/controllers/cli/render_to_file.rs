use std::path::Path;
use std::time::Instant;

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::render_pass::ports::colour_map::ColourMap;
use crate::core::actions::render_pass::render_pass::RenderStats;
use crate::core::actions::render_pass::render_pass_parallel_rayon::render_pass_parallel_rayon;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::view_state::ViewState;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::escape_time::algorithm::EscapeTimeAlgorithm;
use crate::core::fractals::escape_time::colour_map::GreyscaleColourMap;

pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 600;

/// Renders one view off-screen and hands it to a file presenter.
pub struct CliRenderController<P: FilePresenterPort> {
    presenter: P,
    view: ViewState,
    viewport: Viewport,
    buffer: Option<PixelBuffer>,
}

impl<P: FilePresenterPort> CliRenderController<P> {
    pub fn new(presenter: P, view: ViewState, viewport: Viewport) -> Self {
        Self {
            presenter,
            view,
            viewport,
            buffer: None,
        }
    }

    pub fn with_default_view(presenter: P) -> Self {
        Self::new(
            presenter,
            ViewState::default(),
            Viewport::new(DEFAULT_WIDTH, DEFAULT_HEIGHT),
        )
    }

    pub fn generate(&mut self) -> Result<RenderStats, Box<dyn std::error::Error>> {
        println!("Rendering Mandelbrot set...");
        println!(
            "Image size: {}x{}",
            self.viewport.width(),
            self.viewport.height()
        );
        println!(
            "Centre: ({}, {}), scale: {}",
            self.view.centre_real(),
            self.view.centre_imag(),
            self.view.scale()
        );
        println!("Max iterations: {}", self.view.max_iterations());

        let algorithm = EscapeTimeAlgorithm::new(&self.view, self.viewport);
        let colour_map = GreyscaleColourMap::new(self.view.max_iterations());
        println!("Colour map: {}", colour_map.display_name());

        let start = Instant::now();
        let frame = render_pass_parallel_rayon(self.viewport, &algorithm, &colour_map)?;
        let duration = start.elapsed();

        println!("Duration:   {:?}", duration);
        println!(
            "Evaluated:  {} pixels ({} mirrored)",
            frame.stats.evaluated, frame.stats.mirrored
        );

        self.buffer = Some(frame.pixel_buffer);

        Ok(frame.stats)
    }

    /// Writes the last generated frame. Does nothing before `generate`.
    pub fn write(&self, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        if let Some(buffer) = &self.buffer {
            self.presenter.present(buffer, filepath.as_ref())?;
            println!("Saved to {}", filepath.as_ref().display());
        }

        Ok(())
    }

    #[must_use]
    pub fn buffer(&self) -> Option<&PixelBuffer> {
        self.buffer.as_ref()
    }
}
