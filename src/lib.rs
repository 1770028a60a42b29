//! Escape-time Mandelbrot explorer.
//!
//! The engine maps viewport pixels onto the complex plane, iterates
//! `z -> z² + c` per pixel and paints greyscale colours onto a host
//! [`Surface`]. Selections re-centre and zoom the view.

mod adapters;
mod controllers;
mod core;
mod input;
mod presenters;

pub use crate::adapters::pixel_format::{PixelFormatError, copy_rgb_to_rgba};
pub use crate::controllers::cli::render_to_file::CliRenderController;
pub use crate::controllers::explorer::{Explorer, ExplorerError};
pub use crate::controllers::interactive::{
    FrameData, InteractiveController, InteractiveControllerPresenterPort, RenderError,
    RenderEvent, RenderRequest,
};
pub use crate::controllers::ports::file_presenter::FilePresenterPort;
pub use crate::core::actions::apply_selection::apply_selection::{SelectionEvent, apply_selection};
pub use crate::core::actions::apply_selection::zoom_policy::{ZoomPolicy, ZoomPolicyError};
pub use crate::core::actions::render_pass::cancellation::{CancelToken, Cancelled, NeverCancel};
pub use crate::core::actions::render_pass::ports::colour_map::ColourMap;
pub use crate::core::actions::render_pass::ports::fractal_algorithm::FractalAlgorithm;
pub use crate::core::actions::render_pass::ports::surface::{Surface, SurfaceError, SurfaceFactory};
pub use crate::core::actions::render_pass::render_pass::{RenderStats, render_pass, render_pass_with};
pub use crate::core::actions::render_pass::render_pass_parallel_rayon::{
    RenderPassError, RenderedFrame, render_pass_parallel_rayon,
    render_pass_parallel_rayon_cancelable,
};
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferFactory};
pub use crate::core::data::point::Point;
pub use crate::core::data::view_state::{ViewState, ViewStateError};
pub use crate::core::data::viewport::Viewport;
pub use crate::core::fractals::escape_time::algorithm::{EscapeTimeAlgorithm, evaluate};
pub use crate::core::fractals::escape_time::colour_map::{GreyscaleColourMap, colour_for};
pub use crate::core::fractals::escape_time::explorer_config::{
    ExplorerConfig, ExplorerConfigError, ZoomSettings,
};
pub use crate::core::fractals::escape_time::result::EvaluationResult;
pub use crate::core::transform::axis::{Axis, InvalidAxisError};
pub use crate::core::transform::view_transform::ViewTransform;
pub use crate::presenters::file::ppm::PpmFilePresenter;

#[cfg(feature = "gui")]
pub use crate::input::gui::commands::run_gui::RunGuiCommand;
#[cfg(feature = "gui")]
pub use crate::presenters::pixels::factory::PixelsPresenterFactory;
