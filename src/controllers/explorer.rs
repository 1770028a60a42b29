use crate::core::actions::apply_selection::apply_selection::{SelectionEvent, apply_selection};
use crate::core::actions::apply_selection::zoom_policy::ZoomPolicy;
use crate::core::actions::render_pass::ports::surface::{Surface, SurfaceError};
use crate::core::actions::render_pass::render_pass::{RenderStats, render_pass};
use crate::core::data::point::Point;
use crate::core::data::view_state::{ViewState, ViewStateError};
use crate::core::fractals::escape_time::explorer_config::ExplorerConfig;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ExplorerError {
    View(ViewStateError),
    Surface(SurfaceError),
}

impl fmt::Display for ExplorerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::View(err) => write!(f, "selection rejected: {}", err),
            Self::Surface(err) => write!(f, "render failed: {}", err),
        }
    }
}

impl Error for ExplorerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::View(err) => Some(err),
            Self::Surface(err) => Some(err),
        }
    }
}

impl From<ViewStateError> for ExplorerError {
    fn from(err: ViewStateError) -> Self {
        Self::View(err)
    }
}

impl From<SurfaceError> for ExplorerError {
    fn from(err: SurfaceError) -> Self {
        Self::Surface(err)
    }
}

/// Synchronous explorer that paints straight onto a host surface.
///
/// Every selection clears the surface and repaints it in full before
/// returning.
pub struct Explorer<S: Surface> {
    view: ViewState,
    zoom: ZoomPolicy,
    surface: S,
}

impl<S: Surface> Explorer<S> {
    pub fn new(config: ExplorerConfig, surface: S) -> Self {
        Self {
            view: config.view,
            zoom: config.zoom,
            surface,
        }
    }

    pub fn render(&mut self) -> Result<RenderStats, SurfaceError> {
        render_pass(&self.view, &mut self.surface).inspect_err(|err| {
            log::error!("render pass failed: {}", err);
        })
    }

    /// Applies the zoom policy to a selection and repaints.
    ///
    /// A rejected selection leaves the view and the surface untouched.
    pub fn select(&mut self, event: SelectionEvent) -> Result<RenderStats, ExplorerError> {
        let viewport = self.surface.viewport();
        let next = apply_selection(&self.view, viewport, event, &self.zoom)?;

        self.view = next;
        self.surface
            .clear_region(Point { x: 0, y: 0 }, viewport.width(), viewport.height())?;

        Ok(self.render()?)
    }

    #[must_use]
    pub fn view_state(&self) -> &ViewState {
        &self.view
    }

    #[must_use]
    pub fn zoom_policy(&self) -> &ZoomPolicy {
        &self.zoom
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }
}
