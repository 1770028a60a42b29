use crate::controllers::interactive::data::render_request::RenderRequest;
use crate::core::actions::apply_selection::apply_selection::{SelectionEvent, apply_selection};
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::escape_time::explorer_config::ExplorerConfig;

pub struct GuiAppState {
    pub config: ExplorerConfig,
    last_submitted_request: Option<RenderRequest>,
    pub latest_submitted_generation: u64,
    cursor: Option<Point>,
}

impl Default for GuiAppState {
    fn default() -> Self {
        Self::new(ExplorerConfig::default())
    }
}

impl GuiAppState {
    #[must_use]
    pub fn new(config: ExplorerConfig) -> Self {
        Self {
            config,
            last_submitted_request: None,
            latest_submitted_generation: 0,
            cursor: None,
        }
    }

    #[must_use]
    pub fn build_render_request(&self, viewport: Viewport) -> RenderRequest {
        RenderRequest::new(self.config.view, viewport)
    }

    #[must_use]
    pub fn should_submit(&self, request: &RenderRequest) -> bool {
        self.last_submitted_request
            .as_ref()
            .is_none_or(|last| last != request)
    }

    pub fn record_submission(&mut self, request: RenderRequest, generation: u64) {
        self.last_submitted_request = Some(request);
        self.latest_submitted_generation = generation;
    }

    /// Remembers the cursor in physical pixels from the window's top-left.
    pub fn track_cursor(&mut self, x: f64, y: f64) {
        self.cursor = Some(Point {
            x: x.floor() as i32,
            y: y.floor() as i32,
        });
    }

    pub fn forget_cursor(&mut self) {
        self.cursor = None;
    }

    /// Applies the zoom policy at the cursor. Returns whether the view changed.
    pub fn select_at_cursor(&mut self, viewport: Viewport) -> bool {
        let Some(position) = self.cursor else {
            return false;
        };

        match apply_selection(
            &self.config.view,
            viewport,
            SelectionEvent { position },
            &self.config.zoom,
        ) {
            Ok(view) => {
                let changed = view != self.config.view;
                self.config.view = view;
                changed
            }
            Err(err) => {
                log::warn!("ignoring selection at ({}, {}): {}", position.x, position.y, err);
                false
            }
        }
    }

    pub fn reset_view(&mut self) {
        self.config.reset_view();
    }

    #[must_use]
    pub fn title(&self) -> String {
        let view = &self.config.view;

        format!(
            "Mandelzoom | centre ({:.6}, {:.6}) | scale {:.3e} | {} iterations",
            view.centre_real(),
            view.centre_imag(),
            view.scale(),
            view.max_iterations()
        )
    }
}
