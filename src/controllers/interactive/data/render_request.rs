use crate::core::data::view_state::ViewState;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::escape_time::algorithm::EscapeTimeAlgorithm;
use crate::core::fractals::escape_time::colour_map::GreyscaleColourMap;

/// Snapshot of everything one render pass needs.
///
/// `PartialEq` lets callers skip submitting a request identical to the last.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderRequest {
    pub view: ViewState,
    pub viewport: Viewport,
}

impl RenderRequest {
    #[must_use]
    pub fn new(view: ViewState, viewport: Viewport) -> Self {
        Self { view, viewport }
    }

    #[must_use]
    pub fn algorithm(&self) -> EscapeTimeAlgorithm {
        EscapeTimeAlgorithm::new(&self.view, self.viewport)
    }

    #[must_use]
    pub fn colour_map(&self) -> GreyscaleColourMap {
        GreyscaleColourMap::new(self.view.max_iterations())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::render_pass::ports::fractal_algorithm::FractalAlgorithm;

    #[test]
    fn test_algorithm_follows_view_symmetry() {
        let request = RenderRequest::new(ViewState::default(), Viewport::new(8, 8));

        assert!(request.algorithm().mirrors_vertically());
        assert_eq!(request.algorithm().max_iterations(), 18);
    }

    #[test]
    fn test_colour_map_uses_view_iteration_budget() {
        let view = ViewState::new(1.0, 40, 2.0).unwrap();
        let request = RenderRequest::new(view, Viewport::new(8, 8));

        assert_eq!(request.colour_map(), GreyscaleColourMap::new(40));
    }
}
