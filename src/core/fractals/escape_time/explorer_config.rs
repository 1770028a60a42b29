use std::error::Error;
use std::fmt;

use crate::core::actions::apply_selection::zoom_policy::{ZoomPolicy, ZoomPolicyError};
use crate::core::data::complex::Complex;
use crate::core::data::view_state::{ViewState, ViewStateError};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ExplorerConfigError {
    View(ViewStateError),
    Zoom(ZoomPolicyError),
}

impl fmt::Display for ExplorerConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::View(err) => write!(f, "invalid view: {}", err),
            Self::Zoom(err) => write!(f, "invalid zoom policy: {}", err),
        }
    }
}

impl Error for ExplorerConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::View(err) => Some(err),
            Self::Zoom(err) => Some(err),
        }
    }
}

impl From<ViewStateError> for ExplorerConfigError {
    fn from(err: ViewStateError) -> Self {
        Self::View(err)
    }
}

impl From<ZoomPolicyError> for ExplorerConfigError {
    fn from(err: ZoomPolicyError) -> Self {
        Self::Zoom(err)
    }
}

/// Starting view and selection behaviour of an explorer.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ExplorerConfig {
    pub view: ViewState,
    pub zoom: ZoomPolicy,
}

impl ExplorerConfig {
    /// Builds a config from raw values, validating each of them.
    pub fn from_parts(
        scale: f64,
        centre: Complex,
        max_iterations: u32,
        escape_radius: f64,
        zoom: ZoomSettings,
    ) -> Result<Self, ExplorerConfigError> {
        let view = ViewState::new(scale, max_iterations, escape_radius)?.with_centre(centre)?;
        let zoom = ZoomPolicy::new(zoom.recentre, zoom.zoom_factor, zoom.iteration_increment)?;

        Ok(Self { view, zoom })
    }

    /// A click only pans. Scale and iteration budget stay fixed.
    #[must_use]
    pub fn pan_only() -> Self {
        Self {
            view: ViewState::default(),
            zoom: ZoomPolicy::recentre_only(),
        }
    }

    pub fn reset_view(&mut self) {
        self.view = ViewState::default();
    }
}

/// Unvalidated zoom policy values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomSettings {
    pub recentre: bool,
    pub zoom_factor: f64,
    pub iteration_increment: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::view_state::{
        DEFAULT_ESCAPE_RADIUS, DEFAULT_MAX_ITERATIONS, DEFAULT_SCALE,
    };

    fn settings(zoom_factor: f64) -> ZoomSettings {
        ZoomSettings {
            recentre: true,
            zoom_factor,
            iteration_increment: 4,
        }
    }

    #[test]
    fn test_default_uses_default_view_and_policy() {
        let config = ExplorerConfig::default();

        assert_eq!(config.view.scale(), DEFAULT_SCALE);
        assert_eq!(config.view.max_iterations(), DEFAULT_MAX_ITERATIONS);
        assert_eq!(config.view.escape_radius(), DEFAULT_ESCAPE_RADIUS);
        assert_eq!(config.view.centre(), Complex::ZERO);
        assert_eq!(config.zoom, ZoomPolicy::default());
    }

    #[test]
    fn test_from_parts_valid() {
        let config =
            ExplorerConfig::from_parts(3.0, Complex::new(-0.5, 0.25), 64, 4.0, settings(0.25))
                .unwrap();

        assert_eq!(config.view.scale(), 3.0);
        assert_eq!(config.view.centre(), Complex::new(-0.5, 0.25));
        assert_eq!(config.view.max_iterations(), 64);
        assert_eq!(config.zoom.zoom_factor(), 0.25);
        assert_eq!(config.zoom.iteration_increment(), 4);
    }

    #[test]
    fn test_from_parts_rejects_invalid_view() {
        let result = ExplorerConfig::from_parts(1.0, Complex::ZERO, 0, 2.0, settings(0.5));

        assert_eq!(
            result,
            Err(ExplorerConfigError::View(ViewStateError::ZeroMaxIterations))
        );
    }

    #[test]
    fn test_from_parts_rejects_invalid_zoom() {
        let result = ExplorerConfig::from_parts(1.0, Complex::ZERO, 18, 2.0, settings(-1.0));

        assert_eq!(
            result,
            Err(ExplorerConfigError::Zoom(ZoomPolicyError::InvalidZoomFactor(-1.0)))
        );
    }

    #[test]
    fn test_pan_only_never_zooms() {
        let config = ExplorerConfig::pan_only();

        assert_eq!(config.zoom.zoom_factor(), 1.0);
        assert_eq!(config.zoom.iteration_increment(), 0);
    }

    #[test]
    fn test_reset_view_keeps_policy() {
        let mut config = ExplorerConfig::pan_only();
        config.view = config.view.with_centre(Complex::new(1.0, 1.0)).unwrap();

        config.reset_view();

        assert_eq!(config.view, ViewState::default());
        assert_eq!(config.zoom, ZoomPolicy::recentre_only());
    }

    #[test]
    fn test_error_display_wraps_source() {
        let err = ExplorerConfigError::from(ViewStateError::ZeroMaxIterations);

        assert_eq!(
            err.to_string(),
            "invalid view: Maximum iterations must be greater than zero"
        );
        assert!(err.source().is_some());
    }
}
