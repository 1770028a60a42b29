use std::error::Error;
use std::fmt;

use crate::core::data::complex::Complex;

pub const DEFAULT_SCALE: f64 = 1.5 / 0.95;
pub const DEFAULT_MAX_ITERATIONS: u32 = 18;
pub const DEFAULT_ESCAPE_RADIUS: f64 = 2.0;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewStateError {
    NonPositiveScale(f64),
    ZeroMaxIterations,
    NonPositiveEscapeRadius(f64),
    NonFiniteCentre { real: f64, imag: f64 },
}

impl fmt::Display for ViewStateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveScale(scale) => {
                write!(f, "scale must be a positive finite number: {}", scale)
            }
            Self::ZeroMaxIterations => {
                write!(f, "Maximum iterations must be greater than zero")
            }
            Self::NonPositiveEscapeRadius(radius) => {
                write!(f, "escape radius must be a positive finite number: {}", radius)
            }
            Self::NonFiniteCentre { real, imag } => {
                write!(f, "view centre must be finite: ({}, {})", real, imag)
            }
        }
    }
}

impl Error for ViewStateError {}

/// Everything that decides what a render pass draws.
///
/// `scale` is the half-extent of the shorter viewport side in plane units, so
/// larger values are more zoomed out. Only the interaction controller moves a
/// view after construction.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewState {
    scale: f64,
    centre: Complex,
    max_iterations: u32,
    escape_radius: f64,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            centre: Complex::ZERO,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            escape_radius: DEFAULT_ESCAPE_RADIUS,
        }
    }
}

impl ViewState {
    pub fn new(scale: f64, max_iterations: u32, escape_radius: f64) -> Result<Self, ViewStateError> {
        validate_scale(scale)?;

        if max_iterations == 0 {
            return Err(ViewStateError::ZeroMaxIterations);
        }

        if !(escape_radius.is_finite() && escape_radius > 0.0) {
            return Err(ViewStateError::NonPositiveEscapeRadius(escape_radius));
        }

        Ok(Self {
            scale,
            centre: Complex::ZERO,
            max_iterations,
            escape_radius,
        })
    }

    pub fn with_centre(mut self, centre: Complex) -> Result<Self, ViewStateError> {
        if !centre.is_finite() {
            return Err(ViewStateError::NonFiniteCentre {
                real: centre.real,
                imag: centre.imag,
            });
        }

        self.centre = centre;
        Ok(self)
    }

    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    #[must_use]
    pub fn centre(&self) -> Complex {
        self.centre
    }

    #[must_use]
    pub fn centre_real(&self) -> f64 {
        self.centre.real
    }

    #[must_use]
    pub fn centre_imag(&self) -> f64 {
        self.centre.imag
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn escape_radius(&self) -> f64 {
        self.escape_radius
    }

    /// The default view is mirror-symmetric about the real axis; any vertical
    /// pan breaks that.
    #[must_use]
    pub fn is_vertically_symmetric(&self) -> bool {
        self.centre.imag == 0.0
    }

    pub(crate) fn set_scale(&mut self, scale: f64) -> Result<(), ViewStateError> {
        validate_scale(scale)?;
        self.scale = scale;
        Ok(())
    }

    pub(crate) fn set_centre(&mut self, centre: Complex) -> Result<(), ViewStateError> {
        *self = self.with_centre(centre)?;
        Ok(())
    }

    pub(crate) fn set_max_iterations(&mut self, max_iterations: u32) -> Result<(), ViewStateError> {
        if max_iterations == 0 {
            return Err(ViewStateError::ZeroMaxIterations);
        }

        self.max_iterations = max_iterations;
        Ok(())
    }
}

fn validate_scale(scale: f64) -> Result<(), ViewStateError> {
    if scale.is_finite() && scale > 0.0 {
        Ok(())
    } else {
        Err(ViewStateError::NonPositiveScale(scale))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_startup_view() {
        let view = ViewState::default();

        assert_eq!(view.scale(), 1.5 / 0.95);
        assert_eq!(view.centre(), Complex::ZERO);
        assert_eq!(view.max_iterations(), 18);
        assert_eq!(view.escape_radius(), 2.0);
        assert!(view.is_vertically_symmetric());
    }

    #[test]
    fn test_new_valid() {
        let view = ViewState::new(2.5, 18, 2.0).unwrap();

        assert_eq!(view.scale(), 2.5);
        assert_eq!(view.max_iterations(), 18);
        assert_eq!(view.escape_radius(), 2.0);
    }

    #[test]
    fn test_new_rejects_non_positive_scale() {
        assert_eq!(
            ViewState::new(0.0, 18, 2.0),
            Err(ViewStateError::NonPositiveScale(0.0))
        );
        assert_eq!(
            ViewState::new(-1.0, 18, 2.0),
            Err(ViewStateError::NonPositiveScale(-1.0))
        );
        assert!(ViewState::new(f64::NAN, 18, 2.0).is_err());
        assert!(ViewState::new(f64::INFINITY, 18, 2.0).is_err());
    }

    #[test]
    fn test_new_rejects_zero_max_iterations() {
        assert_eq!(
            ViewState::new(1.0, 0, 2.0),
            Err(ViewStateError::ZeroMaxIterations)
        );
    }

    #[test]
    fn test_new_rejects_non_positive_escape_radius() {
        assert_eq!(
            ViewState::new(1.0, 10, 0.0),
            Err(ViewStateError::NonPositiveEscapeRadius(0.0))
        );
        assert!(ViewState::new(1.0, 10, f64::NAN).is_err());
    }

    #[test]
    fn test_with_centre() {
        let view = ViewState::default()
            .with_centre(Complex::new(-0.75, 0.1))
            .unwrap();

        assert_eq!(view.centre_real(), -0.75);
        assert_eq!(view.centre_imag(), 0.1);
        assert!(!view.is_vertically_symmetric());
    }

    #[test]
    fn test_with_centre_rejects_non_finite() {
        let result = ViewState::default().with_centre(Complex::new(f64::INFINITY, 0.0));

        assert!(matches!(result, Err(ViewStateError::NonFiniteCentre { .. })));
    }

    #[test]
    fn test_setters_preserve_state_on_error() {
        let mut view = ViewState::default();

        assert!(view.set_scale(-2.0).is_err());
        assert!(view.set_max_iterations(0).is_err());
        assert!(view.set_centre(Complex::new(f64::NAN, 0.0)).is_err());
        assert_eq!(view, ViewState::default());
    }

    #[test]
    fn test_horizontal_pan_keeps_symmetry() {
        let view = ViewState::default()
            .with_centre(Complex::new(-1.0, 0.0))
            .unwrap();

        assert!(view.is_vertically_symmetric());
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            ViewStateError::ZeroMaxIterations.to_string(),
            "Maximum iterations must be greater than zero"
        );
        assert_eq!(
            ViewStateError::NonPositiveScale(-1.0).to_string(),
            "scale must be a positive finite number: -1"
        );
    }
}
