use std::error::Error;
use std::fmt;

pub const DEFAULT_ZOOM_FACTOR: f64 = 0.5;
pub const DEFAULT_ITERATION_INCREMENT: u32 = 8;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ZoomPolicyError {
    InvalidZoomFactor(f64),
}

impl fmt::Display for ZoomPolicyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidZoomFactor(factor) => {
                write!(f, "zoom factor must be a positive finite number: {}", factor)
            }
        }
    }
}

impl Error for ZoomPolicyError {}

/// How a selection changes the view.
///
/// `zoom_factor` multiplies the scale, so values below one zoom in.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ZoomPolicy {
    recentre: bool,
    zoom_factor: f64,
    iteration_increment: u32,
}

impl Default for ZoomPolicy {
    fn default() -> Self {
        Self {
            recentre: true,
            zoom_factor: DEFAULT_ZOOM_FACTOR,
            iteration_increment: DEFAULT_ITERATION_INCREMENT,
        }
    }
}

impl ZoomPolicy {
    pub fn new(
        recentre: bool,
        zoom_factor: f64,
        iteration_increment: u32,
    ) -> Result<Self, ZoomPolicyError> {
        if !(zoom_factor.is_finite() && zoom_factor > 0.0) {
            return Err(ZoomPolicyError::InvalidZoomFactor(zoom_factor));
        }

        Ok(Self {
            recentre,
            zoom_factor,
            iteration_increment,
        })
    }

    /// Pan to the selected point without zooming.
    #[must_use]
    pub fn recentre_only() -> Self {
        Self {
            recentre: true,
            zoom_factor: 1.0,
            iteration_increment: 0,
        }
    }

    #[must_use]
    pub fn recentre(&self) -> bool {
        self.recentre
    }

    #[must_use]
    pub fn zoom_factor(&self) -> f64 {
        self.zoom_factor
    }

    #[must_use]
    pub fn iteration_increment(&self) -> u32 {
        self.iteration_increment
    }
}
