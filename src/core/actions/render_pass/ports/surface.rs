use std::error::Error;
use std::fmt;

use crate::core::data::colour::Colour;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SurfaceError {
    PixelOutsideBounds {
        pixel: Point,
        viewport: Viewport,
    },
    RegionOutsideBounds {
        top_left: Point,
        width: u32,
        height: u32,
        viewport: Viewport,
    },
    BoundsMismatch {
        viewport_size: usize,
        buffer_size: usize,
    },
}

impl fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PixelOutsideBounds { pixel, viewport } => {
                write!(
                    f,
                    "pixel at x:{}, y:{} outside of {}x{} surface",
                    pixel.x,
                    pixel.y,
                    viewport.width(),
                    viewport.height()
                )
            }
            Self::RegionOutsideBounds {
                top_left,
                width,
                height,
                viewport,
            } => {
                write!(
                    f,
                    "region {}x{} at x:{}, y:{} outside of {}x{} surface",
                    width,
                    height,
                    top_left.x,
                    top_left.y,
                    viewport.width(),
                    viewport.height()
                )
            }
            Self::BoundsMismatch {
                viewport_size,
                buffer_size,
            } => {
                write!(
                    f,
                    "viewport size {} does not match buffer size {}",
                    viewport_size, buffer_size
                )
            }
        }
    }
}

impl Error for SurfaceError {}

/// Drawable provided by the host. Pixels are addressed from the top-left.
pub trait Surface {
    fn viewport(&self) -> Viewport;
    fn set_pixel(&mut self, pixel: Point, colour: Colour) -> Result<(), SurfaceError>;
    fn clear_region(
        &mut self,
        top_left: Point,
        width: u32,
        height: u32,
    ) -> Result<(), SurfaceError>;
}

pub trait SurfaceFactory {
    type Surface: Surface;

    fn establish(&self, width: u32, height: u32) -> Self::Surface;
}
