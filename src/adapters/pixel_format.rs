//! Conversions between the engine's RGB buffers and framebuffer formats.

use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormatError {
    PartialRgbPixel { len: usize },
    LengthMismatch { expected: usize, actual: usize },
}

impl fmt::Display for PixelFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PartialRgbPixel { len } => {
                write!(f, "rgb length {} is not a multiple of 3", len)
            }
            Self::LengthMismatch { expected, actual } => {
                write!(f, "rgba length {} does not match expected {}", actual, expected)
            }
        }
    }
}

impl Error for PixelFormatError {}

/// Expands packed RGB into opaque RGBA.
///
/// `dst` must hold exactly four bytes for every three in `src`; nothing is
/// written otherwise.
pub fn copy_rgb_to_rgba(src: &[u8], dst: &mut [u8]) -> Result<(), PixelFormatError> {
    if src.len() % 3 != 0 {
        return Err(PixelFormatError::PartialRgbPixel { len: src.len() });
    }

    let expected = src.len() / 3 * 4;
    if dst.len() != expected {
        return Err(PixelFormatError::LengthMismatch {
            expected,
            actual: dst.len(),
        });
    }

    for (src_pixel, dst_pixel) in src.chunks_exact(3).zip(dst.chunks_exact_mut(4)) {
        dst_pixel[..3].copy_from_slice(src_pixel);
        dst_pixel[3] = 255;
    }

    Ok(())
}

/// Paints every RGBA pixel opaque black.
pub fn fill_rgba_black(dst: &mut [u8]) {
    for pixel in dst.chunks_exact_mut(4) {
        pixel.copy_from_slice(&[0, 0, 0, 255]);
    }
}
