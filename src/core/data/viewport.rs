use std::ops::Range;

use crate::core::data::point::Point;

/// Pixel rectangle the host surface exposes for rendering.
///
/// The engine addresses pixels relative to the viewport centre, the host
/// addresses them from the top-left corner. Half extents are floored, so a
/// 5 pixel wide viewport spans `x` in `-2..3`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Viewport {
    width: u32,
    height: u32,
}

impl Viewport {
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn half_width(&self) -> i32 {
        (self.width / 2) as i32
    }

    #[must_use]
    pub fn half_height(&self) -> i32 {
        (self.height / 2) as i32
    }

    /// A zero-sized viewport renders nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    #[must_use]
    pub fn size(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// Centre-relative columns covered by the viewport.
    #[must_use]
    pub fn x_range(&self) -> Range<i32> {
        -self.half_width()..(self.width as i32 - self.half_width())
    }

    /// Centre-relative rows covered by the viewport.
    #[must_use]
    pub fn y_range(&self) -> Range<i32> {
        -self.half_height()..(self.height as i32 - self.half_height())
    }

    #[must_use]
    pub fn to_top_left(&self, centred: Point) -> Point {
        Point {
            x: centred.x + self.half_width(),
            y: centred.y + self.half_height(),
        }
    }

    #[must_use]
    pub fn to_centred(&self, top_left: Point) -> Point {
        Point {
            x: top_left.x - self.half_width(),
            y: top_left.y - self.half_height(),
        }
    }

    /// Whether a top-left-relative pixel lies on the surface.
    #[must_use]
    pub fn contains_point(&self, top_left: Point) -> bool {
        top_left.x >= 0
            && top_left.y >= 0
            && (top_left.x as i64) < i64::from(self.width)
            && (top_left.y as i64) < i64::from(self.height)
    }
}
