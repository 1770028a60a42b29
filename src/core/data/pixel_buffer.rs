use crate::core::actions::render_pass::ports::surface::{Surface, SurfaceError, SurfaceFactory};
use crate::core::data::colour::Colour;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;

fn viewport_to_buffer_size(viewport: Viewport) -> usize {
    (viewport.size() * 3) as usize
}

/// Last coordinate of a run of `length` pixels starting at `start`, or `None`
/// when it does not fit in an `i32`.
fn run_end(start: i32, length: u32) -> Option<i32> {
    let length = i32::try_from(length).ok()?;
    start.checked_add(length - 1)
}

pub type PixelBufferData = Vec<u8>;

/// Row-major RGB surface held in memory.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    viewport: Viewport,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            buffer: vec![0; viewport_to_buffer_size(viewport)],
        }
    }

    pub fn from_data(viewport: Viewport, buffer: PixelBufferData) -> Result<Self, SurfaceError> {
        let viewport_size = viewport_to_buffer_size(viewport);

        if viewport_size != buffer.len() {
            return Err(SurfaceError::BoundsMismatch {
                viewport_size,
                buffer_size: buffer.len(),
            });
        }

        Ok(Self { viewport, buffer })
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBufferData {
        &self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn pixel(&self, pixel: Point) -> Option<Colour> {
        if !self.viewport.contains_point(pixel) {
            return None;
        }

        let index = self.index_of(pixel);

        Some(Colour {
            r: self.buffer[index],
            g: self.buffer[index + 1],
            b: self.buffer[index + 2],
        })
    }

    /// Copies a run of colours into one row, starting at `start`.
    pub fn write_row(&mut self, start: Point, colours: &[Colour]) -> Result<(), SurfaceError> {
        if colours.is_empty() {
            return Ok(());
        }

        let width = u32::try_from(colours.len()).unwrap_or(u32::MAX);
        let end = run_end(start.x, width).map(|x| Point { x, y: start.y });

        let in_bounds = end.is_some_and(|end| {
            self.viewport.contains_point(start) && self.viewport.contains_point(end)
        });
        if !in_bounds {
            return Err(SurfaceError::RegionOutsideBounds {
                top_left: start,
                width,
                height: 1,
                viewport: self.viewport,
            });
        }

        let index = self.index_of(start);
        for (chunk, colour) in self.buffer[index..index + colours.len() * 3]
            .chunks_exact_mut(3)
            .zip(colours)
        {
            chunk.copy_from_slice(&[colour.r, colour.g, colour.b]);
        }

        Ok(())
    }

    fn index_of(&self, pixel: Point) -> usize {
        (pixel.y as usize * self.viewport.width() as usize + pixel.x as usize) * 3
    }
}

impl Surface for PixelBuffer {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn set_pixel(&mut self, pixel: Point, colour: Colour) -> Result<(), SurfaceError> {
        if !self.viewport.contains_point(pixel) {
            return Err(SurfaceError::PixelOutsideBounds {
                pixel,
                viewport: self.viewport,
            });
        }

        let index = self.index_of(pixel);

        self.buffer[index] = colour.r;
        self.buffer[index + 1] = colour.g;
        self.buffer[index + 2] = colour.b;

        Ok(())
    }

    fn clear_region(
        &mut self,
        top_left: Point,
        width: u32,
        height: u32,
    ) -> Result<(), SurfaceError> {
        if width == 0 || height == 0 {
            return Ok(());
        }

        let bottom_right = run_end(top_left.x, width)
            .zip(run_end(top_left.y, height))
            .map(|(x, y)| Point { x, y })
            .filter(|&bottom_right| {
                self.viewport.contains_point(top_left) && self.viewport.contains_point(bottom_right)
            });

        let Some(bottom_right) = bottom_right else {
            return Err(SurfaceError::RegionOutsideBounds {
                top_left,
                width,
                height,
                viewport: self.viewport,
            });
        };

        for y in top_left.y..=bottom_right.y {
            let start = self.index_of(Point { x: top_left.x, y });
            let end = start + width as usize * 3;
            self.buffer[start..end].fill(0);
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PixelBufferFactory;

impl SurfaceFactory for PixelBufferFactory {
    type Surface = PixelBuffer;

    fn establish(&self, width: u32, height: u32) -> PixelBuffer {
        PixelBuffer::new(Viewport::new(width, height))
    }
}
