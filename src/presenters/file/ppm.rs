use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::render_pass::ports::surface::Surface;
use crate::core::data::pixel_buffer::PixelBuffer;

/// Writes binary (P6) PPM images.
#[derive(Debug, Default, Clone, Copy)]
pub struct PpmFilePresenter {}

impl PpmFilePresenter {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }

    pub fn write_to<W: Write>(&self, buffer: &PixelBuffer, mut out: W) -> std::io::Result<()> {
        let viewport = buffer.viewport();

        // P6 is binary RGB, followed by width, height and max channel value
        writeln!(out, "P6")?;
        writeln!(out, "{} {}", viewport.width(), viewport.height())?;
        writeln!(out, "255")?;
        out.write_all(buffer.buffer())?;
        out.flush()
    }
}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        let file = File::create(filepath)?;

        self.write_to(buffer, BufWriter::new(file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::viewport::Viewport;

    #[test]
    fn test_write_to_emits_header_and_pixels() {
        let buffer =
            PixelBuffer::from_data(Viewport::new(2, 1), vec![255, 0, 0, 55, 55, 55]).unwrap();
        let mut out = Vec::new();

        PpmFilePresenter::new().write_to(&buffer, &mut out).unwrap();

        let mut expected = b"P6\n2 1\n255\n".to_vec();
        expected.extend_from_slice(&[255, 0, 0, 55, 55, 55]);
        assert_eq!(out, expected);
    }

    #[test]
    fn test_present_writes_file() {
        let path = std::env::temp_dir().join(format!("mandelzoom-ppm-{}.ppm", std::process::id()));
        let buffer = PixelBuffer::new(Viewport::new(3, 2));

        PpmFilePresenter::new().present(&buffer, &path).unwrap();

        let written = std::fs::read(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert!(written.starts_with(b"P6\n3 2\n255\n"));
        assert_eq!(written.len(), b"P6\n3 2\n255\n".len() + 18);
    }
}
