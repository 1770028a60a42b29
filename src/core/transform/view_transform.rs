use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::view_state::ViewState;
use crate::core::data::viewport::Viewport;
use crate::core::transform::axis::Axis;

/// Snapshot of the pixel <-> plane mapping for one view and viewport.
///
/// Screen y grows downward while the imaginary axis grows upward, so the
/// vertical factor is the negated horizontal one.
///
/// A viewport with a zero half extent has a zero mapping factor; converting
/// pixels through it yields non-finite values, which the evaluator reports
/// as degenerate rather than panicking.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewTransform {
    factor: f64,
    centre: Complex,
}

impl ViewTransform {
    #[must_use]
    pub fn new(view: &ViewState, viewport: Viewport) -> Self {
        let half_extent = viewport.half_width().min(viewport.half_height());

        Self {
            factor: f64::from(half_extent) / view.scale(),
            centre: view.centre(),
        }
    }

    /// Pixels per plane unit.
    #[must_use]
    pub fn factor(&self) -> f64 {
        self.factor
    }

    #[must_use]
    pub fn factor_for_axis(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.factor,
            Axis::Vertical => -self.factor,
        }
    }

    #[must_use]
    pub fn centre_for_axis(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.centre.real,
            Axis::Vertical => self.centre.imag,
        }
    }

    /// Maps a centre-relative pixel coordinate onto the plane.
    #[must_use]
    pub fn pixel_to_value(&self, axis: Axis, coordinate: i32) -> f64 {
        f64::from(coordinate) / self.factor_for_axis(axis) + self.centre_for_axis(axis)
    }

    /// Maps a plane distance back to pixels.
    ///
    /// The centre offset is neither added nor removed, so this only inverts
    /// [`Self::pixel_to_value`] while the view is centred on the origin.
    #[must_use]
    pub fn value_to_pixel(&self, axis: Axis, value: f64) -> i64 {
        (value * self.factor_for_axis(axis)).round() as i64
    }

    #[must_use]
    pub fn pixel_to_complex(&self, pixel: Point) -> Complex {
        Complex {
            real: self.pixel_to_value(Axis::Horizontal, pixel.x),
            imag: self.pixel_to_value(Axis::Vertical, pixel.y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(scale: f64, centre: Complex) -> ViewState {
        ViewState::new(scale, 18, 2.0)
            .unwrap()
            .with_centre(centre)
            .unwrap()
    }

    #[test]
    fn test_factor_uses_shorter_half_extent() {
        let transform = ViewTransform::new(&view(2.0, Complex::ZERO), Viewport::new(800, 600));

        assert_eq!(transform.factor(), 150.0); // min(400, 300) / 2
    }

    #[test]
    fn test_vertical_factor_is_negated() {
        let transform = ViewTransform::new(&view(2.5, Complex::ZERO), Viewport::new(4, 4));

        assert_eq!(transform.factor_for_axis(Axis::Horizontal), 0.8);
        assert_eq!(transform.factor_for_axis(Axis::Vertical), -0.8);
    }

    #[test]
    fn test_zero_pixel_maps_to_centre_exactly() {
        let centre = Complex::new(-0.743_643_887, 0.131_825_904);
        let transform = ViewTransform::new(&view(0.01, centre), Viewport::new(640, 480));

        assert_eq!(transform.pixel_to_value(Axis::Horizontal, 0), centre.real);
        assert_eq!(transform.pixel_to_value(Axis::Vertical, 0), centre.imag);
        assert_eq!(transform.pixel_to_complex(Point { x: 0, y: 0 }), centre);
    }

    #[test]
    fn test_screen_down_is_plane_down() {
        let transform = ViewTransform::new(&view(1.0, Complex::ZERO), Viewport::new(200, 200));

        assert_eq!(transform.pixel_to_value(Axis::Vertical, 100), -1.0);
        assert_eq!(transform.pixel_to_value(Axis::Vertical, -100), 1.0);
        assert_eq!(transform.pixel_to_value(Axis::Horizontal, 100), 1.0);
        assert_eq!(transform.pixel_to_value(Axis::Horizontal, -100), -1.0);
    }

    #[test]
    fn test_pixel_to_value_adds_centre() {
        let transform =
            ViewTransform::new(&view(1.0, Complex::new(0.5, -0.25)), Viewport::new(200, 200));

        assert_eq!(transform.pixel_to_value(Axis::Horizontal, 50), 1.0);
        assert_eq!(transform.pixel_to_value(Axis::Vertical, 50), -0.75);
    }

    #[test]
    fn test_round_trip_recovers_pixel_at_origin() {
        for scale in [2.5, 1.5 / 0.95, 0.003, 7.0] {
            let transform = ViewTransform::new(&view(scale, Complex::ZERO), Viewport::new(97, 64));

            for &axis in Axis::ALL {
                for pixel in -48..48 {
                    let value = transform.pixel_to_value(axis, pixel);
                    let recovered = transform.value_to_pixel(axis, value);

                    assert!(
                        (recovered - i64::from(pixel)).abs() <= 1,
                        "axis {} scale {} pixel {} recovered {}",
                        axis,
                        scale,
                        pixel,
                        recovered
                    );
                }
            }
        }
    }

    #[test]
    fn test_value_to_pixel_ignores_centre() {
        let transform =
            ViewTransform::new(&view(1.0, Complex::new(3.0, 3.0)), Viewport::new(200, 200));

        assert_eq!(transform.value_to_pixel(Axis::Horizontal, 0.5), 50);
        assert_eq!(transform.value_to_pixel(Axis::Vertical, 0.5), -50);
    }

    #[test]
    fn test_zero_half_extent_gives_non_finite_values() {
        let transform = ViewTransform::new(&view(1.0, Complex::ZERO), Viewport::new(1, 1));

        assert_eq!(transform.factor(), 0.0);
        assert!(!transform.pixel_to_complex(Point { x: 0, y: 0 }).is_finite());
    }
}
