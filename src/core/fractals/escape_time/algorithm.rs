use crate::core::actions::render_pass::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::view_state::ViewState;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::escape_time::result::EvaluationResult;
use crate::core::transform::view_transform::ViewTransform;

/// Iterates `z -> z² + c` from the origin.
///
/// A non-finite `z²` is reset to the origin and iteration carries on, so one
/// overflow cannot poison the remaining iterations. Landing exactly on the
/// previous value ends the loop early: that orbit can never escape.
#[must_use]
pub fn evaluate(c: Complex, max_iterations: u32, escape_radius: f64) -> EvaluationResult {
    let mut z = Complex::ZERO;
    let mut was_reset = false;

    for iteration in 0..max_iterations {
        let previous = z;
        z = z.squared();

        if !z.is_finite() {
            z = Complex::ZERO;
            was_reset = true;
        }

        z = z + c;

        if z.approx_equals(&previous) {
            return EvaluationResult::FixedPoint;
        }

        if z.modulus() > escape_radius {
            return EvaluationResult::Escaped(iteration);
        }
    }

    if was_reset {
        EvaluationResult::Degenerate
    } else {
        EvaluationResult::Bounded
    }
}

/// Escape-time evaluation bound to one view snapshot.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EscapeTimeAlgorithm {
    transform: ViewTransform,
    max_iterations: u32,
    escape_radius: f64,
    mirrors_vertically: bool,
}

impl EscapeTimeAlgorithm {
    #[must_use]
    pub fn new(view: &ViewState, viewport: Viewport) -> Self {
        Self {
            transform: ViewTransform::new(view, viewport),
            max_iterations: view.max_iterations(),
            escape_radius: view.escape_radius(),
            mirrors_vertically: view.is_vertically_symmetric(),
        }
    }

    #[must_use]
    pub fn transform(&self) -> &ViewTransform {
        &self.transform
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}

impl FractalAlgorithm for EscapeTimeAlgorithm {
    type Success = EvaluationResult;

    fn compute(&self, pixel: Point) -> EvaluationResult {
        evaluate(
            self.transform.pixel_to_complex(pixel),
            self.max_iterations,
            self.escape_radius,
        )
    }

    fn mirrors_vertically(&self) -> bool {
        self.mirrors_vertically
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_is_fixed_point_at_first_iteration() {
        for max_iterations in [1, 2, 18, 1000] {
            for radius in [0.5, 2.0, 10.0] {
                assert_eq!(
                    evaluate(Complex::ZERO, max_iterations, radius),
                    EvaluationResult::FixedPoint
                );
            }
        }
    }

    #[test]
    fn test_fast_divergence_escapes_at_zero() {
        assert_eq!(
            evaluate(Complex::new(2.0, 2.0), 18, 2.0),
            EvaluationResult::Escaped(0)
        );
    }

    #[test]
    fn test_escape_iteration_is_zero_based() {
        // z1 = 1.25, z2 = 1.5625 + 1.25 = 2.8125
        assert_eq!(
            evaluate(Complex::new(1.25, 0.0), 18, 2.0),
            EvaluationResult::Escaped(1)
        );
    }

    #[test]
    fn test_point_on_escape_radius_does_not_escape() {
        // c = -2 settles on 2 -> 2, which is never strictly outside radius 2
        assert_eq!(
            evaluate(Complex::new(-2.0, 0.0), 50, 2.0),
            EvaluationResult::FixedPoint
        );
    }

    #[test]
    fn test_interior_point_is_bounded() {
        // period-2 orbit 0 -> -1 -> 0 never repeats its immediate predecessor
        assert_eq!(
            evaluate(Complex::new(-1.0, 0.0), 18, 2.0),
            EvaluationResult::Bounded
        );
    }

    #[test]
    fn test_off_axis_cycle_is_bounded() {
        // c = i cycles between -1 + i and -i
        assert_eq!(
            evaluate(Complex::new(0.0, 1.0), 100, 2.0),
            EvaluationResult::Bounded
        );
    }

    #[test]
    fn test_nan_input_is_degenerate() {
        assert_eq!(
            evaluate(Complex::new(f64::NAN, 0.0), 18, 2.0),
            EvaluationResult::Degenerate
        );
        assert_eq!(
            evaluate(Complex::new(f64::NAN, f64::NAN), 3, 2.0),
            EvaluationResult::Degenerate
        );
    }

    #[test]
    fn test_single_nan_iteration_without_reset_is_bounded() {
        // with one iteration the reset never happens: z = NaN compares false everywhere
        assert_eq!(
            evaluate(Complex::new(f64::NAN, 0.0), 1, 2.0),
            EvaluationResult::Bounded
        );
    }

    #[test]
    fn test_infinite_input_escapes_immediately() {
        assert_eq!(
            evaluate(Complex::new(f64::INFINITY, 0.0), 18, 2.0),
            EvaluationResult::Escaped(0)
        );
    }

    #[test]
    fn test_terminates_within_max_iterations() {
        let max_iterations = 64;

        for step in -20..=20 {
            for imag_step in -20..=20 {
                let c = Complex::new(f64::from(step) * 0.1, f64::from(imag_step) * 0.1);

                if let EvaluationResult::Escaped(iteration) = evaluate(c, max_iterations, 2.0) {
                    assert!(iteration < max_iterations);
                }
            }
        }
    }

    #[test]
    fn test_conjugate_points_evaluate_identically() {
        for step in -20..=20 {
            for imag_step in 1..=20 {
                let c = Complex::new(f64::from(step) * 0.1, f64::from(imag_step) * 0.07);
                let conjugate = Complex::new(c.real, -c.imag);

                assert_eq!(evaluate(c, 40, 2.0), evaluate(conjugate, 40, 2.0));
            }
        }
    }

    #[test]
    fn test_algorithm_evaluates_through_view_transform() {
        let view = ViewState::new(2.5, 18, 2.0).unwrap();
        let algorithm = EscapeTimeAlgorithm::new(&view, Viewport::new(4, 4));

        // factor 0.8: x = 1 -> 1.25, x = -2 -> -2.5
        assert_eq!(algorithm.transform().factor(), 0.8);
        assert_eq!(algorithm.max_iterations(), 18);
        assert_eq!(algorithm.compute(Point { x: 0, y: 0 }), EvaluationResult::FixedPoint);
        assert_eq!(algorithm.compute(Point { x: 1, y: 0 }), EvaluationResult::Escaped(1));
        assert_eq!(algorithm.compute(Point { x: -2, y: 0 }), EvaluationResult::Escaped(0));
    }

    #[test]
    fn test_algorithm_mirrors_only_without_vertical_offset() {
        let viewport = Viewport::new(10, 10);
        let centred = ViewState::default();
        let panned_real = centred.with_centre(Complex::new(-0.5, 0.0)).unwrap();
        let panned_imag = centred.with_centre(Complex::new(0.0, 0.5)).unwrap();

        assert!(EscapeTimeAlgorithm::new(&centred, viewport).mirrors_vertically());
        assert!(EscapeTimeAlgorithm::new(&panned_real, viewport).mirrors_vertically());
        assert!(!EscapeTimeAlgorithm::new(&panned_imag, viewport).mirrors_vertically());
    }
}
