use crate::core::data::point::Point;

pub trait FractalAlgorithm {
    type Success;

    /// Evaluates the pixel at a centre-relative position.
    fn compute(&self, pixel: Point) -> Self::Success;

    /// Whether row `y` always yields the same result as row `-y`.
    fn mirrors_vertically(&self) -> bool {
        false
    }
}
