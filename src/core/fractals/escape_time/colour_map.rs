use crate::core::actions::render_pass::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::escape_time::result::EvaluationResult;

const GREY_FLOOR: f64 = 55.0;
const GREY_SPAN: f64 = 200.0;

/// Non-escaping points are black; escaping points get a grey level that
/// brightens with the escape iteration.
#[must_use]
pub fn colour_for(result: EvaluationResult, max_iterations: u32) -> Colour {
    match result.escaped_at() {
        Some(iteration) => {
            let level = f64::from(iteration) / f64::from(max_iterations) * GREY_SPAN + GREY_FLOOR;
            Colour::grey(clamp_to_byte(level))
        }
        None => Colour::BLACK,
    }
}

fn clamp_to_byte(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }

    value.trunc().clamp(0.0, 255.0) as u8
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GreyscaleColourMap {
    max_iterations: u32,
}

impl GreyscaleColourMap {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}

impl ColourMap<EvaluationResult> for GreyscaleColourMap {
    fn map(&self, value: EvaluationResult) -> Colour {
        colour_for(value, self.max_iterations)
    }

    fn display_name(&self) -> &str {
        "Greyscale"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_escaping_results_are_black() {
        for result in [
            EvaluationResult::Bounded,
            EvaluationResult::Degenerate,
            EvaluationResult::FixedPoint,
        ] {
            assert_eq!(colour_for(result, 18), Colour::BLACK);
        }
    }

    #[test]
    fn test_first_iteration_escape_is_floor_grey() {
        assert_eq!(colour_for(EvaluationResult::Escaped(0), 18), Colour::grey(55));
    }

    #[test]
    fn test_level_is_truncated() {
        // 1 / 18 * 200 + 55 = 66.11
        assert_eq!(colour_for(EvaluationResult::Escaped(1), 18), Colour::grey(66));
        // 17 / 18 * 200 + 55 = 243.88
        assert_eq!(colour_for(EvaluationResult::Escaped(17), 18), Colour::grey(243));
    }

    #[test]
    fn test_channels_stay_in_byte_range_for_every_iteration() {
        for max_iterations in [1, 2, 18, 255, 10_000] {
            let mut previous = 0;

            for iteration in 0..max_iterations {
                let colour = colour_for(EvaluationResult::Escaped(iteration), max_iterations);

                assert!(colour.r >= 55);
                assert!(colour.r >= previous);
                assert_eq!(colour.r, colour.g);
                assert_eq!(colour.g, colour.b);
                previous = colour.r;
            }
        }
    }

    #[test]
    fn test_out_of_range_iteration_is_clamped() {
        assert_eq!(colour_for(EvaluationResult::Escaped(100), 10), Colour::grey(255));
        assert_eq!(colour_for(EvaluationResult::Escaped(u32::MAX), 1), Colour::grey(255));
    }

    #[test]
    fn test_clamp_to_byte() {
        assert_eq!(clamp_to_byte(-3.0), 0);
        assert_eq!(clamp_to_byte(254.99), 254);
        assert_eq!(clamp_to_byte(1e9), 255);
        assert_eq!(clamp_to_byte(f64::NAN), 0);
    }

    #[test]
    fn test_colour_map_port_delegates() {
        let map = GreyscaleColourMap::new(18);

        assert_eq!(map.map(EvaluationResult::Escaped(1)), Colour::grey(66));
        assert_eq!(map.map(EvaluationResult::Bounded), Colour::BLACK);
        assert_eq!(map.display_name(), "Greyscale");
    }
}
