use crate::core::actions::render_pass::ports::colour_map::ColourMap;
use crate::core::actions::render_pass::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::actions::render_pass::ports::surface::{Surface, SurfaceError};
use crate::core::data::point::Point;
use crate::core::data::view_state::ViewState;
use crate::core::fractals::escape_time::algorithm::EscapeTimeAlgorithm;
use crate::core::fractals::escape_time::colour_map::GreyscaleColourMap;
use crate::core::util::plan_rows::plan_rows;

/// Pixel counts of a finished pass.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct RenderStats {
    /// Pixels run through the algorithm.
    pub evaluated: u64,
    /// Pixels painted from a mirrored row without evaluation.
    pub mirrored: u64,
}

impl RenderStats {
    #[must_use]
    pub fn painted(&self) -> u64 {
        self.evaluated + self.mirrored
    }
}

/// Paints the escape-time image of `view` over the whole surface.
pub fn render_pass<S>(view: &ViewState, surface: &mut S) -> Result<RenderStats, SurfaceError>
where
    S: Surface + ?Sized,
{
    let viewport = surface.viewport();
    let algorithm = EscapeTimeAlgorithm::new(view, viewport);
    let colour_map = GreyscaleColourMap::new(view.max_iterations());

    render_pass_with(&algorithm, &colour_map, surface)
}

/// Serial pass over every pixel of the surface, one `set_pixel` per pixel.
///
/// Stops at the first surface error; pixels painted before it stay painted.
pub fn render_pass_with<Alg, CMap, S>(
    algorithm: &Alg,
    colour_map: &CMap,
    surface: &mut S,
) -> Result<RenderStats, SurfaceError>
where
    Alg: FractalAlgorithm,
    CMap: ColourMap<Alg::Success>,
    S: Surface + ?Sized,
{
    let viewport = surface.viewport();
    let mut stats = RenderStats::default();

    for plan in plan_rows(viewport, algorithm.mirrors_vertically()) {
        for x in viewport.x_range() {
            let colour = colour_map.map(algorithm.compute(Point { x, y: plan.y }));

            surface.set_pixel(viewport.to_top_left(Point { x, y: plan.y }), colour)?;
            stats.evaluated += 1;

            if let Some(mirror) = plan.mirror {
                surface.set_pixel(viewport.to_top_left(Point { x, y: mirror }), colour)?;
                stats.mirrored += 1;
            }
        }
    }

    log::debug!(
        "serial pass over {}x{} evaluated {} pixels, mirrored {}",
        viewport.width(),
        viewport.height(),
        stats.evaluated,
        stats.mirrored
    );

    Ok(stats)
}
