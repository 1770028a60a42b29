use std::error::Error;
use std::fmt;

use rayon::prelude::*;

use crate::core::actions::render_pass::cancellation::{
    CANCEL_CHECK_INTERVAL_PIXELS, CancelToken, Cancelled, NeverCancel,
};
use crate::core::actions::render_pass::ports::colour_map::ColourMap;
use crate::core::actions::render_pass::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::actions::render_pass::ports::surface::SurfaceError;
use crate::core::actions::render_pass::render_pass::RenderStats;
use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use crate::core::util::plan_rows::{RowPlan, plan_rows};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderPassError {
    Cancelled(Cancelled),
    Surface(SurfaceError),
}

impl fmt::Display for RenderPassError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cancelled(cancelled) => write!(f, "{}", cancelled),
            Self::Surface(err) => write!(f, "surface error: {}", err),
        }
    }
}

impl Error for RenderPassError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Cancelled(cancelled) => Some(cancelled),
            Self::Surface(err) => Some(err),
        }
    }
}

impl From<Cancelled> for RenderPassError {
    fn from(cancelled: Cancelled) -> Self {
        Self::Cancelled(cancelled)
    }
}

impl From<SurfaceError> for RenderPassError {
    fn from(err: SurfaceError) -> Self {
        Self::Surface(err)
    }
}

/// A complete frame produced off the host surface.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedFrame {
    pub pixel_buffer: PixelBuffer,
    pub stats: RenderStats,
}

/// Renders a whole viewport on the rayon pool.
///
/// Produces the same bytes as the serial pass. For a pass that can be
/// abandoned, use [`render_pass_parallel_rayon_cancelable`].
pub fn render_pass_parallel_rayon<Alg, CMap>(
    viewport: Viewport,
    algorithm: &Alg,
    colour_map: &CMap,
) -> Result<RenderedFrame, SurfaceError>
where
    Alg: FractalAlgorithm + Sync,
    CMap: ColourMap<Alg::Success> + Sync,
{
    render_pass_parallel_rayon_cancelable(viewport, algorithm, colour_map, &NeverCancel).map_err(
        |err| match err {
            RenderPassError::Surface(surface_err) => surface_err,
            RenderPassError::Cancelled(_) => {
                unreachable!("NeverCancel token should never signal cancellation")
            }
        },
    )
}

/// Renders a whole viewport on the rayon pool, polling `cancel` at the start
/// of each row and every [`CANCEL_CHECK_INTERVAL_PIXELS`] pixels.
///
/// A cancelled pass returns [`RenderPassError::Cancelled`] and no frame.
pub fn render_pass_parallel_rayon_cancelable<Alg, CMap, C>(
    viewport: Viewport,
    algorithm: &Alg,
    colour_map: &CMap,
    cancel: &C,
) -> Result<RenderedFrame, RenderPassError>
where
    Alg: FractalAlgorithm + Sync,
    CMap: ColourMap<Alg::Success> + Sync,
    C: CancelToken,
{
    let x_range = viewport.x_range();
    let row_width = viewport.width() as usize;

    let rows: Result<Vec<(RowPlan, Vec<Colour>)>, Cancelled> =
        plan_rows(viewport, algorithm.mirrors_vertically())
            .into_par_iter()
            .map(|plan| {
                let mut row = Vec::with_capacity(row_width);

                for (i, x) in x_range.clone().enumerate() {
                    if i % CANCEL_CHECK_INTERVAL_PIXELS == 0 && cancel.is_cancelled() {
                        return Err(Cancelled);
                    }

                    row.push(colour_map.map(algorithm.compute(Point { x, y: plan.y })));
                }

                Ok((plan, row))
            })
            .collect();

    let mut pixel_buffer = PixelBuffer::new(viewport);
    let mut stats = RenderStats::default();

    for (plan, row) in rows? {
        let row_start = Point {
            x: x_range.start,
            y: plan.y,
        };
        pixel_buffer.write_row(viewport.to_top_left(row_start), &row)?;
        stats.evaluated += row.len() as u64;

        if let Some(mirror) = plan.mirror {
            let mirror_start = Point { y: mirror, ..row_start };
            pixel_buffer.write_row(viewport.to_top_left(mirror_start), &row)?;
            stats.mirrored += row.len() as u64;
        }
    }

    Ok(RenderedFrame {
        pixel_buffer,
        stats,
    })
}
