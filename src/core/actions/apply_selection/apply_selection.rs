use crate::core::actions::apply_selection::zoom_policy::ZoomPolicy;
use crate::core::data::point::Point;
use crate::core::data::view_state::{ViewState, ViewStateError};
use crate::core::data::viewport::Viewport;
use crate::core::transform::view_transform::ViewTransform;

/// A point picked by the user, in device pixels from the viewport's top-left.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SelectionEvent {
    pub position: Point,
}

impl SelectionEvent {
    #[must_use]
    pub fn at(x: i32, y: i32) -> Self {
        Self {
            position: Point { x, y },
        }
    }
}

/// Computes the view that follows a selection.
///
/// The new centre is read through the transform of the current view, before
/// the scale changes. On error the caller keeps its current view.
pub fn apply_selection(
    view: &ViewState,
    viewport: Viewport,
    event: SelectionEvent,
    policy: &ZoomPolicy,
) -> Result<ViewState, ViewStateError> {
    let mut next = *view;

    if policy.recentre() {
        let offset = viewport.to_centred(event.position);
        let centre = ViewTransform::new(view, viewport).pixel_to_complex(offset);
        next.set_centre(centre)?;
    }

    next.set_scale(view.scale() * policy.zoom_factor())?;
    next.set_max_iterations(
        view.max_iterations()
            .saturating_add(policy.iteration_increment()),
    )?;

    log::info!(
        "selection at ({}, {}) moved view to centre ({}, {}), scale {}, {} iterations",
        event.position.x,
        event.position.y,
        next.centre_real(),
        next.centre_imag(),
        next.scale(),
        next.max_iterations()
    );

    Ok(next)
}
