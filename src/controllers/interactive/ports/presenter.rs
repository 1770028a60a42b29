use crate::controllers::interactive::events::render_event::RenderEvent;

/// Receives the outcome of each render request that was not superseded.
///
/// Called from the controller's worker thread.
pub trait InteractiveControllerPresenterPort: Send + Sync {
    fn present(&self, event: RenderEvent);
}
