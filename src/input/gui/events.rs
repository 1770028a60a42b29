/// User events posted into the winit event loop.
#[derive(Debug, Clone)]
pub enum GuiEvent {
    /// A render event is waiting in the presenter adapter.
    ///
    /// Does not redraw by itself; the loop requests a redraw on receipt.
    Wake,
}
