use std::sync::Arc;

use crate::controllers::interactive::ports::presenter::InteractiveControllerPresenterPort;

pub trait GuiPresenterPort {
    /// Draws the newest frame received from the controller, if any, and
    /// shows the framebuffer.
    fn render(&mut self) -> Result<(), pixels::Error>;
    fn share_adapter(&self) -> Arc<dyn InteractiveControllerPresenterPort>;
    fn resize(&mut self, width: u32, height: u32);
}
