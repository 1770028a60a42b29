//! Background rendering for interactive exploration.
//!
//! Requests go in through [`InteractiveController::submit_request`], finished
//! frames come out through an [`InteractiveControllerPresenterPort`]. Only the
//! newest request is ever presented; older passes are cancelled.

mod controller;
pub mod data;
pub mod errors;
pub mod events;
pub mod ports;

pub use controller::InteractiveController;
pub use data::frame_data::FrameData;
pub use data::render_request::RenderRequest;
pub use errors::render_error::RenderError;
pub use events::render_event::RenderEvent;
pub use ports::presenter::InteractiveControllerPresenterPort;
