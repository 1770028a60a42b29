//! Windowed explorer: winit for the window and input, pixels for the
//! framebuffer. A left click applies the zoom policy at the cursor, `R`
//! resets the view.

pub mod app;
pub mod commands;
pub mod events;
