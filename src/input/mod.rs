//! Input adapters that turn user interaction into render requests.

#[cfg(feature = "gui")]
pub mod gui;
