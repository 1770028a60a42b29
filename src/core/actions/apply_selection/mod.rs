#[allow(clippy::module_inception)]
pub mod apply_selection;
pub mod zoom_policy;
