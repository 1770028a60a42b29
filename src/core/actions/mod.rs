pub mod apply_selection;
pub mod render_pass;
