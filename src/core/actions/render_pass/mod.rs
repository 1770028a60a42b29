pub mod cancellation;
pub mod ports;
#[allow(clippy::module_inception)]
pub mod render_pass;
pub mod render_pass_parallel_rayon;
