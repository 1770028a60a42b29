use std::time::Duration;

use crate::core::actions::render_pass::render_pass::RenderStats;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::view_state::ViewState;

#[derive(Debug)]
pub struct FrameData {
    pub generation: u64,
    /// View the frame was rendered from.
    pub view: ViewState,
    pub pixel_buffer: PixelBuffer,
    pub stats: RenderStats,
    pub render_duration: Duration,
}
