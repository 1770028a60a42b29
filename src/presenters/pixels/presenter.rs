use std::sync::Arc;

use pixels::{Pixels, SurfaceTexture};
use winit::event_loop::EventLoopProxy;
use winit::window::Window;

use crate::adapters::pixel_format::{copy_rgb_to_rgba, fill_rgba_black};
use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::events::render_event::RenderEvent;
use crate::controllers::interactive::ports::presenter::InteractiveControllerPresenterPort;
use crate::core::actions::render_pass::ports::surface::Surface;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::events::GuiEvent;
use crate::presenters::pixels::adapter::PixelsAdapter;

pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    adapter: Arc<PixelsAdapter>,
    width: u32,
    height: u32,
    has_frame: bool,
    last_presented_generation: u64,
}

impl PixelsPresenter {
    pub fn new(
        window: &'static Window,
        event_loop_proxy: EventLoopProxy<GuiEvent>,
    ) -> Result<Self, pixels::Error> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);
        let pixels = Pixels::new(size.width, size.height, surface_texture)?;

        Ok(Self {
            pixels,
            adapter: Arc::new(PixelsAdapter::new(event_loop_proxy)),
            width: size.width,
            height: size.height,
            has_frame: false,
            last_presented_generation: 0,
        })
    }

    fn maybe_draw_frame(&mut self) {
        let Some(event) = self.adapter.render_event() else {
            return;
        };

        match event {
            RenderEvent::Frame(frame) => {
                let viewport = frame.pixel_buffer.viewport();

                // frames rendered for a previous window size are dropped
                if frame.generation > self.last_presented_generation
                    && viewport.width() == self.width
                    && viewport.height() == self.height
                {
                    self.copy_frame(&frame);
                }
            }
            RenderEvent::Error(error) => {
                log::error!("{}", error);
            }
        }
    }

    fn copy_frame(&mut self, frame: &FrameData) {
        match copy_rgb_to_rgba(frame.pixel_buffer.buffer(), self.pixels.frame_mut()) {
            Ok(()) => {
                self.has_frame = true;
                self.last_presented_generation = frame.generation;
                log::debug!(
                    "presented frame {} after {} ms",
                    frame.generation,
                    frame.render_duration.as_millis()
                );
            }
            Err(err) => log::error!("cannot present frame {}: {}", frame.generation, err),
        }
    }
}

impl GuiPresenterPort for PixelsPresenter {
    fn render(&mut self) -> Result<(), pixels::Error> {
        if self.width == 0 || self.height == 0 {
            return Ok(());
        }

        self.maybe_draw_frame();

        if !self.has_frame {
            fill_rgba_black(self.pixels.frame_mut());
        }

        self.pixels.render()
    }

    fn share_adapter(&self) -> Arc<dyn InteractiveControllerPresenterPort> {
        Arc::clone(&self.adapter) as Arc<dyn InteractiveControllerPresenterPort>
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.has_frame = false;

        if let Err(err) = self.pixels.resize_surface(width, height) {
            log::error!("failed to resize surface to {}x{}: {}", width, height, err);
        }

        if let Err(err) = self.pixels.resize_buffer(width, height) {
            log::error!("failed to resize buffer to {}x{}: {}", width, height, err);
        }
    }
}
