use winit::error::EventLoopError;
use winit::event::{ElementState, Event, MouseButton, WindowEvent};
use winit::event_loop::EventLoop;
use winit::keyboard::Key;
use winit::window::Window;

use crate::controllers::interactive::InteractiveController;
use crate::core::data::viewport::Viewport;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::app::state::GuiAppState;
use crate::input::gui::events::GuiEvent;

pub struct GuiApp<T: GuiPresenterPort> {
    window: &'static Window,
    width: u32,
    height: u32,
    presenter: T,
    controller: InteractiveController,
    ui_state: GuiAppState,
}

impl<T: GuiPresenterPort> GuiApp<T> {
    pub fn new(
        window: &'static Window,
        presenter: T,
        controller: InteractiveController,
        ui_state: GuiAppState,
    ) -> Self {
        let size = window.inner_size();

        Self {
            window,
            width: size.width,
            height: size.height,
            presenter,
            controller,
            ui_state,
        }
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.width, self.height)
    }

    pub fn render(&mut self) -> Result<(), pixels::Error> {
        self.presenter.render()
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;

        if width == 0 || height == 0 {
            return;
        }

        self.presenter.resize(width, height);
    }

    pub fn submit_render_request_if_needed(&mut self) {
        let viewport = self.viewport();

        if viewport.is_empty() {
            return;
        }

        let request = self.ui_state.build_render_request(viewport);

        if self.ui_state.should_submit(&request) {
            let generation = self.controller.submit_request(request);
            self.ui_state.record_submission(request, generation);
            self.window.set_title(&self.ui_state.title());
        }
    }

    /// Feeds pointer and keyboard input to the UI state. Returns whether the
    /// view changed and needs a new render.
    pub fn handle_input(&mut self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.ui_state.track_cursor(position.x, position.y);
                false
            }
            WindowEvent::CursorLeft { .. } => {
                self.ui_state.forget_cursor();
                false
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => self.ui_state.select_at_cursor(self.viewport()),
            WindowEvent::KeyboardInput { event, .. } if event.state == ElementState::Pressed => {
                match &event.logical_key {
                    Key::Character(c) if c.as_str().eq_ignore_ascii_case("r") => {
                        self.ui_state.reset_view();
                        true
                    }
                    _ => false,
                }
            }
            _ => false,
        }
    }

    pub fn run(mut self, event_loop: EventLoop<GuiEvent>) -> Result<(), EventLoopError> {
        let window = self.window;
        let mut redraw_pending = true;

        event_loop.run(move |event, elwt| match event {
            Event::UserEvent(GuiEvent::Wake) => {
                redraw_pending = true;
            }
            Event::WindowEvent {
                ref event,
                window_id,
            } if window_id == window.id() => match event {
                WindowEvent::CloseRequested => {
                    self.controller.shutdown();
                    elwt.exit();
                }
                WindowEvent::RedrawRequested => {
                    redraw_pending = false;

                    self.submit_render_request_if_needed();

                    if let Err(e) = self.render() {
                        log::error!("render error: {e}");
                        elwt.exit();
                    }
                }
                WindowEvent::Resized(size) => {
                    self.resize(size.width, size.height);
                    redraw_pending = true;
                }
                WindowEvent::ScaleFactorChanged { .. } => {
                    let size = window.inner_size();
                    self.resize(size.width, size.height);
                    redraw_pending = true;
                }
                other => {
                    if self.handle_input(other) {
                        redraw_pending = true;
                    }
                }
            },
            Event::AboutToWait => {
                if redraw_pending {
                    window.request_redraw();
                }
            }
            _ => {}
        })
    }
}
