//! Application context and its input handlers

use crate::core::config::RenderConfig;
use crate::input::{is_exit_trigger, Action, EventHandler, KeyCode, Modifiers, MouseButton};
use crate::render::api::{GraphicsApi, Viewport};

/// State the input handlers act on
///
/// Holds the graphics API, the termination flag and the current viewport.
/// The frame loop owns it and routes every event here, so this is the only
/// place the termination flag is set.
pub struct AppContext<G: GraphicsApi> {
    graphics: G,
    exit_key: KeyCode,
    viewport: Viewport,
    should_terminate: bool,
}

impl<G: GraphicsApi> AppContext<G> {
    /// Create the context and apply the clear color
    pub fn new(mut graphics: G, render: &RenderConfig) -> Self {
        graphics.set_clear_color(render.clear_color);
        Self {
            graphics,
            exit_key: render.exit_key,
            viewport: Viewport::default(),
            should_terminate: false,
        }
    }

    /// Whether an exit trigger has been observed
    pub fn should_terminate(&self) -> bool {
        self.should_terminate
    }

    /// Viewport set by the last resize
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// The graphics API
    pub fn graphics(&self) -> &G {
        &self.graphics
    }

    /// Paint the color buffer with the clear color
    pub fn draw(&mut self) {
        self.graphics.clear_color_buffer();
    }
}

impl<G: GraphicsApi> EventHandler for AppContext<G> {
    fn on_key(&mut self, key: KeyCode, scancode: i32, action: Action, modifiers: Modifiers) {
        match action {
            Action::Press => log::debug!("Key pressed: {key:?} (scancode {scancode})"),
            Action::Repeat => log::debug!("Key repeatedly pressed: {key:?}"),
            Action::Release => log::debug!("Key released: {key:?}"),
        }

        if is_exit_trigger(self.exit_key, key, action, modifiers) {
            log::info!("Exit requested with {key:?}");
            self.should_terminate = true;
        }
    }

    fn on_mouse_button(&mut self, button: MouseButton, action: Action, _modifiers: Modifiers) {
        let which = match button {
            MouseButton::Left => "Left",
            MouseButton::Right => "Right",
            MouseButton::Middle => "Middle",
            MouseButton::Other(_) => "Other",
        };
        let what = if action == Action::Release { "released" } else { "pressed" };
        log::debug!("{which} mouse button {what}");
    }

    fn on_cursor_position(&mut self, x: f64, y: f64) {
        log::trace!("Mouse cursor position: ({x}, {y})");
    }

    fn on_scroll(&mut self, x_offset: f64, y_offset: f64) {
        log::debug!("Mouse scroll wheel offset: ({x_offset}, {y_offset})");
    }

    fn on_framebuffer_resize(&mut self, width: i32, height: i32) {
        // Use the entire framebuffer as the drawing region
        self.viewport = Viewport::full(width, height);
        self.graphics.set_viewport(self.viewport);
    }

    fn on_close_requested(&mut self) {
        log::info!("Window close requested");
        self.should_terminate = true;
    }
}
