//! Input events and the handler interface
//!
//! The windowing backend translates its native events into [`InputEvent`]s and
//! the frame loop routes each one to an [`EventHandler`] with [`dispatch`].
//! Dispatch is synchronous: handlers run while pending events are drained.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

/// Key codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyCode {
    /// Escape key
    Escape,
    /// Enter key
    Enter,
    /// Space key
    Space,
    /// Q key
    Q,
    /// F4 function key
    F4,
    /// Any other key, carrying the platform key code
    Other(i32),
}

/// What happened to a key or button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Key or button went down
    Press,
    /// Key held down long enough to repeat
    Repeat,
    /// Key or button went up
    Release,
}

/// Mouse buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Left mouse button
    Left,
    /// Right mouse button
    Right,
    /// Middle mouse button
    Middle,
    /// Any other button, by index
    Other(u8),
}

bitflags! {
    /// Modifier keys held during a key or button event
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        /// Either shift key
        const SHIFT = 0b0001;
        /// Either control key
        const CONTROL = 0b0010;
        /// Either alt key
        const ALT = 0b0100;
        /// Either super (logo) key
        const SUPER = 0b1000;
    }
}

/// Cursor behavior over the window's client area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CursorMode {
    /// Visible and unconstrained
    #[default]
    Normal,
    /// Hidden while over the client area
    Hidden,
    /// Hidden and locked to the window
    Disabled,
}

/// Events delivered by the windowing backend
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Keyboard key event
    Key {
        /// Key that changed
        key: KeyCode,
        /// Platform-specific scancode
        scancode: i32,
        /// Press, repeat or release
        action: Action,
        /// Modifier keys held down
        modifiers: Modifiers,
    },

    /// Mouse button event
    MouseButton {
        /// Button that changed
        button: MouseButton,
        /// Press or release
        action: Action,
        /// Modifier keys held down
        modifiers: Modifiers,
    },

    /// Cursor moved, relative to the top-left corner of the client area
    CursorPosition {
        /// New X coordinate
        x: f64,
        /// New Y coordinate
        y: f64,
    },

    /// Scroll wheel or touchpad scroll
    Scroll {
        /// Horizontal offset
        x_offset: f64,
        /// Vertical offset
        y_offset: f64,
    },

    /// Framebuffer resized, in pixels
    FramebufferResize {
        /// New width
        width: i32,
        /// New height
        height: i32,
    },

    /// Close widget clicked or the platform close shortcut fired
    CloseRequested,
}

/// One handler per event class
///
/// Implemented by the application context owned by the frame loop. Handlers
/// are never called directly by application code, only through [`dispatch`]
/// (plus the one explicit resize at bootstrap).
pub trait EventHandler {
    /// Keyboard key pressed, repeated or released
    fn on_key(&mut self, key: KeyCode, scancode: i32, action: Action, modifiers: Modifiers);

    /// Mouse button pressed or released
    fn on_mouse_button(&mut self, button: MouseButton, action: Action, modifiers: Modifiers);

    /// Cursor moved inside the client area
    fn on_cursor_position(&mut self, x: f64, y: f64);

    /// Scroll offsets
    fn on_scroll(&mut self, x_offset: f64, y_offset: f64);

    /// Framebuffer resized
    fn on_framebuffer_resize(&mut self, width: i32, height: i32);

    /// Close requested by the window system
    fn on_close_requested(&mut self);
}

/// Route one event to the matching handler method
pub fn dispatch<H: EventHandler + ?Sized>(handler: &mut H, event: InputEvent) {
    match event {
        InputEvent::Key { key, scancode, action, modifiers } => {
            handler.on_key(key, scancode, action, modifiers);
        }
        InputEvent::MouseButton { button, action, modifiers } => {
            handler.on_mouse_button(button, action, modifiers);
        }
        InputEvent::CursorPosition { x, y } => handler.on_cursor_position(x, y),
        InputEvent::Scroll { x_offset, y_offset } => handler.on_scroll(x_offset, y_offset),
        InputEvent::FramebufferResize { width, height } => {
            handler.on_framebuffer_resize(width, height);
        }
        InputEvent::CloseRequested => handler.on_close_requested(),
    }
}

/// Whether a key event asks the application to quit
///
/// True for a press of `exit_key`, or a press of F4 with Alt held.
pub fn is_exit_trigger(exit_key: KeyCode, key: KeyCode, action: Action, modifiers: Modifiers) -> bool {
    if action != Action::Press {
        return false;
    }
    key == exit_key || (key == KeyCode::F4 && modifiers.contains(Modifiers::ALT))
}
