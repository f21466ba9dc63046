//! Window management using GLFW
//!
//! Provides window and OpenGL context creation plus event polling for the
//! bootstrap. GLFW events are translated into crate-owned [`InputEvent`]s.

use glfw::Context as _;

use crate::core::config::{ContextConfig, WindowConfig};
use crate::input::{Action, CursorMode, InputEvent, KeyCode, Modifiers, MouseButton};
use crate::render::api::LoaderError;
use crate::render::opengl::context::GlContext;
use crate::render::window::{ErrorHook, Platform, Surface, WindowError, WindowResult};

/// Initialized GLFW library, ready to create one window
pub struct GlfwPlatform {
    glfw: glfw::Glfw,
}

impl GlfwPlatform {
    /// Initialize GLFW, forwarding all of its errors to `hook`
    pub fn init(hook: ErrorHook) -> WindowResult<Self> {
        let glfw = glfw::init(move |error: glfw::Error, description: String| {
            hook.report(error as i32, &description);
        })
        .map_err(|e| WindowError::InitializationFailed(format!("{e:?}")))?;

        Ok(Self { glfw })
    }
}

impl Platform for GlfwPlatform {
    type Surface = GlfwSurface;

    fn version_string(&self) -> String {
        glfw::get_version_string()
    }

    fn create_surface(mut self, window: &WindowConfig, context: &ContextConfig) -> WindowResult<GlfwSurface> {
        use glfw::WindowHint;

        self.glfw.window_hint(WindowHint::ContextVersion(context.version.major, context.version.minor));
        // Modern OpenGL only, no compatibility profile
        self.glfw.window_hint(WindowHint::OpenGlProfile(glfw::OpenGlProfileHint::Core));
        self.glfw.window_hint(WindowHint::OpenGlForwardCompat(context.forward_compatible));
        self.glfw.window_hint(WindowHint::DoubleBuffer(context.double_buffer));
        self.glfw.window_hint(WindowHint::DepthBits(Some(context.depth_bits)));
        self.glfw.window_hint(WindowHint::RedBits(Some(context.color_bits)));
        self.glfw.window_hint(WindowHint::GreenBits(Some(context.color_bits)));
        self.glfw.window_hint(WindowHint::BlueBits(Some(context.color_bits)));
        self.glfw.window_hint(WindowHint::AlphaBits(Some(context.color_bits)));

        let (mut handle, events) = self
            .glfw
            .create_window(window.width, window.height, &window.title, glfw::WindowMode::Windowed)
            .ok_or_else(|| WindowError::CreationFailed(context.version.to_string()))?;

        handle.make_current();

        // Deliver the six event classes through the receiver
        handle.set_framebuffer_size_polling(true);
        handle.set_key_polling(true);
        handle.set_mouse_button_polling(true);
        handle.set_cursor_pos_polling(true);
        handle.set_scroll_polling(true);
        handle.set_close_polling(true);

        Ok(GlfwSurface {
            window: handle,
            events,
            glfw: self.glfw,
        })
    }
}

/// GLFW window with its current OpenGL context
///
/// Field order matters: the window is destroyed before the library handle is
/// released.
pub struct GlfwSurface {
    window: glfw::PWindow,
    events: glfw::GlfwReceiver<(f64, glfw::WindowEvent)>,
    glfw: glfw::Glfw,
}

impl Surface for GlfwSurface {
    type Graphics = GlContext;

    fn should_close(&self) -> bool {
        self.window.should_close()
    }

    fn set_should_close(&mut self, should_close: bool) {
        self.window.set_should_close(should_close);
    }

    fn framebuffer_size(&self) -> (i32, i32) {
        self.window.get_framebuffer_size()
    }

    fn set_cursor_mode(&mut self, mode: CursorMode) {
        let mode = match mode {
            CursorMode::Normal => glfw::CursorMode::Normal,
            CursorMode::Hidden => glfw::CursorMode::Hidden,
            CursorMode::Disabled => glfw::CursorMode::Disabled,
        };
        self.window.set_cursor_mode(mode);
    }

    fn swap_buffers(&mut self) {
        self.window.swap_buffers();
    }

    fn poll_events(&mut self) -> Vec<InputEvent> {
        self.glfw.poll_events();
        glfw::flush_messages(&self.events)
            .filter_map(|(_, event)| translate_event(event))
            .collect()
    }

    fn load_graphics(&mut self) -> Result<GlContext, LoaderError> {
        let window = &mut self.window;
        gl::load_with(|symbol| window.get_proc_address(symbol) as *const _);
        GlContext::verify_loaded()
    }
}

/// Translate a GLFW event, dropping classes the bootstrap does not handle
pub fn translate_event(event: glfw::WindowEvent) -> Option<InputEvent> {
    match event {
        glfw::WindowEvent::Key(key, scancode, action, mods) => Some(InputEvent::Key {
            key: translate_key(key),
            scancode,
            action: translate_action(action),
            modifiers: translate_modifiers(mods),
        }),
        glfw::WindowEvent::MouseButton(button, action, mods) => Some(InputEvent::MouseButton {
            button: translate_mouse_button(button),
            action: translate_action(action),
            modifiers: translate_modifiers(mods),
        }),
        glfw::WindowEvent::CursorPos(x, y) => Some(InputEvent::CursorPosition { x, y }),
        glfw::WindowEvent::Scroll(x_offset, y_offset) => Some(InputEvent::Scroll { x_offset, y_offset }),
        glfw::WindowEvent::FramebufferSize(width, height) => {
            Some(InputEvent::FramebufferResize { width, height })
        }
        glfw::WindowEvent::Close => Some(InputEvent::CloseRequested),
        _ => None,
    }
}

fn translate_key(key: glfw::Key) -> KeyCode {
    match key {
        glfw::Key::Escape => KeyCode::Escape,
        glfw::Key::Enter => KeyCode::Enter,
        glfw::Key::Space => KeyCode::Space,
        glfw::Key::Q => KeyCode::Q,
        glfw::Key::F4 => KeyCode::F4,
        other => KeyCode::Other(other as i32),
    }
}

fn translate_action(action: glfw::Action) -> Action {
    match action {
        glfw::Action::Press => Action::Press,
        glfw::Action::Repeat => Action::Repeat,
        glfw::Action::Release => Action::Release,
    }
}

fn translate_mouse_button(button: glfw::MouseButton) -> MouseButton {
    match button {
        glfw::MouseButton::Button1 => MouseButton::Left,
        glfw::MouseButton::Button2 => MouseButton::Right,
        glfw::MouseButton::Button3 => MouseButton::Middle,
        other => MouseButton::Other(other as u8),
    }
}

fn translate_modifiers(mods: glfw::Modifiers) -> Modifiers {
    let mut out = Modifiers::empty();
    out.set(Modifiers::SHIFT, mods.contains(glfw::Modifiers::Shift));
    out.set(Modifiers::CONTROL, mods.contains(glfw::Modifiers::Control));
    out.set(Modifiers::ALT, mods.contains(glfw::Modifiers::Alt));
    out.set(Modifiers::SUPER, mods.contains(glfw::Modifiers::Super));
    out
}
