//! In-memory backends for unit tests

use std::collections::VecDeque;

use gl::types::GLenum;

use crate::core::config::{ClearColor, ContextConfig, WindowConfig};
use crate::input::{Action, CursorMode, InputEvent, KeyCode, Modifiers};
use crate::render::api::{GraphicsApi, LoaderError, Viewport};
use crate::render::window::{Platform, Surface, WindowError, WindowResult};

/// Guard against a scripted loop that never sees an exit trigger
const MAX_POLLS: usize = 10_000;

/// Graphics API answering from fixed values and recording state changes
#[derive(Debug, Clone)]
pub struct MockGraphics {
    pub major: i32,
    pub minor: i32,
    pub extensions: Vec<String>,
    pub viewport: Option<Viewport>,
    pub viewport_calls: usize,
    pub clear_color: Option<ClearColor>,
    pub clears: usize,
}

impl MockGraphics {
    pub fn version(major: i32, minor: i32) -> Self {
        Self {
            major,
            minor,
            extensions: Vec::new(),
            viewport: None,
            viewport_calls: 0,
            clear_color: None,
            clears: 0,
        }
    }

    pub fn with_extensions(mut self, names: &[&str]) -> Self {
        self.extensions = names.iter().map(|s| (*s).to_string()).collect();
        self
    }
}

impl GraphicsApi for MockGraphics {
    fn loader_version(&self) -> String {
        "mock-loader 1.0".to_string()
    }

    fn get_string(&self, name: GLenum) -> Option<String> {
        let value = match name {
            gl::VENDOR => "Mock Vendor".to_string(),
            gl::RENDERER => "Mock Renderer".to_string(),
            gl::VERSION => format!("{}.{}.0 Mock", self.major, self.minor),
            gl::SHADING_LANGUAGE_VERSION => format!("{}.{}0", self.major, self.minor),
            _ => return None,
        };
        Some(value)
    }

    fn get_integer(&self, name: GLenum) -> i32 {
        match name {
            gl::MAJOR_VERSION => self.major,
            gl::MINOR_VERSION => self.minor,
            gl::NUM_EXTENSIONS => i32::try_from(self.extensions.len()).unwrap_or(i32::MAX),
            _ => 1024,
        }
    }

    fn get_integer_pair(&self, _name: GLenum) -> [i32; 2] {
        [16384, 16384]
    }

    fn get_boolean(&self, _name: GLenum) -> bool {
        false
    }

    fn extension(&self, index: u32) -> Option<String> {
        self.extensions.get(index as usize).cloned()
    }

    fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = Some(viewport);
        self.viewport_calls += 1;
    }

    fn set_clear_color(&mut self, color: ClearColor) {
        self.clear_color = Some(color);
    }

    fn clear_color_buffer(&mut self) {
        self.clears += 1;
    }
}

/// Surface replaying one batch of scripted events per poll
#[derive(Debug)]
pub struct MockSurface {
    pub framebuffer: (i32, i32),
    pub script: VecDeque<Vec<InputEvent>>,
    pub graphics: Option<MockGraphics>,
    pub should_close: bool,
    pub cursor_mode: Option<CursorMode>,
    pub created_with: Option<(WindowConfig, ContextConfig)>,
    pub swaps: usize,
    pub polls: usize,
}

impl MockSurface {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            framebuffer: (width, height),
            script: VecDeque::new(),
            graphics: Some(MockGraphics::version(4, 5)),
            should_close: false,
            cursor_mode: None,
            created_with: None,
            swaps: 0,
            polls: 0,
        }
    }

    pub fn with_script(mut self, script: Vec<Vec<InputEvent>>) -> Self {
        self.script = script.into();
        self
    }

    pub fn with_graphics(mut self, graphics: MockGraphics) -> Self {
        self.graphics = Some(graphics);
        self
    }

    pub fn without_graphics(mut self) -> Self {
        self.graphics = None;
        self
    }
}

impl Surface for MockSurface {
    type Graphics = MockGraphics;

    fn should_close(&self) -> bool {
        self.should_close
    }

    fn set_should_close(&mut self, should_close: bool) {
        self.should_close = should_close;
    }

    fn framebuffer_size(&self) -> (i32, i32) {
        self.framebuffer
    }

    fn set_cursor_mode(&mut self, mode: CursorMode) {
        self.cursor_mode = Some(mode);
    }

    fn swap_buffers(&mut self) {
        self.swaps += 1;
    }

    fn poll_events(&mut self) -> Vec<InputEvent> {
        self.polls += 1;
        assert!(self.polls < MAX_POLLS, "scripted frame loop never terminated");
        self.script.pop_front().unwrap_or_default()
    }

    fn load_graphics(&mut self) -> Result<MockGraphics, LoaderError> {
        self.graphics.take().ok_or(LoaderError::MissingFunction("glGetString"))
    }
}

/// Platform handing out a prepared [`MockSurface`]
pub struct MockPlatform {
    surface: Option<MockSurface>,
}

impl MockPlatform {
    pub fn new(surface: MockSurface) -> Self {
        Self { surface: Some(surface) }
    }

    pub fn failing_creation() -> Self {
        Self { surface: None }
    }
}

impl Platform for MockPlatform {
    type Surface = MockSurface;

    fn version_string(&self) -> String {
        "3.4.0 mock".to_string()
    }

    fn create_surface(self, window: &WindowConfig, context: &ContextConfig) -> WindowResult<MockSurface> {
        let mut surface = self
            .surface
            .ok_or_else(|| WindowError::CreationFailed(context.version.to_string()))?;
        surface.created_with = Some((window.clone(), context.clone()));
        Ok(surface)
    }
}

/// Key press with no modifiers
pub fn key_press(key: KeyCode) -> InputEvent {
    InputEvent::Key {
        key,
        scancode: 0,
        action: Action::Press,
        modifiers: Modifiers::empty(),
    }
}
