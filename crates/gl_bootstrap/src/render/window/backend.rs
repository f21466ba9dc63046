//! Backend-agnostic windowing traits
//!
//! [`Platform`] is an initialized windowing subsystem that can produce one
//! [`Surface`]: a window with its current GL context. The bootstrap and frame
//! loop only see these traits, so tests drive them with in-memory backends.

use thiserror::Error;

use crate::core::config::{ContextConfig, WindowConfig};
use crate::input::{CursorMode, InputEvent};
use crate::render::api::{GraphicsApi, LoaderError};

/// Window management errors
#[derive(Error, Debug)]
pub enum WindowError {
    /// The windowing subsystem could not start
    #[error("windowing subsystem initialization failed: {0}")]
    InitializationFailed(String),

    /// The window or its GL context could not be created
    #[error("unable to create an OpenGL {0} context")]
    CreationFailed(String),
}

/// Result type for window operations
pub type WindowResult<T> = Result<T, WindowError>;

/// An initialized windowing subsystem
pub trait Platform: Sized {
    /// Window plus context produced by this platform
    type Surface: Surface;

    /// Version string of the windowing library
    fn version_string(&self) -> String;

    /// Create the window and its context with the declared requirements
    ///
    /// On success the context is current on the calling thread and all six
    /// event classes are delivered through [`Surface::poll_events`]. The
    /// platform moves into the surface, which releases the subsystem when
    /// dropped.
    fn create_surface(self, window: &WindowConfig, context: &ContextConfig) -> WindowResult<Self::Surface>;
}

/// Window plus GL context, owned by the frame loop
pub trait Surface {
    /// Graphics API loaded from this surface's context
    type Graphics: GraphicsApi;

    /// Whether the window system asked the window to close
    fn should_close(&self) -> bool;

    /// Set or clear the window's close request
    fn set_should_close(&mut self, should_close: bool);

    /// Framebuffer size in pixels
    fn framebuffer_size(&self) -> (i32, i32);

    /// Change how the cursor behaves over the window
    fn set_cursor_mode(&mut self, mode: CursorMode);

    /// Present the back buffer
    fn swap_buffers(&mut self);

    /// Process pending window system events and return them in arrival order
    fn poll_events(&mut self) -> Vec<InputEvent>;

    /// Resolve GL entry points for the current context
    fn load_graphics(&mut self) -> Result<Self::Graphics, LoaderError>;
}
