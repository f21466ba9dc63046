//! Graphics boundary trait
//!
//! The fixed subset of the GL API the bootstrap touches: parameter queries,
//! extension enumeration, viewport and clear state. The OpenGL backend
//! implements it on top of the loaded function pointers.

use gl::types::GLenum;
use thiserror::Error;

use crate::core::config::ClearColor;

/// Rectangle of the framebuffer that rendering maps to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Viewport {
    /// Left edge
    pub x: i32,
    /// Bottom edge
    pub y: i32,
    /// Width in pixels
    pub width: i32,
    /// Height in pixels
    pub height: i32,
}

impl Viewport {
    /// Viewport covering a whole framebuffer of the given size
    pub const fn full(width: i32, height: i32) -> Self {
        Self { x: 0, y: 0, width, height }
    }
}

/// Function loader errors
#[derive(Error, Debug)]
pub enum LoaderError {
    /// An entry point could not be resolved
    #[error("missing entry point {0}")]
    MissingFunction(&'static str),
}

/// Graphics API subset used by the bootstrap
pub trait GraphicsApi {
    /// Identifier of the function loader
    fn loader_version(&self) -> String;

    /// String-valued parameter, `None` if the driver returned nothing
    fn get_string(&self, name: GLenum) -> Option<String>;

    /// Single integer parameter
    fn get_integer(&self, name: GLenum) -> i32;

    /// Two-integer parameter
    fn get_integer_pair(&self, name: GLenum) -> [i32; 2];

    /// Boolean parameter
    fn get_boolean(&self, name: GLenum) -> bool;

    /// Number of supported extensions
    fn extension_count(&self) -> u32 {
        u32::try_from(self.get_integer(gl::NUM_EXTENSIONS)).unwrap_or(0)
    }

    /// Name of the extension at `index`, counting from zero
    fn extension(&self, index: u32) -> Option<String>;

    /// Set the viewport transform
    fn set_viewport(&mut self, viewport: Viewport);

    /// Set the color used by [`GraphicsApi::clear_color_buffer`]
    fn set_clear_color(&mut self, color: ClearColor);

    /// Clear the color buffer
    fn clear_color_buffer(&mut self);
}
