//! Rendering subsystem
//!
//! - **`api`**: the graphics boundary trait
//! - **`window`**: windowing traits and the error hook
//! - **`opengl`**: GLFW + OpenGL implementation
//! - **`capabilities`**: parameter table and capability report

pub mod api;
pub mod capabilities;
pub mod opengl;
pub mod window;

pub use api::{GraphicsApi, Viewport};
pub use opengl::{GlContext, GlfwPlatform, GlfwSurface};
pub use window::{ErrorHook, Platform, Surface, WindowError};
