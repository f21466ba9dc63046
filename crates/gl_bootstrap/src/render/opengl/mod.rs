//! OpenGL backend over GLFW
//!
//! - **`window`**: GLFW platform and surface, event translation
//! - **`context`**: the loaded GL entry points behind [`GraphicsApi`](crate::render::api::GraphicsApi)

pub mod context;
pub mod window;

pub use context::GlContext;
pub use window::{GlfwPlatform, GlfwSurface};
