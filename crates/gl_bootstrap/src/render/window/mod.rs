//! Window management subsystem
//!
//! - **`backend`**: the [`Platform`] and [`Surface`] traits the bootstrap is written against
//! - **`error_hook`**: forwarding of windowing library errors to the debug log
//! - The GLFW implementation lives in `../opengl/window.rs`

pub mod backend;
pub mod error_hook;

// Re-export the main types for convenience
pub use backend::{Platform, Surface, WindowError, WindowResult};
pub use error_hook::ErrorHook;
