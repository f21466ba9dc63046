//! Public rendering API
//!
//! The graphics boundary trait and the small value types that cross it.

pub mod graphics_api;

// Re-export commonly used types
pub use graphics_api::{GraphicsApi, LoaderError, Viewport};
