//! # GL Bootstrap
//!
//! Minimal OpenGL 4.5 application bootstrap over GLFW.
//!
//! ## Features
//!
//! - **Debug Log**: flat, append-only text trace of the bootstrap
//! - **Context Creation**: GL 4.5 core, double-buffered, 24-bit depth, RGBA8
//! - **Capability Report**: fixed table of context parameters plus extensions
//! - **Input Handling**: one handler per event class, Escape/close/Alt+F4 to quit
//! - **Frame Loop**: clear to a constant color, swap, drain events
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use gl_bootstrap::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = BootstrapConfig::default();
//!     let log = DebugLog::new(&config.log.file);
//!     log.create()?;
//!     bootstrap::run(GlfwPlatform::init, &config, &log)?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod foundation;
pub mod config;
pub mod input;
pub mod render;
pub mod bootstrap;

mod application;
mod engine;

#[cfg(test)]
mod testing;

pub use application::AppContext;
pub use bootstrap::BootstrapError;
pub use engine::{FrameLoop, LoopState};

/// Common imports for crate users
pub mod prelude {
    pub use crate::{
        bootstrap::{self, BootstrapError},
        core::config::{BootstrapConfig, ClearColor, Config, ConfigError, GlVersion},
        foundation::logging::{DebugLog, LogError},
        input::{CursorMode, KeyCode},
        render::{GlfwPlatform, GraphicsApi, Platform, Surface},
        AppContext, FrameLoop, LoopState,
    };
}
