//! Bootstrap sequence
//!
//! Context creation, loader initialization, capability report, then the frame
//! loop. Every fatal condition comes back as a [`BootstrapError`]; [`run`]
//! records it once in the debug log and hands it to the caller, which decides
//! the process exit status. Whatever was acquired before the failure is
//! released when it goes out of scope.

use std::process::ExitCode;

use thiserror::Error;

use crate::core::config::{BootstrapConfig, ConfigError, GlVersion};
use crate::debug_log;
use crate::engine::FrameLoop;
use crate::foundation::logging::DebugLog;
use crate::render::api::{GraphicsApi, LoaderError};
use crate::render::capabilities;
use crate::render::window::{ErrorHook, Platform, Surface, WindowError, WindowResult};

/// Fatal bootstrap errors
#[derive(Error, Debug)]
pub enum BootstrapError {
    /// Settings are out of range or weaker than the required context
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// Windowing subsystem or context creation failed
    #[error(transparent)]
    Window(#[from] WindowError),

    /// GL entry points could not be loaded
    #[error("unable to initialize GL loader: {0}")]
    Loader(#[from] LoaderError),

    /// The driver's GL version is too old
    #[error("system doesn't support GL {required} API (driver reports {found})")]
    UnsupportedVersion {
        /// Version the configuration asks for
        required: GlVersion,
        /// Version the active context reports
        found: GlVersion,
    },
}

/// Start the windowing subsystem and create the window with its context
///
/// `init` receives the error hook that forwards windowing errors to `log`.
/// On return the context is current, all event classes are enabled and the
/// configured cursor mode is set.
pub fn create_context<P, F>(init: F, config: &BootstrapConfig, log: &DebugLog) -> Result<P::Surface, BootstrapError>
where
    P: Platform,
    F: FnOnce(ErrorHook) -> WindowResult<P>,
{
    log::info!("Initializing windowing subsystem...");
    let platform = init(ErrorHook::new(log.clone()))?;

    let version = platform.version_string();
    log::info!("GLFW {version}");
    debug_log!(log, "GLFW Version:", version);

    log::info!(
        "Creating {}x{} window with an OpenGL {} core context...",
        config.window.width,
        config.window.height,
        config.context.version
    );
    let mut surface = platform.create_surface(&config.window, &config.context)?;
    surface.set_cursor_mode(config.window.cursor_mode);

    Ok(surface)
}

/// Load GL entry points and check the driver supports `required`
pub fn init_loader<S: Surface>(surface: &mut S, log: &DebugLog, required: GlVersion) -> Result<S::Graphics, BootstrapError> {
    let graphics = match surface.load_graphics() {
        Ok(graphics) => graphics,
        Err(e) => {
            debug_log!(log, "ERROR: Unable to initialize GL loader", e);
            return Err(e.into());
        }
    };
    debug_log!(log, "GL loader:", graphics.loader_version());

    let found = driver_version(&graphics);
    if found >= required {
        debug_log!(log, "Graphics driver supports OpenGL version", required);
        Ok(graphics)
    } else {
        debug_log!(log, "ERROR: System doesn't support GL", required, "API");
        Err(BootstrapError::UnsupportedVersion { required, found })
    }
}

/// GL version reported by the active context
pub fn driver_version<G: GraphicsApi + ?Sized>(api: &G) -> GlVersion {
    let major = u32::try_from(api.get_integer(gl::MAJOR_VERSION)).unwrap_or(0);
    let minor = u32::try_from(api.get_integer(gl::MINOR_VERSION)).unwrap_or(0);
    GlVersion::new(major, minor)
}

/// Run the whole application and return the number of frames presented
///
/// On failure exactly one `FATAL:` line is written to the debug log.
pub fn run<P, F>(init: F, config: &BootstrapConfig, log: &DebugLog) -> Result<u64, BootstrapError>
where
    P: Platform,
    F: FnOnce(ErrorHook) -> WindowResult<P>,
{
    run_to_completion(init, config, log).map_err(|e| {
        log::error!("{e}");
        debug_log!(log, "FATAL:", e);
        e
    })
}

fn run_to_completion<P, F>(init: F, config: &BootstrapConfig, log: &DebugLog) -> Result<u64, BootstrapError>
where
    P: Platform,
    F: FnOnce(ErrorHook) -> WindowResult<P>,
{
    config.validate()?;
    let mut surface = create_context(init, config, log)?;
    let graphics = init_loader(&mut surface, log, config.context.version)?;

    capabilities::report(&graphics, log);

    let mut frame_loop = FrameLoop::new(surface, graphics, &config.render);
    let frames = frame_loop.run();

    // Destroys the window, then releases the windowing subsystem
    drop(frame_loop);
    log::info!("Shutdown complete");

    Ok(frames)
}

/// Process exit status for the outcome of [`run`]
pub fn exit_code(result: &Result<u64, BootstrapError>) -> ExitCode {
    match result {
        Ok(frames) => {
            log::info!("Finished successfully after {frames} frames");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Application error: {e}");
            ExitCode::FAILURE
        }
    }
}
