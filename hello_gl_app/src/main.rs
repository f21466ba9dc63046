//! hello_gl: open an OpenGL 4.5 window and clear it until Escape is pressed
//!
//! Writes a debug log (`gl-debug-log.txt` by default) with the context's
//! capabilities. Settings are read from `hello_gl.toml` when present.

use std::process::ExitCode;

use gl_bootstrap::prelude::*;

const CONFIG_FILE: &str = "hello_gl.toml";

fn load_config() -> BootstrapConfig {
    match BootstrapConfig::load_or_default(CONFIG_FILE) {
        Ok(config) => match config.validate() {
            Ok(()) => config,
            Err(e) => {
                log::warn!("Ignoring {CONFIG_FILE}: {e}");
                BootstrapConfig::default()
            }
        },
        Err(e) => {
            log::warn!("Failed to load {CONFIG_FILE}, using defaults: {e}");
            BootstrapConfig::default()
        }
    }
}

fn main() -> ExitCode {
    // Initialize logging
    gl_bootstrap::foundation::logging::init();

    log::info!("Starting hello_gl");
    let config = load_config();

    let debug_log = DebugLog::new(&config.log.file);
    if debug_log.create().is_err() {
        log::warn!("Continuing without a fresh debug log");
    }

    bootstrap::exit_code(&bootstrap::run(GlfwPlatform::init, &config, &debug_log))
}
