//! Forwarding of windowing library errors to the debug log

use crate::debug_log;
use crate::foundation::logging::DebugLog;

/// Error hook installed when the windowing subsystem starts
///
/// Every error the windowing library reports after initialization is written
/// to the debug log as one line.
#[derive(Debug, Clone)]
pub struct ErrorHook {
    log: DebugLog,
}

impl ErrorHook {
    /// Hook writing to `log`
    pub fn new(log: DebugLog) -> Self {
        Self { log }
    }

    /// Record one error
    pub fn report(&self, code: i32, description: &str) {
        log::warn!("GLFW error {code}: {description}");
        debug_log!(self.log, "GLFW Error id:", code, "| description:", description);
    }
}
