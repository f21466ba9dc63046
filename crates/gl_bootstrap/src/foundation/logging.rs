//! Logging utilities: console logging setup and the flat debug log file
//!
//! Console diagnostics go through the `log` facade. The debug log is a plain
//! text trace of the bootstrap: a header written once by [`DebugLog::create`],
//! then one line per [`DebugLog::log`] call. Every write opens and closes the
//! file, so nothing is buffered between calls.

pub use log::{debug, info, warn, error, trace};

use std::fmt::{self, Display};
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default name of the debug log file
pub const DEFAULT_LOG_FILE: &str = "gl-debug-log.txt";

/// Initialize the console logging system
///
/// Defaults to `info`; `RUST_LOG` overrides it.
pub fn init() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}

/// Debug log errors
#[derive(Error, Debug)]
pub enum LogError {
    /// The sink could not be opened for writing
    #[error("could not open log file {path} for writing: {source}")]
    Open {
        /// Path of the sink
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: io::Error,
    },

    /// The sink was opened but the write failed
    #[error("could not write to log file {path}: {source}")]
    Write {
        /// Path of the sink
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: io::Error,
    },
}

/// Result type for debug log operations
pub type LogResult<T> = Result<T, LogError>;

/// Append-only debug log file
///
/// Cheap to clone; every component that writes to the log holds its own copy
/// of the sink identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebugLog {
    path: PathBuf,
}

impl DebugLog {
    /// Create a handle for the sink at `path`. The file is not touched.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the sink
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Start a fresh log: truncate the sink and write the header
    ///
    /// The header is a local-time stamp line, a build identifier line and a
    /// blank line.
    pub fn create(&self) -> LogResult<()> {
        let mut file = self.open(false)?;
        let now = chrono::Local::now();
        let header = format!(
            "OpenGL Application Log File local time: {}\nBuild version: {}\n\n",
            now.format("%a %b %e %H:%M:%S %Y"),
            build_identifier(),
        );
        self.write_all(&mut file, header.as_bytes())
    }

    /// Append one line made of `values` separated by single spaces
    pub fn log(&self, values: &[&dyn Display]) -> LogResult<()> {
        let mut file = self.open(true)?;
        let line = format!("{}\n", SpaceSeparated(values));
        self.write_all(&mut file, line.as_bytes())
    }

    fn open(&self, append: bool) -> LogResult<File> {
        let mut options = OpenOptions::new();
        if append {
            options.append(true).create(true);
        } else {
            options.write(true).create(true).truncate(true);
        }

        options.open(&self.path).map_err(|source| {
            error!("ERROR: could not open log file {} for writing", self.path.display());
            LogError::Open { path: self.path.clone(), source }
        })
    }

    fn write_all(&self, file: &mut File, bytes: &[u8]) -> LogResult<()> {
        file.write_all(bytes).map_err(|source| {
            error!("ERROR: could not write to log file {}", self.path.display());
            LogError::Write { path: self.path.clone(), source }
        })
    }
}

impl Default for DebugLog {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_FILE)
    }
}

/// Package version plus the time this crate was built
pub fn build_identifier() -> String {
    let epoch: i64 = env!("GL_BOOTSTRAP_BUILD_EPOCH").parse().unwrap_or(0);
    match chrono::DateTime::from_timestamp(epoch, 0) {
        Some(built) => format!(
            "{} ({})",
            env!("CARGO_PKG_VERSION"),
            built.format("%b %e %Y %H:%M:%S UTC"),
        ),
        None => env!("CARGO_PKG_VERSION").to_string(),
    }
}

struct SpaceSeparated<'a>(&'a [&'a dyn Display]);

impl Display for SpaceSeparated<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}

/// Append a line to a [`DebugLog`], ignoring a failed write
///
/// The failure has already been reported on the error stream by the sink.
///
/// ```rust,no_run
/// use gl_bootstrap::{debug_log, foundation::logging::DebugLog};
///
/// let sink = DebugLog::default();
/// debug_log!(sink, "GL_MAX_VIEWPORT_DIMS", 16384, 16384);
/// ```
#[macro_export]
macro_rules! debug_log {
    ($sink:expr, $($value:expr),+ $(,)?) => {{
        let _ = $sink.log(&[$(&$value as &dyn ::std::fmt::Display),+]);
    }};
}
