//! # Bootstrap Configuration
//!
//! All settings the bootstrap reads: window, GL context requirements, debug
//! log location and the frame loop's render settings. Every field has a default
//! so a partial TOML or RON file is enough.

use serde::{Deserialize, Serialize};

use crate::foundation::logging::DEFAULT_LOG_FILE;
use crate::input::{CursorMode, KeyCode};

// Re-export so callers need only one import
pub use crate::config::{Config, ConfigError};

/// # Window Configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Window width in screen coordinates
    pub width: u32,
    /// Window height in screen coordinates
    pub height: u32,
    /// Cursor mode applied once the context is current
    pub cursor_mode: CursorMode,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "init-1: OpenGL 4.5 - create debug log file and clear colorbuffer with constant color"
                .to_string(),
            width: 2400,
            height: 1350,
            cursor_mode: CursorMode::Normal,
        }
    }
}

/// OpenGL API version
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GlVersion {
    /// Major version
    pub major: u32,
    /// Minor version
    pub minor: u32,
}

impl GlVersion {
    /// Create a version
    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }
}

impl Default for GlVersion {
    fn default() -> Self {
        Self::new(4, 5)
    }
}

impl std::fmt::Display for GlVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// # Context Configuration
///
/// Requirements declared to the windowing system before the context is
/// created. The profile is always core. Values may be raised above
/// [`ContextConfig::MINIMUM`] but never lowered below it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContextConfig {
    /// Minimum GL version
    pub version: GlVersion,
    /// Drop deprecated functionality entirely
    pub forward_compatible: bool,
    /// Double-buffered color target
    pub double_buffer: bool,
    /// Depth buffer bits
    pub depth_bits: u32,
    /// Bits per color channel (R, G, B and A)
    pub color_bits: u32,
}

impl ContextConfig {
    /// Weakest context the bootstrap accepts
    pub const MINIMUM: Self = Self {
        version: GlVersion::new(4, 5),
        forward_compatible: true,
        double_buffer: true,
        depth_bits: 24,
        color_bits: 8,
    };

    /// Reject requirements weaker than [`ContextConfig::MINIMUM`]
    pub fn check_minimum(&self) -> Result<(), ConfigError> {
        let min = &Self::MINIMUM;
        if self.version < min.version {
            return Err(ConfigError::Invalid(format!(
                "GL version must be at least {}, got {}",
                min.version, self.version
            )));
        }
        if !self.forward_compatible || !self.double_buffer {
            return Err(ConfigError::Invalid(
                "context must be forward-compatible and double-buffered".to_string(),
            ));
        }
        if self.depth_bits < min.depth_bits || self.color_bits < min.color_bits {
            return Err(ConfigError::Invalid(format!(
                "context needs at least {} depth bits and {} bits per color channel, got {} and {}",
                min.depth_bits, min.color_bits, self.depth_bits, self.color_bits
            )));
        }
        Ok(())
    }
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self::MINIMUM
    }
}

/// # Debug Log Configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Name of the flat debug log file
    pub file: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self { file: DEFAULT_LOG_FILE.to_string() }
    }
}

/// RGBA color with components in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClearColor {
    /// Red
    pub r: f32,
    /// Green
    pub g: f32,
    /// Blue
    pub b: f32,
    /// Alpha
    pub a: f32,
}

impl ClearColor {
    /// Create a color
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    fn is_normalized(&self) -> bool {
        [self.r, self.g, self.b, self.a]
            .iter()
            .all(|c| (0.0..=1.0).contains(c))
    }
}

impl Default for ClearColor {
    fn default() -> Self {
        // Opaque green
        Self::new(0.0, 1.0, 0.0, 1.0)
    }
}

/// # Render Configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Color the framebuffer is cleared to every frame
    pub clear_color: ClearColor,
    /// Key that ends the frame loop when pressed
    pub exit_key: KeyCode,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            clear_color: ClearColor::default(),
            exit_key: KeyCode::Escape,
        }
    }
}

/// # Complete Bootstrap Configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BootstrapConfig {
    /// Window settings
    pub window: WindowConfig,
    /// GL context requirements
    pub context: ContextConfig,
    /// Debug log settings
    pub log: LogConfig,
    /// Frame loop settings
    pub render: RenderConfig,
}

impl BootstrapConfig {
    /// Set the window size
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.window.width = width;
        self.window.height = height;
        self
    }

    /// Set the window title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.window.title = title.into();
        self
    }

    /// Set the debug log file
    pub fn with_log_file(mut self, file: impl Into<String>) -> Self {
        self.log.file = file.into();
        self
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window.width == 0 || self.window.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "window size must be non-zero, got {}x{}",
                self.window.width, self.window.height
            )));
        }
        self.context.check_minimum()?;
        if self.log.file.is_empty() {
            return Err(ConfigError::Invalid("debug log file name is empty".to_string()));
        }
        if !self.render.clear_color.is_normalized() {
            return Err(ConfigError::Invalid(format!(
                "clear color components must be in [0, 1], got {:?}",
                self.render.clear_color
            )));
        }
        Ok(())
    }
}

impl Config for BootstrapConfig {}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_match_gl_45_core() {
        let config = BootstrapConfig::default();
        assert_eq!(config.context.version, GlVersion::new(4, 5));
        assert!(config.context.double_buffer);
        assert_eq!(config.context.depth_bits, 24);
        assert_eq!(config.context.color_bits, 8);
        assert_eq!(config.log.file, "gl-debug-log.txt");
        assert_eq!(config.render.exit_key, KeyCode::Escape);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_version_ordering() {
        assert!(GlVersion::new(4, 6) >= GlVersion::new(4, 5));
        assert!(GlVersion::new(5, 0) >= GlVersion::new(4, 5));
        assert!(GlVersion::new(4, 4) < GlVersion::new(4, 5));
        assert!(GlVersion::new(3, 9) < GlVersion::new(4, 5));
        assert_eq!(GlVersion::new(4, 5).to_string(), "4.5");
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("hello_gl.toml");
        std::fs::write(
            &path,
            "[window]\nwidth = 800\nheight = 600\n\n[render]\nexit_key = \"Q\"\n",
        )
        .unwrap();

        let config = BootstrapConfig::load_from_file(path.to_str().unwrap()).unwrap();
        assert_eq!(config.window.width, 800);
        assert_eq!(config.window.height, 600);
        assert_eq!(config.render.exit_key, KeyCode::Q);
        assert_eq!(config.context, ContextConfig::default());
    }

    #[test]
    fn test_ron_round_trip_through_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("hello_gl.ron");
        let path = path.to_str().unwrap();

        let config = BootstrapConfig::default()
            .with_size(1024, 768)
            .with_title("ron")
            .with_log_file("trace.txt");
        config.save_to_file(path).unwrap();

        assert_eq!(BootstrapConfig::load_from_file(path).unwrap(), config);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.toml");
        let config = BootstrapConfig::load_or_default(path.to_str().unwrap()).unwrap();
        assert_eq!(config, BootstrapConfig::default());
    }

    #[test]
    fn test_unsupported_extension() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("hello_gl.json");
        std::fs::write(&path, "{}").unwrap();
        assert!(matches!(
            BootstrapConfig::load_from_file(path.to_str().unwrap()),
            Err(ConfigError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert!(BootstrapConfig::default().with_size(0, 600).validate().is_err());
        assert!(BootstrapConfig::default().with_log_file("").validate().is_err());

        let mut config = BootstrapConfig::default();
        config.render.clear_color = ClearColor::new(2.0, 0.0, 0.0, 1.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_weaker_context() {
        let weaker: [fn(&mut ContextConfig); 5] = [
            |c| c.version = GlVersion::new(3, 3),
            |c| c.version = GlVersion::new(4, 4),
            |c| c.double_buffer = false,
            |c| c.depth_bits = 0,
            |c| c.color_bits = 4,
        ];
        for weaken in weaker {
            let mut config = BootstrapConfig::default();
            weaken(&mut config.context);
            assert!(
                matches!(config.validate(), Err(ConfigError::Invalid(_))),
                "accepted {:?}",
                config.context
            );
        }
    }

    #[test]
    fn test_validate_accepts_stronger_context() {
        let mut config = BootstrapConfig::default();
        config.context.version = GlVersion::new(4, 6);
        config.context.depth_bits = 32;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_weaker_context_in_file_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("hello_gl.toml");
        std::fs::write(&path, "[context]\nversion = { major = 3, minor = 3 }\ndouble_buffer = false\n").unwrap();

        let config = BootstrapConfig::load_from_file(&path).unwrap();
        assert_eq!(config.context.version, GlVersion::new(3, 3));
        assert!(config.validate().is_err());
    }
}
