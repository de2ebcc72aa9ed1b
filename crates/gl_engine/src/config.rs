//! Configuration system
//!
//! Plain-data configuration structs for the window, the GL context request,
//! and the shader pipeline, with defaults matching the stock demo. Configs
//! can be loaded from and saved to TOML or RON files via the [`Config`]
//! trait, though most applications just use [`AppConfig::default`].

pub use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration trait
///
/// Any serializable config struct gains file load/save by implementing this.
/// The format is picked from the file extension.
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::Io)?;

        if path.ends_with(".toml") {
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else if path.ends_with(".ron") {
            ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else {
            Err(ConfigError::UnsupportedFormat(path.to_string()))
        }
    }

    /// Save configuration to file
    fn save_to_file(&self, path: &str) -> Result<(), ConfigError> {
        let contents = if path.ends_with(".toml") {
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else if path.ends_with(".ron") {
            ron::ser::to_string_pretty(self, Default::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Window configuration
///
/// The window is created once at a fixed size and position; resizing is off
/// by default.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Window title
    pub title: String,

    /// Window width in screen coordinates
    pub width: u32,

    /// Window height in screen coordinates
    pub height: u32,

    /// Initial window position (x, y)
    pub position: (i32, i32),

    /// Whether the window is resizable
    pub resizable: bool,
}

impl WindowConfig {
    /// Set the window title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the window size
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "OpenGL Window".to_string(),
            width: 640,
            height: 480,
            position: (0, 0),
            resizable: false,
        }
    }
}

/// OpenGL context request
///
/// These are hints passed to the platform before window creation. The driver
/// may grant a different compatible context; nothing here is a guarantee.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContextConfig {
    /// Requested context major version
    pub major: u32,

    /// Requested context minor version
    pub minor: u32,

    /// Request a core-profile context
    pub core_profile: bool,

    /// Request a forward-compatible context (required for core profiles on macOS)
    pub forward_compat: bool,

    /// Request double buffering
    pub double_buffer: bool,

    /// Requested depth buffer bits
    pub depth_bits: u32,
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            major: 4,
            minor: 1,
            core_profile: true,
            forward_compat: true,
            double_buffer: true,
            depth_bits: 24,
        }
    }
}

/// Shader pipeline configuration
///
/// Paths to the GLSL sources for the two pipeline stages. When
/// `allow_fallback` is set, an unreadable file is substituted with the
/// embedded minimal shader for that stage (logged at warn level) instead of
/// failing the build.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShaderConfig {
    /// Path to the vertex shader GLSL file
    pub vertex_path: String,

    /// Path to the fragment shader GLSL file
    pub fragment_path: String,

    /// Fall back to the embedded shaders when a file cannot be read
    pub allow_fallback: bool,
}

impl ShaderConfig {
    /// Create a new shader configuration
    pub fn new(vertex_path: impl Into<String>, fragment_path: impl Into<String>) -> Self {
        Self {
            vertex_path: vertex_path.into(),
            fragment_path: fragment_path.into(),
            allow_fallback: false,
        }
    }

    /// Enable the embedded fallback shaders
    pub fn with_fallback(mut self) -> Self {
        self.allow_fallback = true;
        self
    }

    /// Validate that both shader files exist
    pub fn validate(&self) -> Result<(), String> {
        if !Path::new(&self.vertex_path).exists() {
            return Err(format!("Vertex shader not found: {}", self.vertex_path));
        }
        if !Path::new(&self.fragment_path).exists() {
            return Err(format!("Fragment shader not found: {}", self.fragment_path));
        }
        Ok(())
    }
}

impl Default for ShaderConfig {
    fn default() -> Self {
        Self::new("./shaders/vert.glsl", "./shaders/frag.glsl")
    }
}

/// Top-level application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window configuration
    pub window: WindowConfig,

    /// OpenGL context request
    pub context: ContextConfig,

    /// Shader pipeline configuration
    pub shaders: ShaderConfig,
}

impl Config for AppConfig {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_defaults() {
        let config = WindowConfig::default();

        assert_eq!(config.width, 640);
        assert_eq!(config.height, 480);
        assert_eq!(config.position, (0, 0));
        assert_eq!(config.title, "OpenGL Window");
        assert!(!config.resizable);
    }

    #[test]
    fn test_context_defaults() {
        let config = ContextConfig::default();

        assert_eq!(config.major, 4);
        assert_eq!(config.minor, 1);
        assert!(config.core_profile);
        assert!(config.double_buffer);
        assert_eq!(config.depth_bits, 24);
    }

    #[test]
    fn test_shader_defaults() {
        let config = ShaderConfig::default();

        assert_eq!(config.vertex_path, "./shaders/vert.glsl");
        assert_eq!(config.fragment_path, "./shaders/frag.glsl");
        assert!(!config.allow_fallback);
    }

    #[test]
    fn test_shader_config_builder() {
        let config = ShaderConfig::new("a.glsl", "b.glsl").with_fallback();

        assert_eq!(config.vertex_path, "a.glsl");
        assert_eq!(config.fragment_path, "b.glsl");
        assert!(config.allow_fallback);
    }

    #[test]
    fn test_shader_validate_missing_files() {
        let config = ShaderConfig::new("/nonexistent/vert.glsl", "/nonexistent/frag.glsl");

        let err = config.validate().unwrap_err();
        assert!(err.contains("Vertex shader not found"));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = AppConfig::default();

        let text = toml::to_string(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&text).unwrap();

        assert_eq!(parsed.window.width, config.window.width);
        assert_eq!(parsed.window.height, config.window.height);
        assert_eq!(parsed.context.major, config.context.major);
        assert_eq!(parsed.context.minor, config.context.minor);
        assert_eq!(parsed.shaders.vertex_path, config.shaders.vertex_path);
    }
}
