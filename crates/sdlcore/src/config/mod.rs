//! Configuration system
//!
//! Preference tables the wrapper layer feeds into the native creation calls
//! at startup. Loaded once; nothing here is consulted on the hot path.

pub use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration trait
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
#[derive(Error, Debug)]
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

/// Window creation preferences
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct WindowConfig {
    /// Title shown in the window decoration.
    pub title: String,
    /// Initial client width in pixels.
    pub width: u32,
    /// Initial client height in pixels.
    pub height: u32,
    /// Whether the user may resize the window.
    pub resizable: bool,
    /// Start fullscreen instead of windowed.
    pub fullscreen: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "sdlcore application".to_string(),
            width: 1280,
            height: 720,
            resizable: true,
            fullscreen: false,
        }
    }
}

/// Renderer creation preferences
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct RendererConfig {
    /// Synchronize presentation with the display refresh.
    pub vsync: bool,
    /// Request a hardware-accelerated renderer.
    pub accelerated: bool,
    /// Fall back to the software renderer when acceleration is unavailable.
    pub software_fallback: bool,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self { vsync: true, accelerated: true, software_fallback: true }
    }
}

/// Audio device opening preferences
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct AudioConfig {
    /// Sample rate in Hz.
    pub frequency: i32,
    /// Channel count (1 mono, 2 stereo).
    pub channels: u8,
    /// Buffer size in sample frames; must be a power of two.
    pub samples: u16,
    /// Specific device name, or `None` for the system default.
    pub device: Option<String>,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self { frequency: 48_000, channels: 2, samples: 4096, device: None }
    }
}

/// Top-level preference table for the wrapper layer
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct CoreConfig {
    /// Window creation preferences.
    pub window: WindowConfig,
    /// Renderer creation preferences.
    pub renderer: RendererConfig,
    /// Audio device preferences.
    pub audio: AudioConfig,
}

impl Config for CoreConfig {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_sensible() {
        let config = CoreConfig::default();
        assert!(config.renderer.vsync);
        assert_eq!(config.audio.frequency, 48_000);
        assert_eq!(config.window.width, 1280);
        assert!(config.audio.samples.is_power_of_two());
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = CoreConfig::default();
        config.window.title = "editor".to_string();
        config.renderer.vsync = false;
        config.audio.device = Some("HDMI".to_string());

        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: CoreConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let parsed: CoreConfig = toml::from_str("[window]\nwidth = 640\nheight = 480\n").unwrap();
        assert_eq!(parsed.window.width, 640);
        assert_eq!(parsed.window.height, 480);
        // Everything unspecified comes from Default.
        assert_eq!(parsed.renderer, RendererConfig::default());
        assert_eq!(parsed.audio, AudioConfig::default());
    }

    #[test]
    fn test_unsupported_format_is_rejected() {
        let error = CoreConfig::default().save_to_file("settings.yaml").unwrap_err();
        assert!(matches!(error, ConfigError::UnsupportedFormat(_)));
    }
}
