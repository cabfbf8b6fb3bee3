//! Application configuration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{TrimlineError, TrimlineResult};

/// Global application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Clip editing limits.
    #[serde(default)]
    pub editing: EditingDefaults,

    /// Timeline zoom bounds.
    #[serde(default)]
    pub zoom: ZoomDefaults,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Limits applied by the clip engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EditingDefaults {
    /// Shortest duration (seconds) any clip may be trimmed to.
    pub min_clip_duration: f64,

    /// Split points closer than this (seconds) to a clip edge are rejected.
    pub split_margin: f64,

    /// Pixel distance within which a drag is attracted to a snap point.
    pub snap_threshold_px: f64,
}

/// Bounds for the timeline zoom, in pixels per second.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoomDefaults {
    pub min_px_per_sec: f64,
    pub max_px_per_sec: f64,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trimline=debug,warn").
    pub level: String,

    /// Whether to output structured JSON logs.
    pub json: bool,

    /// Optional log file path.
    pub file: Option<PathBuf>,
}

impl Default for EditingDefaults {
    fn default() -> Self {
        Self {
            min_clip_duration: 0.01,
            split_margin: 0.1,
            snap_threshold_px: 8.0,
        }
    }
}

impl Default for ZoomDefaults {
    fn default() -> Self {
        Self {
            min_px_per_sec: 10.0,
            max_px_per_sec: 200.0,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            file: None,
        }
    }
}

impl AppConfig {
    /// Load config from the standard location, falling back to defaults.
    pub fn load() -> Self {
        Self::load_from(&config_file_path())
    }

    /// Load config from `config_path`, falling back to defaults.
    pub fn load_from(config_path: &Path) -> Self {
        if config_path.exists() {
            match std::fs::read_to_string(config_path) {
                Ok(content) => match serde_json::from_str::<AppConfig>(&content) {
                    Ok(config) => match config.validate() {
                        Ok(()) => return config,
                        Err(e) => {
                            tracing::warn!("Ignoring config at {:?}: {}", config_path, e);
                        }
                    },
                    Err(e) => {
                        tracing::warn!("Failed to parse config at {:?}: {}", config_path, e);
                    }
                },
                Err(e) => {
                    tracing::warn!("Failed to read config at {:?}: {}", config_path, e);
                }
            }
        }
        Self::default()
    }

    /// Save config to the standard location.
    pub fn save(&self) -> TrimlineResult<PathBuf> {
        let config_path = config_file_path();
        self.save_to(&config_path)?;
        Ok(config_path)
    }

    /// Save config as pretty JSON, creating parent directories.
    pub fn save_to(&self, config_path: &Path) -> TrimlineResult<()> {
        self.validate()?;
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, json)?;
        Ok(())
    }

    /// Reject values the engine cannot work with.
    pub fn validate(&self) -> TrimlineResult<()> {
        let editing = &self.editing;
        if !(editing.min_clip_duration > 0.0) {
            return Err(TrimlineError::config(format!(
                "editing.min_clip_duration must be positive, got {}",
                editing.min_clip_duration
            )));
        }
        if editing.split_margin < 0.0 || editing.snap_threshold_px < 0.0 {
            return Err(TrimlineError::config(
                "editing.split_margin and editing.snap_threshold_px must not be negative",
            ));
        }

        let zoom = &self.zoom;
        if !(zoom.min_px_per_sec > 0.0) || zoom.min_px_per_sec > zoom.max_px_per_sec {
            return Err(TrimlineError::config(format!(
                "zoom range [{}, {}] is empty or non-positive",
                zoom.min_px_per_sec, zoom.max_px_per_sec
            )));
        }
        Ok(())
    }
}

/// Standard config file location.
pub fn config_file_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("trimline").join("config.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert!((config.editing.split_margin - 0.1).abs() < 1e-9);
        assert!(config.editing.min_clip_duration > 0.0);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{ "editing": { "split_margin": 0.25 } }"#).unwrap();
        assert!((config.editing.split_margin - 0.25).abs() < 1e-9);
        assert!((config.editing.min_clip_duration - 0.01).abs() < 1e-9);
        assert!((config.zoom.max_px_per_sec - 200.0).abs() < 1e-9);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_validate_rejects_inverted_zoom_range() {
        let mut config = AppConfig::default();
        config.zoom.min_px_per_sec = 300.0;
        assert!(matches!(
            config.validate(),
            Err(TrimlineError::Config { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_zero_min_duration() {
        let mut config = AppConfig::default();
        config.editing.min_clip_duration = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_save_then_load_roundtrip() {
        let dir = std::env::temp_dir().join("trimline_config_roundtrip");
        let _ = std::fs::remove_dir_all(&dir);
        let path = dir.join("trimline").join("config.json");

        let mut config = AppConfig::default();
        config.editing.split_margin = 0.5;
        config.logging.json = true;
        config.save_to(&path).unwrap();

        let loaded = AppConfig::load_from(&path);
        assert!((loaded.editing.split_margin - 0.5).abs() < 1e-9);
        assert!(loaded.logging.json);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_save_refuses_invalid_config() {
        let path = std::env::temp_dir().join("trimline_config_invalid.json");
        let mut config = AppConfig::default();
        config.zoom.max_px_per_sec = 0.0;
        assert!(matches!(
            config.save_to(&path),
            Err(TrimlineError::Config { .. })
        ));
        assert!(!path.exists());
    }

    #[test]
    fn test_unparseable_file_falls_back_to_defaults() {
        let path = std::env::temp_dir().join("trimline_config_garbage.json");
        std::fs::write(&path, "not json").unwrap();
        let config = AppConfig::load_from(&path);
        assert!((config.editing.split_margin - 0.1).abs() < 1e-9);
        std::fs::remove_file(&path).ok();
    }
}
