//! Player configuration for reel-player
//!
//! Configuration is stored as YAML in the user's config directory.
//! Default location: ~/.config/reel-player/config.yaml

use anyhow::{Context, Result};
use reel_core::{SubtitleSettings, DEFAULT_DELAY_STEP_MS};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Subtitle display settings (size, delay, offset, colors)
    pub subtitles: SubtitleSettings,
    /// Picker behaviour
    pub picker: PickerConfig,
    /// Optional bounds applied when the picker requests a new offset
    pub offset_limits: OffsetLimits,
    /// YAML file with the subtitle track list (demo tracks when unset)
    pub tracks_path: Option<PathBuf>,
}

/// Picker configuration section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    /// Sort English languages and embedded variants first
    pub prioritize: bool,
    /// Delay change per -/+ click in milliseconds
    pub delay_step_ms: i64,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            prioritize: false,
            delay_step_ms: DEFAULT_DELAY_STEP_MS,
        }
    }
}

/// Offset clamping section
///
/// The picker itself never clamps; the player applies these bounds when it
/// accepts a new offset.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OffsetLimits {
    pub enabled: bool,
    pub min: f64,
    pub max: f64,
}

impl Default for OffsetLimits {
    fn default() -> Self {
        Self {
            enabled: false,
            min: -50.0,
            max: 50.0,
        }
    }
}

impl OffsetLimits {
    /// Clamp `offset` when limits are enabled
    pub fn apply(&self, offset: f64) -> f64 {
        if self.enabled && self.min <= self.max {
            offset.clamp(self.min, self.max)
        } else {
            offset
        }
    }
}

/// Get the default config file path
///
/// Returns: ~/.config/reel-player/config.yaml
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
        .join("reel-player")
        .join("config.yaml")
}

/// Load configuration from a YAML file
///
/// If the file doesn't exist, returns default config.
/// If the file exists but is invalid, logs a warning and returns default config.
pub fn load_config(path: &Path) -> PlayerConfig {
    log::info!("load_config: Loading from {:?}", path);

    if !path.exists() {
        log::info!("load_config: Config file doesn't exist, using defaults");
        return PlayerConfig::default();
    }

    match std::fs::read_to_string(path) {
        Ok(contents) => match serde_yaml::from_str::<PlayerConfig>(&contents) {
            Ok(config) => {
                log::info!(
                    "load_config: Loaded config - Size: {}%, Delay: {}ms, Offset: {:?}, Prioritize: {}",
                    config.subtitles.size,
                    config.subtitles.delay_ms,
                    config.subtitles.offset,
                    config.picker.prioritize
                );
                config
            }
            Err(e) => {
                log::warn!("load_config: Failed to parse config: {}, using defaults", e);
                PlayerConfig::default()
            }
        },
        Err(e) => {
            log::warn!(
                "load_config: Failed to read config file: {}, using defaults",
                e
            );
            PlayerConfig::default()
        }
    }
}

/// Save configuration to a YAML file
///
/// Creates parent directories if they don't exist.
pub fn save_config(config: &PlayerConfig, path: &Path) -> Result<()> {
    log::info!("save_config: Saving to {:?}", path);

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
    }

    let yaml = serde_yaml::to_string(config).context("Failed to serialize config to YAML")?;

    std::fs::write(path, yaml)
        .with_context(|| format!("Failed to write config file: {:?}", path))?;

    log::info!("save_config: Config saved successfully");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PlayerConfig::default();
        assert_eq!(config.subtitles.size, 100);
        assert_eq!(config.subtitles.offset, Some(0.0));
        assert!(!config.picker.prioritize);
        assert_eq!(config.picker.delay_step_ms, 250);
        assert!(!config.offset_limits.enabled);
        assert!(config.tracks_path.is_none());
    }

    #[test]
    fn test_offset_limits() {
        let mut limits = OffsetLimits::default();
        assert_eq!(limits.apply(80.0), 80.0);

        limits.enabled = true;
        assert_eq!(limits.apply(80.0), 50.0);
        assert_eq!(limits.apply(-80.0), -50.0);
        assert_eq!(limits.apply(3.0), 3.0);
    }

    #[test]
    fn test_inverted_limits_are_ignored() {
        let limits = OffsetLimits {
            enabled: true,
            min: 10.0,
            max: -10.0,
        };
        assert_eq!(limits.apply(25.0), 25.0);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let yaml = "picker:\n  prioritize: true\nsubtitles:\n  size: 150\n";
        let config: PlayerConfig = serde_yaml::from_str(yaml).unwrap();
        assert!(config.picker.prioritize);
        assert_eq!(config.picker.delay_step_ms, 250);
        assert_eq!(config.subtitles.size, 150);
        assert_eq!(config.subtitles.colors.text, "#FFFFFF");
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.yaml");

        let mut config = PlayerConfig::default();
        config.subtitles.delay_ms = -750;
        config.subtitles.offset = None;
        config.offset_limits.enabled = true;
        save_config(&config, &path).unwrap();

        let loaded = load_config(&path);
        assert_eq!(loaded.subtitles.delay_ms, -750);
        assert_eq!(loaded.subtitles.offset, None);
        assert!(loaded.offset_limits.enabled);
    }

    #[test]
    fn test_missing_or_invalid_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let missing = load_config(&dir.path().join("missing.yaml"));
        assert_eq!(missing.subtitles.size, 100);

        let invalid = dir.path().join("invalid.yaml");
        std::fs::write(&invalid, "subtitles: [not, a, map]").unwrap();
        assert_eq!(load_config(&invalid).subtitles.size, 100);
    }
}
