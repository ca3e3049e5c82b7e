//! Runtime configuration
//!
//! Read once at startup from a JSON file. Every field is optional; missing
//! keys fall back to defaults, so a config can override just what it needs.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::TICK_RATE;
use crate::tuning::Tuning;

/// Default config file looked up in the working directory
pub const DEFAULT_CONFIG_PATH: &str = "runner.json";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Game settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Directory holding the four sprite files
    pub asset_dir: PathBuf,
    /// Draw hitbox outlines from the first frame
    pub show_hitboxes: bool,
    /// Spawn seed; a fresh one is picked when absent
    pub seed: Option<u64>,
    /// Target loop iterations per second
    pub tick_rate: u32,
    /// Balance overrides
    pub tuning: Tuning,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            asset_dir: PathBuf::from("assets"),
            show_hitboxes: false,
            seed: None,
            tick_rate: TICK_RATE,
            tuning: Tuning::default(),
        }
    }
}

impl Settings {
    /// Parse settings from a JSON string
    pub fn from_json(path: &Path, json: &str) -> Result<Self, SettingsError> {
        serde_json::from_str(json).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load settings from a file
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(path, &json)
    }

    /// Load settings, falling back to defaults.
    ///
    /// A missing file is silent; an unreadable or malformed one is logged.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            log::info!("No config at {}, using defaults", path.display());
            return Self::default();
        }

        match Self::load(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("{}; using defaults", e);
                Self::default()
            }
        }
    }

    /// Loop rate, never below 1 Hz
    pub fn effective_tick_rate(&self) -> u32 {
        self.tick_rate.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_is_default() {
        let settings = Settings::from_json(Path::new("test.json"), "{}").unwrap();
        assert_eq!(settings.asset_dir, PathBuf::from("assets"));
        assert_eq!(settings.tick_rate, 30);
        assert!(settings.seed.is_none());
        assert_eq!(settings.tuning, Tuning::default());
    }

    #[test]
    fn test_nested_tuning_override() {
        let json = r#"{
            "seed": 7,
            "show_hitboxes": true,
            "tuning": { "hazard_score_threshold": 100 }
        }"#;
        let settings = Settings::from_json(Path::new("test.json"), json).unwrap();
        assert_eq!(settings.seed, Some(7));
        assert!(settings.show_hitboxes);
        assert_eq!(settings.tuning.hazard_score_threshold, 100);
        assert_eq!(settings.tuning.difficulty_score_threshold, 1000);
    }

    #[test]
    fn test_example_config_parses() {
        let json = include_str!("../runner.example.json");
        let settings = Settings::from_json(Path::new("runner.example.json"), json).unwrap();
        assert_eq!(settings.seed, Some(12345));
        assert_eq!(settings.tuning.jump_impulse, -10.0);
    }

    #[test]
    fn test_malformed_json_reports_path() {
        let err = Settings::from_json(Path::new("bad.json"), "{ seed: ").unwrap_err();
        assert!(matches!(err, SettingsError::Parse { .. }));
        assert!(err.to_string().contains("bad.json"));
    }

    #[test]
    fn test_missing_file_falls_back() {
        let settings = Settings::load_or_default(Path::new("/nonexistent/runner.json"));
        assert_eq!(settings.tick_rate, 30);
    }

    #[test]
    fn test_zero_tick_rate_is_clamped() {
        let settings = Settings {
            tick_rate: 0,
            ..Default::default()
        };
        assert_eq!(settings.effective_tick_rate(), 1);
    }
}
