//! Game configuration
//!
//! Everything the shell may want to vary without recompiling: field size,
//! tick cadence, seeding, and the autopilot demo flag. Loadable from a JSON
//! file; anything missing or malformed degrades to defaults.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::consts::TICK_INTERVAL_MS;

/// Runtime configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Playfield width in pixels
    pub field_width: u32,
    /// Playfield height in pixels
    pub field_height: u32,
    /// Tick interval in milliseconds (0 = run unthrottled)
    pub tick_interval_ms: u64,
    /// Fixed seed for reproducible runs; fresh entropy when absent
    pub seed: Option<u64>,
    /// Demo mode - the paddle plays by itself
    pub autopilot: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            field_width: 640,
            field_height: 480,
            tick_interval_ms: TICK_INTERVAL_MS,
            seed: None,
            autopilot: false,
        }
    }
}

impl Settings {
    /// Load settings from a JSON file, falling back to defaults on any error
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("loaded settings from {}", path.display());
                    settings
                }
                Err(err) => {
                    log::warn!("ignoring malformed settings {}: {err}", path.display());
                    Self::default()
                }
            },
            Err(err) => {
                log::warn!("cannot read settings {}: {err}", path.display());
                Self::default()
            }
        }
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.field_width, 640);
        assert_eq!(settings.field_height, 480);
        assert_eq!(settings.tick_interval(), Duration::from_millis(20));
        assert!(settings.seed.is_none());
        assert!(!settings.autopilot);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"seed": 7}"#).unwrap();
        assert_eq!(settings.seed, Some(7));
        assert_eq!(settings.field_width, 640);
        assert_eq!(settings.tick_interval_ms, 20);
    }

    #[test]
    fn test_missing_file_degrades_to_defaults() {
        let settings = Settings::load("/definitely/not/here.json");
        assert_eq!(settings.field_width, 640);
    }

    #[test]
    fn test_roundtrip() {
        let mut settings = Settings::default();
        settings.autopilot = true;
        settings.seed = Some(123);
        let json = serde_json::to_string(&settings).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(back.seed, Some(123));
        assert!(back.autopilot);
    }
}
