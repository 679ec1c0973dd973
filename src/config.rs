//! Application-level configuration constants and the embedded widget config.

use crate::error::ConfigError;
use log::{info, warn};
use once_cell::sync::Lazy;
use serde::Deserialize;

// Timing
pub const TICK_MS: u32 = 10;
pub const CENTIS_PER_TICK: u64 = 1;
pub const CLOCK_REFRESH_MS: u32 = 60_000;

// Timer duration bounds (seconds)
pub const MIN_DURATION_SEC: u32 = 10;
pub const MAX_DURATION_SEC: u32 = 3600;
pub const DEFAULT_DURATION_SEC: u32 = 300;
pub const SLIDER_STEP_SEC: u32 = 10;

// Fine adjustment buttons, in display order
pub const STEP_DELTAS: [i32; 4] = [-60, -10, 10, 60];
pub const NUDGE_DELTA: i32 = 1;

// Fallback strings
pub const CLOCK_PLACEHOLDER: &str = "--:-- --";
pub const DEFAULT_STATUS_TEXT: &str = "☀ +16";

/// Console log level: everything in debug builds, `info` and above in release.
pub fn log_level() -> log::Level {
    if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}

/// A selectable countdown preset.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Preset {
    pub label: String,
    pub seconds: u32,
}

/// Where each cue's audio file lives.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SoundPaths {
    pub click: String,
    pub complete: String,
    pub lap: String,
}

impl Default for SoundPaths {
    fn default() -> Self {
        Self {
            click: "/sounds/click.mp3".to_string(),
            complete: "/sounds/complete.mp3".to_string(),
            lap: "/sounds/lap.mp3".to_string(),
        }
    }
}

/// Tunables shipped alongside the widget in `widget.json`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    pub default_duration: u32,
    pub presets: Vec<Preset>,
    pub sounds: SoundPaths,
    pub status_text: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            default_duration: DEFAULT_DURATION_SEC,
            presets: [("1m", 60), ("3m", 180), ("5m", 300), ("10m", 600)]
                .into_iter()
                .map(|(label, seconds)| Preset {
                    label: label.to_string(),
                    seconds,
                })
                .collect(),
            sounds: SoundPaths::default(),
            status_text: DEFAULT_STATUS_TEXT.to_string(),
        }
    }
}

impl WidgetConfig {
    /// Parse a config document, failing on malformed JSON or out-of-range presets.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: WidgetConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for preset in &self.presets {
            if !(MIN_DURATION_SEC..=MAX_DURATION_SEC).contains(&preset.seconds) {
                return Err(ConfigError::PresetOutOfRange {
                    label: preset.label.clone(),
                    seconds: preset.seconds,
                    min: MIN_DURATION_SEC,
                    max: MAX_DURATION_SEC,
                });
            }
        }
        Ok(())
    }

    /// Parse `json`, falling back to the built-in defaults on any error.
    pub fn load_or_default(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(mut config) => {
                config.default_duration =
                    crate::engine::clamp_duration(config.default_duration as i64);
                info!(
                    "Loaded widget config: {} presets, default {}s",
                    config.presets.len(),
                    config.default_duration
                );
                config
            }
            Err(e) => {
                warn!("{}; using built-in defaults", e);
                Self::default()
            }
        }
    }
}

/// Config embedded at build time.
pub static CONFIG: Lazy<WidgetConfig> =
    Lazy::new(|| WidgetConfig::load_or_default(include_str!("widget.json")));
