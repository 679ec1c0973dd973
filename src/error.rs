//! Recoverable error kinds. None of these ever reach the user as a failure;
//! callers log them and fall back.

use thiserror::Error;

/// Failure to read or format the local wall-clock time.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClockError {
    #[error("the current date is not a valid time value")]
    InvalidDate,
    #[error("hour {0} is outside 0-23")]
    HourOutOfRange(u32),
    #[error("minute {0} is outside 0-59")]
    MinuteOutOfRange(u32),
}

/// Failure to load or play a sound cue.
#[derive(Debug, Error)]
pub enum AudioError {
    #[error("could not create audio element for {cue}: {reason}")]
    Create { cue: &'static str, reason: String },
    #[error("{cue} sound failed to load")]
    Load { cue: &'static str },
    #[error("error playing {cue} sound: {reason}")]
    Play { cue: &'static str, reason: String },
}

/// Problems with the embedded widget configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("widget config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("preset '{label}' of {seconds}s is outside {min}-{max}s")]
    PresetOutOfRange {
        label: String,
        seconds: u32,
        min: u32,
        max: u32,
    },
}
