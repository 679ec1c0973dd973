//! Parsing and validation for the duration inputs.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

// Compiled regexes for duration parsing
static DURATION_MIN_SEC_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+)m\s*(\d+)s$").unwrap());
static DURATION_MIN_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+)m$").unwrap());
static DURATION_COLON_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+):(\d{1,2})$").unwrap());
static DURATION_SEC_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+)s$").unwrap());

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DurationParseError {
    #[error("Duration cannot be empty")]
    EmptyInput,
    #[error("Invalid duration format. Use: 2:30, 2m30s, 2m, 45s, or 150")]
    InvalidFormat,
    #[error("Invalid minutes value")]
    InvalidMinutes,
    #[error("Invalid seconds: {0} (must be 0-59)")]
    InvalidSeconds(u32),
}

fn parse_part(text: &str, err: DurationParseError) -> Result<u32, DurationParseError> {
    text.parse().map_err(|_| err)
}

fn minutes_seconds(minutes: u32, seconds: u32) -> Result<u32, DurationParseError> {
    if seconds > 59 {
        return Err(DurationParseError::InvalidSeconds(seconds));
    }
    minutes
        .checked_mul(60)
        .and_then(|m| m.checked_add(seconds))
        .ok_or(DurationParseError::InvalidMinutes)
}

/// Parse a typed duration into whole seconds.
///
/// Supported formats:
/// - Pure number: "150" (seconds)
/// - Colon format: "2:30" (minutes:seconds)
/// - Minutes and seconds: "2m 30s" or "2m30s"
/// - Minutes only: "2m"
/// - Seconds only: "45s"
///
/// Range limits are not applied here; the duration setter clamps.
pub fn parse_duration_input(input: &str) -> Result<u32, DurationParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(DurationParseError::EmptyInput);
    }

    if let Ok(seconds) = trimmed.parse::<u32>() {
        return Ok(seconds);
    }

    if let Some(captures) = DURATION_COLON_REGEX
        .captures(trimmed)
        .or_else(|| DURATION_MIN_SEC_REGEX.captures(trimmed))
    {
        let minutes = parse_part(&captures[1], DurationParseError::InvalidMinutes)?;
        let seconds = parse_part(&captures[2], DurationParseError::InvalidSeconds(0))?;
        return minutes_seconds(minutes, seconds);
    }

    if let Some(captures) = DURATION_MIN_REGEX.captures(trimmed) {
        let minutes = parse_part(&captures[1], DurationParseError::InvalidMinutes)?;
        return minutes_seconds(minutes, 0);
    }

    if let Some(captures) = DURATION_SEC_REGEX.captures(trimmed) {
        return parse_part(&captures[1], DurationParseError::InvalidFormat);
    }

    Err(DurationParseError::InvalidFormat)
}

/// Generic numeric input validation
pub fn validate_numeric_input<T>(
    input: &str,
    min: Option<T>,
    max: Option<T>,
    field_name: &str,
) -> Result<T, String>
where
    T: std::str::FromStr + std::fmt::Display + PartialOrd,
{
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(format!("{} cannot be empty", field_name));
    }

    match trimmed.parse::<T>() {
        Ok(val) => {
            if let Some(min_val) = min {
                if val < min_val {
                    return Err(format!("{} must be at least {}", field_name, min_val));
                }
            }
            if let Some(max_val) = max {
                if val > max_val {
                    return Err(format!("{} cannot exceed {}", field_name, max_val));
                }
            }
            Ok(val)
        }
        Err(_) => Err(format!("{} must be a valid number", field_name)),
    }
}

/// Validate the raw value reported by the duration slider.
pub fn validate_slider_value(input: &str) -> Result<i64, String> {
    use crate::config::{MAX_DURATION_SEC, MIN_DURATION_SEC};
    validate_numeric_input(
        input,
        Some(MIN_DURATION_SEC as i64),
        Some(MAX_DURATION_SEC as i64),
        "Duration",
    )
}
