//! Retro timer/stopwatch widget.
//!
//! The pure pieces (engine, lap log, duration control, formatting, readiness
//! guard) live here so they can be tested on the host. The Yew view and the
//! browser glue sit in `main.rs` and its modules.

pub mod audio;
pub mod clock;
pub mod config;
pub mod engine;
pub mod error;
pub mod laps;
pub mod utils;
pub mod widget;

pub use audio::{toggle_sound, AudioDeck, SoundCue, SoundReadiness};
pub use engine::{clamp_duration, Engine, EngineState, Mode};
pub use laps::{Lap, LapLog};
pub use widget::{CueEvent, Widget, WidgetAction};

// Whole centiseconds multiplied back from an f64 can land just below the
// integer (0.29 * 100 = 28.999...).
const CENTI_EPSILON: f64 = 1e-6;

fn minsec_centis(centis: u64) -> String {
    let total_seconds = centis / 100;
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{:02}:{:02}.{:02}", minutes, seconds, centis % 100)
}

/// Format fractional seconds as `[-]MM:SS.CC`. Minutes do not wrap.
pub fn format_time(seconds: f64) -> String {
    let sign = if seconds < 0.0 { "-" } else { "" };
    let centis = (seconds.abs() * 100.0 + CENTI_EPSILON).floor() as u64;
    format!("{}{}", sign, minsec_centis(centis))
}

/// Format a non-negative centisecond count as `MM:SS.CC`.
pub fn format_centis(centis: u64) -> String {
    minsec_centis(centis)
}

/// Format whole seconds as `M:SS` for the duration readout.
pub fn format_duration(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_time_examples() {
        assert_eq!(format_time(65.23), "01:05.23");
        assert_eq!(format_time(-1.0), "-00:01.00");
        assert_eq!(format_time(0.0), "00:00.00");
        assert_eq!(format_time(3600.0), "60:00.00");
    }

    #[test]
    fn format_time_floors_centiseconds() {
        assert_eq!(format_time(1.239), "00:01.23");
        assert_eq!(format_time(59.999), "00:59.99");
    }

    #[test]
    fn format_time_agrees_with_centis_on_every_grid_value() {
        for centis in (0..=360_000u64).step_by(7) {
            assert_eq!(format_time(centis as f64 / 100.0), format_centis(centis));
        }
        assert_eq!(format_time(0.29), "00:00.29");
    }

    #[test]
    fn duration_readout() {
        assert_eq!(format_duration(10), "0:10");
        assert_eq!(format_duration(300), "5:00");
        assert_eq!(format_duration(3600), "60:00");
        assert_eq!(format_duration(61), "1:01");
    }
}
