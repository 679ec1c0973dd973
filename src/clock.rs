//! Status-bar wall clock.

use crate::config::CLOCK_PLACEHOLDER;
use crate::error::ClockError;
use log::error;

/// Format a 24-hour `hours:minutes` pair as `h:mm AM|PM`.
pub fn format_wall_clock(hours: u32, minutes: u32) -> Result<String, ClockError> {
    if hours > 23 {
        return Err(ClockError::HourOutOfRange(hours));
    }
    if minutes > 59 {
        return Err(ClockError::MinuteOutOfRange(minutes));
    }
    let meridiem = if hours >= 12 { "PM" } else { "AM" };
    let twelve = match hours % 12 {
        0 => 12,
        h => h,
    };
    Ok(format!("{}:{:02} {}", twelve, minutes, meridiem))
}

/// Read local time from the browser.
pub fn read_wall_clock() -> Result<String, ClockError> {
    let now = js_sys::Date::new_0();
    if now.get_time().is_nan() {
        return Err(ClockError::InvalidDate);
    }
    format_wall_clock(now.get_hours(), now.get_minutes())
}

/// Collapse a clock read into display text, logging failures.
pub fn or_placeholder(reading: Result<String, ClockError>) -> String {
    reading.unwrap_or_else(|e| {
        error!("Error updating time: {}", e);
        CLOCK_PLACEHOLDER.to_string()
    })
}

pub fn current_wall_clock() -> String {
    or_placeholder(read_wall_clock())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twelve_hour_format() {
        assert_eq!(format_wall_clock(0, 5).unwrap(), "12:05 AM");
        assert_eq!(format_wall_clock(9, 30).unwrap(), "9:30 AM");
        assert_eq!(format_wall_clock(12, 0).unwrap(), "12:00 PM");
        assert_eq!(format_wall_clock(23, 59).unwrap(), "11:59 PM");
    }

    #[test]
    fn out_of_range_fields_are_errors() {
        assert_eq!(format_wall_clock(24, 0), Err(ClockError::HourOutOfRange(24)));
        assert_eq!(format_wall_clock(3, 60), Err(ClockError::MinuteOutOfRange(60)));
    }

    #[test]
    fn failure_shows_placeholder() {
        assert_eq!(or_placeholder(Err(ClockError::InvalidDate)), "--:-- --");
        assert_eq!(or_placeholder(Ok("1:00 PM".into())), "1:00 PM");
    }
}
