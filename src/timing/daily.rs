use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

/// A single day's opening window, stored as seconds since midnight.
///
/// A side that failed to parse is `None`, and a window with a missing side never
/// contains any minute.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Daily {
    opening: Option<u32>,
    closing: Option<u32>,
}

impl Daily {
    pub fn from_times(opening: &str, closing: &str) -> Self {
        Self {
            opening: parse_seconds_of_day(opening),
            closing: parse_seconds_of_day(closing),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.opening.is_some() && self.closing.is_some()
    }

    /// Both sides exactly `00:00:00`. Only means "always open" together with a full week.
    pub fn is_midnight_to_midnight(&self) -> bool {
        self.opening == Some(0) && self.closing == Some(0)
    }

    /// Compared at minute resolution. Closing is exclusive and overnight windows wrap
    /// past midnight.
    pub fn contains(&self, minute_of_day: u16) -> bool {
        let (Some(opening), Some(closing)) = (self.opening, self.closing) else {
            return false;
        };
        let (opening, closing, current) = (opening / 60, closing / 60, minute_of_day as u32);
        if closing < opening {
            return current >= opening || current < closing;
        }
        opening <= current && current < closing
    }
}

fn time_regex() -> &'static Regex {
    static TIME_REGEX: OnceLock<Regex> = OnceLock::new();
    TIME_REGEX.get_or_init(|| {
        Regex::new(r"^(\d{1,2}):(\d{2})(?::(\d{2}))?$").expect("time regex is valid")
    })
}

/// Parses `HH:MM:SS` (or `HH:MM`) into seconds since midnight.
/// Out-of-range components give `None`.
pub fn parse_seconds_of_day(text: &str) -> Option<u32> {
    let captures = time_regex().captures(text.trim())?;
    let hour: u32 = captures.get(1)?.as_str().parse().ok()?;
    let minute: u32 = captures.get(2)?.as_str().parse().ok()?;
    let second: u32 = match captures.get(3) {
        Some(second) => second.as_str().parse().ok()?,
        None => 0,
    };
    if hour >= 24 || minute >= 60 || second >= 60 {
        return None;
    }
    Some(hour * 3600 + minute * 60 + second)
}

/// Minutes since midnight, seconds dropped.
pub fn parse_time_of_day(text: &str) -> Option<u16> {
    parse_seconds_of_day(text).map(|seconds| (seconds / 60) as u16)
}

/// 12-hour rendering, e.g. `6:30 PM`, `12:00 AM`.
pub fn format_minutes(minutes: u16) -> String {
    let hour = (minutes / 60) % 24;
    let minute = minutes % 60;
    let suffix = if hour < 12 { "AM" } else { "PM" };
    let hour = match hour % 12 {
        0 => 12,
        hour => hour,
    };
    format!("{}:{:02} {}", hour, minute, suffix)
}

/// Formats a raw `HH:MM:SS` string for display. Malformed input is echoed back trimmed
/// so a message still renders.
pub fn format_time_of_day(text: &str) -> String {
    match parse_time_of_day(text) {
        Some(minutes) => format_minutes(minutes),
        None => text.trim().to_string(),
    }
}

/// Checks `current_minutes` against the opening/closing strings.
///
/// Malformed times count as closed.
pub fn is_within_time_window(opening: &str, closing: &str, current_minutes: u16) -> bool {
    let daily = Daily::from_times(opening, closing);
    if !daily.is_valid() {
        debug!(opening, closing, "Malformed business hours, treating as closed");
        return false;
    }
    daily.contains(current_minutes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_time_strings() {
        assert_eq!(parse_time_of_day("00:00:00"), Some(0));
        assert_eq!(parse_time_of_day("09:30:00"), Some(570));
        assert_eq!(parse_time_of_day("23:59:59"), Some(1439));
        assert_eq!(parse_time_of_day("7:05"), Some(425));
        assert_eq!(parse_time_of_day(" 18:00:00 "), Some(1080));
    }

    #[test]
    fn rejects_malformed_time_strings() {
        assert_eq!(parse_time_of_day(""), None);
        assert_eq!(parse_time_of_day("noon"), None);
        assert_eq!(parse_time_of_day("24:00:00"), None);
        assert_eq!(parse_time_of_day("12:60:00"), None);
        assert_eq!(parse_time_of_day("12:00:75"), None);
        assert_eq!(parse_time_of_day("ab:cd:ef"), None);
        assert_eq!(parse_time_of_day("12"), None);
    }

    #[test]
    fn formats_twelve_hour_clock() {
        assert_eq!(format_minutes(0), "12:00 AM");
        assert_eq!(format_minutes(12 * 60), "12:00 PM");
        assert_eq!(format_minutes(18 * 60 + 30), "6:30 PM");
        assert_eq!(format_minutes(9 * 60 + 5), "9:05 AM");
        assert_eq!(format_minutes(23 * 60 + 59), "11:59 PM");
        assert_eq!(format_time_of_day("17:00:00"), "5:00 PM");
        assert_eq!(format_time_of_day("late"), "late");
    }

    #[test]
    fn overnight_window_wraps_midnight() {
        assert!(is_within_time_window("22:00:00", "02:00:00", 23 * 60 + 30));
        assert!(is_within_time_window("22:00:00", "02:00:00", 60));
        assert!(!is_within_time_window("22:00:00", "02:00:00", 12 * 60));
        assert!(!is_within_time_window("22:00:00", "02:00:00", 2 * 60));
    }

    #[test]
    fn regular_window_excludes_closing_minute() {
        assert!(is_within_time_window("09:00:00", "17:00:00", 9 * 60));
        assert!(is_within_time_window("09:00:00", "17:00:00", 16 * 60 + 59));
        assert!(!is_within_time_window("09:00:00", "17:00:00", 17 * 60));
        assert!(!is_within_time_window("09:00:00", "17:00:00", 8 * 60 + 59));
    }

    #[test]
    fn malformed_window_is_closed() {
        assert!(!is_within_time_window("9am", "17:00:00", 12 * 60));
        assert!(!is_within_time_window("09:00:00", "", 12 * 60));
        assert!(!Daily::from_times("xx", "yy").is_valid());
    }

    #[test]
    fn midnight_pair_is_an_empty_window() {
        let daily = Daily::from_times("00:00:00", "00:00:00");
        assert!(daily.is_midnight_to_midnight());
        assert!(!daily.contains(0));
        assert!(!daily.contains(720));
    }

    #[test]
    fn midnight_pair_compares_seconds() {
        assert!(Daily::from_times("00:00", "00:00:00").is_midnight_to_midnight());
        assert!(!Daily::from_times("00:00:30", "00:00:00").is_midnight_to_midnight());
        assert!(!Daily::from_times("00:00:00", "00:00:59").is_midnight_to_midnight());
        assert_eq!(parse_seconds_of_day("00:00:59"), Some(59));
        assert_eq!(parse_time_of_day("00:00:59"), Some(0));
    }
}
