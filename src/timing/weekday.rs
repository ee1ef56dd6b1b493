use chrono::{DateTime, Datelike, TimeZone, Timelike};

/// Full day names, indexed 0=Sunday..6=Saturday.
pub const DAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

pub const SUNDAY: u8 = 0;
pub const MONDAY: u8 = 1;
pub const SATURDAY: u8 = 6;

/// Maps a day token onto its index.
///
/// Full names and 3-letter abbreviations are accepted, in any case.
/// Returns `None` for anything else.
pub fn day_index(token: &str) -> Option<u8> {
    let token = token.trim().to_lowercase();
    if token.len() < 3 {
        return None;
    }
    DAY_NAMES
        .iter()
        .position(|name| {
            let name = name.to_lowercase();
            token == name || token == name[..3]
        })
        .map(|index| index as u8)
}

pub fn day_name(index: u8) -> &'static str {
    DAY_NAMES[(index % 7) as usize]
}

pub fn weekday_index<T: TimeZone>(timestamp: &DateTime<T>) -> u8 {
    timestamp.weekday().num_days_from_sunday() as u8
}

pub fn minute_of_day<T: TimeZone>(timestamp: &DateTime<T>) -> u16 {
    (timestamp.hour() * 60 + timestamp.minute()) as u16
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn maps_full_names_and_abbreviations() {
        assert_eq!(day_index("Sunday"), Some(0));
        assert_eq!(day_index("sun"), Some(0));
        assert_eq!(day_index("WED"), Some(3));
        assert_eq!(day_index(" saturday "), Some(6));
        assert_eq!(day_index("Thursday"), Some(4));
    }

    #[test]
    fn rejects_partial_or_unknown_tokens() {
        assert_eq!(day_index(""), None);
        assert_eq!(day_index("mo"), None);
        assert_eq!(day_index("tues"), None);
        assert_eq!(day_index("funday"), None);
    }

    #[test]
    fn reads_weekday_and_minutes_from_timestamp() {
        // 2024-01-03 was a Wednesday
        let timestamp = Utc.with_ymd_and_hms(2024, 1, 3, 18, 45, 10).unwrap();
        assert_eq!(weekday_index(&timestamp), 3);
        assert_eq!(minute_of_day(&timestamp), 18 * 60 + 45);
        assert_eq!(day_name(weekday_index(&timestamp)), "Wednesday");
    }
}
