use chrono::{DateTime, Utc};
use chrono_tz::Tz;

/// Current time in the business's timezone.
pub fn now_in(timezone: Tz) -> DateTime<Tz> {
    Utc::now().with_timezone(&timezone)
}

/// `None` when the value is outside chrono's representable range.
pub fn from_epoch_millis(millis: i64, timezone: Tz) -> Option<DateTime<Tz>> {
    DateTime::from_timestamp_millis(millis).map(|timestamp| timestamp.with_timezone(&timezone))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn converts_epoch_millis_into_timezone() {
        // 2024-01-03T09:00:00Z is 10:00 in Lagos
        let timestamp = from_epoch_millis(1_704_272_400_000, chrono_tz::Africa::Lagos).unwrap();
        assert_eq!(timestamp.hour(), 10);
        assert_eq!(timestamp.day(), 3);
    }

    #[test]
    fn rejects_out_of_range_millis() {
        assert!(from_epoch_millis(i64::MAX, chrono_tz::UTC).is_none());
    }
}
