//! Hours engine, exercised through the public library surface.

use chrono::{Duration, TimeZone, Utc};
use chrono_tz::Africa::Lagos;
use storefront_core::timing::{
    is_within_time_window, parse_operating_days, BusinessSchedule, Status,
};

#[test]
fn day_ranges_and_keywords() {
    assert_eq!(parse_operating_days("Fri - Mon").indices(), vec![0, 1, 5, 6]);
    assert!(parse_operating_days("Mon - Sun").is_full_week());
    assert_eq!(parse_operating_days("Tue - Thu").indices(), vec![2, 3, 4]);

    for text in ["24/7", "Daily", "EveryDay", "", "blah"] {
        assert!(parse_operating_days(text).is_full_week(), "{text}");
    }
}

#[test]
fn overnight_window() {
    assert!(is_within_time_window("22:00:00", "02:00:00", 23 * 60 + 30));
    assert!(is_within_time_window("22:00:00", "02:00:00", 60));
    assert!(!is_within_time_window("22:00:00", "02:00:00", 12 * 60));
}

#[test]
fn weekday_business_status() {
    let schedule = BusinessSchedule::new("09:00:00", "17:00:00", "Mon - Fri", true);

    // Wednesday 10:00 Lagos
    let wednesday = Lagos.with_ymd_and_hms(2024, 1, 3, 10, 0, 0).unwrap();
    let status = schedule.status_at(&wednesday);
    assert!(status.is_open);
    assert!(status.message.contains("Open until 5:00 PM"));

    let saturday = Lagos.with_ymd_and_hms(2024, 1, 6, 10, 0, 0).unwrap();
    let status = schedule.status_at(&saturday);
    assert!(!status.is_open);
    assert!(status.message.starts_with("Closed today"));
    assert!(status.message.contains("Monday"));
    assert!(status.message.contains("9:00 AM"));
}

#[test]
fn wrapping_days_next_opening() {
    let schedule = BusinessSchedule::new("12:00:00", "23:00:00", "Fri - Mon", true);
    // Wednesday
    let timestamp = Utc.with_ymd_and_hms(2024, 1, 3, 13, 0, 0).unwrap();
    assert_eq!(
        schedule.status_at(&timestamp).message,
        "Closed today. Opens Friday at 12:00 PM"
    );
    // Sunday
    let timestamp = Utc.with_ymd_and_hms(2024, 1, 7, 13, 0, 0).unwrap();
    assert!(schedule.is_open_at(&timestamp));
}

#[test]
fn round_the_clock_sentinel() {
    let schedule = BusinessSchedule::new("00:00:00", "00:00:00", "24/7", true);
    let start = Lagos.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    for step in 0..(7 * 24) {
        let timestamp = start + Duration::hours(step);
        assert!(schedule.is_open_at(&timestamp));
        assert_eq!(schedule.status_at(&timestamp).message, "Open 24/7");
    }
}

#[test]
fn inactive_overrides_everything() {
    for business_days in ["24/7", "Mon - Fri", "Sat"] {
        let schedule = BusinessSchedule::new("00:00:00", "00:00:00", business_days, false);
        let timestamp = Utc.with_ymd_and_hms(2024, 1, 6, 12, 0, 0).unwrap();
        assert!(!schedule.is_open_at(&timestamp));
        assert_eq!(schedule.status_at(&timestamp).status, Status::Inactive);
    }
}

#[test]
fn epoch_millis_entry_points_agree() {
    let schedule = BusinessSchedule::new("09:00:00", "17:00:00", "Mon - Fri", true);
    // 2024-01-03T09:00:00Z, 10:00 in Lagos
    let millis = 1_704_272_400_000;
    assert_eq!(schedule.is_open_now_millis(millis, Lagos), Some(true));
    assert_eq!(schedule.will_be_open_at_millis(millis, Lagos), Some(true));
    assert_eq!(
        schedule.status_millis(millis, Lagos).map(|status| status.message),
        Some("Open until 5:00 PM".to_string())
    );
    // 08:30 UTC is 09:30 in Lagos but still closed in UTC
    let millis = millis - 30 * 60 * 1000;
    assert_eq!(schedule.is_open_now_millis(millis, Lagos), Some(true));
    assert_eq!(schedule.is_open_now_millis(millis, chrono_tz::UTC), Some(false));
}
