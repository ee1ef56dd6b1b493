use chrono::{DateTime, TimeZone};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use super::{
    clock::from_epoch_millis,
    daily::{format_time_of_day, is_within_time_window, Daily},
    operating_days::{parse_operating_days, OperatingDays},
    weekday::{day_name, minute_of_day, weekday_index},
};

/// A business's declared hours as they arrive from the listing.
///
/// The strings are kept as received. Parsing happens on each query so that a
/// malformed field only affects the answer, never the listing itself.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessSchedule {
    pub opening_time: String,
    pub closing_time: String,
    #[serde(default)]
    pub business_days: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Open,
    Closed,
    Inactive,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusResult {
    pub is_open: bool,
    pub status: Status,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub next_change_time: Option<String>,
}

impl StatusResult {
    fn open(message: String, next_change_time: Option<String>) -> Self {
        Self {
            is_open: true,
            status: Status::Open,
            message,
            next_change_time,
        }
    }

    fn closed(message: String, next_change_time: Option<String>) -> Self {
        Self {
            is_open: false,
            status: Status::Closed,
            message,
            next_change_time,
        }
    }

    fn inactive() -> Self {
        Self {
            is_open: false,
            status: Status::Inactive,
            message: "Business is currently inactive".to_string(),
            next_change_time: None,
        }
    }
}

impl BusinessSchedule {
    pub fn new(
        opening_time: &str,
        closing_time: &str,
        business_days: &str,
        is_active: bool,
    ) -> Self {
        Self {
            opening_time: opening_time.to_string(),
            closing_time: closing_time.to_string(),
            business_days: business_days.to_string(),
            is_active,
        }
    }

    pub fn operating_days(&self) -> OperatingDays {
        parse_operating_days(&self.business_days)
    }

    pub fn daily(&self) -> Daily {
        Daily::from_times(&self.opening_time, &self.closing_time)
    }

    /// Midnight-to-midnight on all seven days.
    pub fn is_round_the_clock(&self) -> bool {
        self.daily().is_midnight_to_midnight() && self.operating_days().is_full_week()
    }

    pub fn is_open_at<T: TimeZone>(&self, timestamp: &DateTime<T>) -> bool {
        if !self.is_active {
            return false;
        }
        let days = self.operating_days();
        if !days.contains(weekday_index(timestamp)) {
            return false;
        }
        if days.is_full_week() && self.daily().is_midnight_to_midnight() {
            return true;
        }
        is_within_time_window(
            &self.opening_time,
            &self.closing_time,
            minute_of_day(timestamp),
        )
    }

    /// Forward-looking check for scheduled orders. Same answer as
    /// [`is_open_at`](Self::is_open_at) for the same instant.
    pub fn will_be_open_at<T: TimeZone>(&self, target: &DateTime<T>) -> bool {
        self.is_open_at(target)
    }

    pub fn status_at<T: TimeZone>(&self, timestamp: &DateTime<T>) -> StatusResult {
        if !self.is_active {
            return StatusResult::inactive();
        }
        if self.is_round_the_clock() {
            return StatusResult::open("Open 24/7".to_string(), None);
        }

        if self.is_open_at(timestamp) {
            return StatusResult::open(
                format!("Open until {}", format_time_of_day(&self.closing_time)),
                Some(self.closing_time.clone()),
            );
        }

        let opening = format_time_of_day(&self.opening_time);
        let days = self.operating_days();
        let today = weekday_index(timestamp);
        if !days.contains(today) {
            // Unreachable, parsing never yields an empty set
            let next_day = days.next_after(today).unwrap_or(today);
            return StatusResult::closed(
                format!("Closed today. Opens {} at {}", day_name(next_day), opening),
                None,
            );
        }
        StatusResult::closed(
            format!("Closed. Opens at {}", opening),
            Some(self.opening_time.clone()),
        )
    }

    /// `"<businessDays>: <opening> - <closing>"`, or `"Open 24/7"`.
    pub fn hours_label(&self, twenty_four_hours: bool) -> String {
        if twenty_four_hours || self.is_round_the_clock() {
            return "Open 24/7".to_string();
        }
        format!(
            "{}: {} - {}",
            self.business_days,
            format_time_of_day(&self.opening_time),
            format_time_of_day(&self.closing_time)
        )
    }

    pub fn is_open_now_millis(&self, now_millis: i64, timezone: Tz) -> Option<bool> {
        from_epoch_millis(now_millis, timezone).map(|now| self.is_open_at(&now))
    }

    pub fn will_be_open_at_millis(&self, target_millis: i64, timezone: Tz) -> Option<bool> {
        from_epoch_millis(target_millis, timezone).map(|target| self.will_be_open_at(&target))
    }

    pub fn status_millis(&self, now_millis: i64, timezone: Tz) -> Option<StatusResult> {
        from_epoch_millis(now_millis, timezone).map(|now| self.status_at(&now))
    }
}
