pub mod clock;
pub mod daily;
pub mod operating_days;
pub mod schedule;
pub mod weekday;

pub use daily::is_within_time_window;
pub use operating_days::{parse_operating_days, OperatingDays};
pub use schedule::{BusinessSchedule, Status, StatusResult};
