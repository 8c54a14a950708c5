use chrono::{DateTime, Local, NaiveDate, NaiveTime, TimeDelta, TimeZone};

pub struct TimeUtils;

impl TimeUtils {
    pub const NS_IN_MS: i64 = 1_000_000;
    pub const MS_IN_S: i64 = 1000;
    pub const MS_IN_MIN: i64 = Self::MS_IN_S * 60;
    pub const MS_IN_H: i64 = Self::MS_IN_MIN * 60;
    pub const MS_IN_D: i64 = Self::MS_IN_H * 24;
    /// Human readable month label, e.g. `February 2024`.
    pub const MONTH_LABEL_FORMAT: &str = "%B %Y";
}

/// First valid local instant at (or just after) midnight on `date`.
pub fn local_midnight(date: NaiveDate) -> DateTime<Local> {
    let midnight = date.and_time(NaiveTime::MIN);
    // Walk forward through a DST gap; ambiguous midnights take the earliest instant.
    (0..=4)
        .map(|step| midnight + TimeDelta::minutes(30 * step))
        .find_map(|naive| Local.from_local_datetime(&naive).earliest())
        .unwrap_or_else(|| midnight.and_utc().with_timezone(&Local))
}

pub fn local_now() -> DateTime<Local> {
    Local::now()
}

/// Signed nanoseconds from `earlier` to `later`, saturating far outside a few centuries.
pub fn nanos_between(earlier: DateTime<Local>, later: DateTime<Local>) -> i64 {
    let delta = later.signed_duration_since(earlier);
    delta
        .num_nanoseconds()
        .unwrap_or_else(|| delta.num_milliseconds().saturating_mul(TimeUtils::NS_IN_MS))
}
