use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::utils::TimeUtils;
use crate::utils::time_utils::local_now;

/// Why a `YYYY-MM` string was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonthParseError {
    /// Input was empty or whitespace
    Empty,
    /// Not of the shape `YYYY-MM`
    Malformed(String),
    /// Month number outside 1..=12
    MonthOutOfRange(u32),
    /// Year chrono cannot represent
    YearOutOfRange(i32),
}

impl fmt::Display for MonthParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthParseError::Empty => write!(f, "No month given (expected YYYY-MM)"),
            MonthParseError::Malformed(text) => {
                write!(f, "'{}' is not a month (expected YYYY-MM)", text)
            }
            MonthParseError::MonthOutOfRange(m) => write!(f, "Month {} is not in 1..=12", m),
            MonthParseError::YearOutOfRange(y) => write!(f, "Year {} is out of range", y),
        }
    }
}

impl std::error::Error for MonthParseError {}

/// A calendar month the ticker spreads the salary over.
///
/// Construction always validates, so every `TargetMonth` has a real first day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct TargetMonth {
    year: i32,
    month: u32,
}

impl TargetMonth {
    pub fn new(year: i32, month: u32) -> Result<Self, MonthParseError> {
        if !(1..=12).contains(&month) {
            return Err(MonthParseError::MonthOutOfRange(month));
        }
        if NaiveDate::from_ymd_opt(year, month, 1).is_none() {
            return Err(MonthParseError::YearOutOfRange(year));
        }
        Ok(Self { year, month })
    }

    /// The month containing "now" on the local wall clock.
    pub fn current() -> Self {
        let today = local_now().date_naive();
        Self {
            year: today.year(),
            month: today.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn first_day(&self) -> NaiveDate {
        // Validated in `new`
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    /// Month after this one, rolling December into January.
    pub fn next(&self) -> Self {
        let (year, month) = if self.month == 12 {
            (self.year + 1, 1)
        } else {
            (self.year, self.month + 1)
        };
        Self::new(year, month).unwrap_or(*self)
    }

    pub fn prev(&self) -> Self {
        let (year, month) = if self.month == 1 {
            (self.year - 1, 12)
        } else {
            (self.year, self.month - 1)
        };
        Self::new(year, month).unwrap_or(*self)
    }

    pub fn days_in_month(&self) -> i64 {
        self.next()
            .first_day()
            .signed_duration_since(self.first_day())
            .num_days()
    }

    /// e.g. "February 2024"
    pub fn label(&self) -> String {
        self.first_day()
            .format(TimeUtils::MONTH_LABEL_FORMAT)
            .to_string()
    }
}

impl Default for TargetMonth {
    fn default() -> Self {
        Self::current()
    }
}

impl fmt::Display for TargetMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for TargetMonth {
    type Err = MonthParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        if text.is_empty() {
            return Err(MonthParseError::Empty);
        }

        let malformed = || MonthParseError::Malformed(text.to_string());
        let (year_text, month_text) = text.split_once('-').ok_or_else(malformed)?;
        if year_text.is_empty() || month_text.is_empty() || month_text.len() > 2 {
            return Err(malformed());
        }
        let all_digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());
        if !all_digits(year_text) || !all_digits(month_text) {
            return Err(malformed());
        }

        let year: i32 = year_text.parse().map_err(|_| malformed())?;
        let month: u32 = month_text.parse().map_err(|_| malformed())?;
        Self::new(year, month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_year_month() {
        let month: TargetMonth = "2024-02".parse().unwrap();
        assert_eq!(month.year(), 2024);
        assert_eq!(month.month(), 2);
        assert_eq!(month.to_string(), "2024-02");
    }

    #[test]
    fn accepts_single_digit_month_and_whitespace() {
        let month: TargetMonth = " 2024-7 ".parse().unwrap();
        assert_eq!(month, TargetMonth::new(2024, 7).unwrap());
    }

    #[test]
    fn rejects_malformed_input() {
        assert_eq!("".parse::<TargetMonth>(), Err(MonthParseError::Empty));
        assert!(matches!(
            "2024/02".parse::<TargetMonth>(),
            Err(MonthParseError::Malformed(_))
        ));
        assert!(matches!(
            "2024-xx".parse::<TargetMonth>(),
            Err(MonthParseError::Malformed(_))
        ));
        assert!(matches!(
            "-2024-02".parse::<TargetMonth>(),
            Err(MonthParseError::Malformed(_))
        ));
        assert_eq!(
            "2024-13".parse::<TargetMonth>(),
            Err(MonthParseError::MonthOutOfRange(13))
        );
        assert_eq!(
            "2024-00".parse::<TargetMonth>(),
            Err(MonthParseError::MonthOutOfRange(0))
        );
    }

    #[test]
    fn next_and_prev_roll_over_year() {
        let dec = TargetMonth::new(2023, 12).unwrap();
        assert_eq!(dec.next(), TargetMonth::new(2024, 1).unwrap());
        assert_eq!(dec.next().prev(), dec);
    }

    #[test]
    fn leap_february_has_29_days() {
        assert_eq!(TargetMonth::new(2024, 2).unwrap().days_in_month(), 29);
        assert_eq!(TargetMonth::new(2023, 2).unwrap().days_in_month(), 28);
    }

    #[test]
    fn label_is_month_name_and_year() {
        assert_eq!(TargetMonth::new(2024, 2).unwrap().label(), "February 2024");
    }
}
