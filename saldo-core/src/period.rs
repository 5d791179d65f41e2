use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Inclusive calendar-date reporting window.
///
/// Statement math compares dates at day granularity only.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Period {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// Raised when a window's end precedes its start.
#[derive(Clone, Copy, Debug, Error, Eq, PartialEq)]
#[error("period start {start} is after end {end}")]
pub struct PeriodError {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Period {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, PeriodError> {
        if end < start {
            return Err(PeriodError { start, end });
        }
        Ok(Self { start, end })
    }

    /// Whether the date falls inside the window, both ends inclusive.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn rejects_inverted_window() {
        assert!(Period::new(date(2025, 2, 1), date(2025, 1, 1)).is_err());
    }

    #[test]
    fn contains_is_inclusive_on_both_ends() {
        let period = Period::new(date(2025, 1, 1), date(2025, 1, 31)).unwrap();
        assert!(period.contains(date(2025, 1, 1)));
        assert!(period.contains(date(2025, 1, 31)));
        assert!(!period.contains(date(2024, 12, 31)));
        assert!(!period.contains(date(2025, 2, 1)));
    }

    #[test]
    fn single_day_window_is_valid() {
        let day = date(2025, 3, 15);
        let period = Period::new(day, day).unwrap();
        assert!(period.contains(day));
    }
}
