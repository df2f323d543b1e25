//! Calendar quarters and period filtering.
//!
//! Dutch VAT is reported per calendar quarter. Entries carry a plain
//! calendar date; filtering compares the stored year and month fields only,
//! with no timezone conversion anywhere.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::entry::GageEntry;

/// Error returned when a quarter string cannot be parsed.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid quarter: {0}, must be Q1, Q2, Q3, or Q4")]
pub struct ParseQuarterError(pub String);

/// A fixed three-calendar-month reporting period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quarter {
    /// January through March.
    Q1,
    /// April through June.
    Q2,
    /// July through September.
    Q3,
    /// October through December.
    Q4,
}

impl Quarter {
    /// The 1-indexed calendar months belonging to this quarter.
    #[must_use]
    pub const fn months(self) -> [u32; 3] {
        match self {
            Self::Q1 => [1, 2, 3],
            Self::Q2 => [4, 5, 6],
            Self::Q3 => [7, 8, 9],
            Self::Q4 => [10, 11, 12],
        }
    }

    /// Returns true iff the date's calendar year equals `year` and its month
    /// falls in this quarter. Boundary days are inclusive on both ends.
    #[must_use]
    pub fn contains(self, date: NaiveDate, year: i32) -> bool {
        date.year() == year && self.months().contains(&date.month())
    }
}

impl std::fmt::Display for Quarter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Q1 => write!(f, "Q1"),
            Self::Q2 => write!(f, "Q2"),
            Self::Q3 => write!(f, "Q3"),
            Self::Q4 => write!(f, "Q4"),
        }
    }
}

impl std::str::FromStr for Quarter {
    type Err = ParseQuarterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Q1" => Ok(Self::Q1),
            "Q2" => Ok(Self::Q2),
            "Q3" => Ok(Self::Q3),
            "Q4" => Ok(Self::Q4),
            _ => Err(ParseQuarterError(s.to_string())),
        }
    }
}

/// Keeps only the entries dated inside the given quarter of the given year.
#[must_use]
pub fn filter_by_quarter(entries: Vec<GageEntry>, quarter: Quarter, year: i32) -> Vec<GageEntry> {
    entries
        .into_iter()
        .filter(|entry| quarter.contains(entry.date, year))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[rstest]
    #[case(Quarter::Q1, [1, 2, 3])]
    #[case(Quarter::Q2, [4, 5, 6])]
    #[case(Quarter::Q3, [7, 8, 9])]
    #[case(Quarter::Q4, [10, 11, 12])]
    fn test_quarter_month_mapping(#[case] quarter: Quarter, #[case] months: [u32; 3]) {
        assert_eq!(quarter.months(), months);
    }

    #[test]
    fn test_quarter_boundary_days_inclusive() {
        // First day of the first month and last day of the last month.
        assert!(Quarter::Q2.contains(date(2024, 4, 1), 2024));
        assert!(Quarter::Q2.contains(date(2024, 6, 30), 2024));
        // One day outside on either end.
        assert!(!Quarter::Q2.contains(date(2024, 3, 31), 2024));
        assert!(!Quarter::Q2.contains(date(2024, 7, 1), 2024));
    }

    #[test]
    fn test_quarter_checks_year() {
        assert!(Quarter::Q1.contains(date(2024, 1, 15), 2024));
        assert!(!Quarter::Q1.contains(date(2023, 1, 15), 2024));
    }

    #[test]
    fn test_quarter_parse_and_display() {
        for quarter in [Quarter::Q1, Quarter::Q2, Quarter::Q3, Quarter::Q4] {
            assert_eq!(Quarter::from_str(&quarter.to_string()), Ok(quarter));
        }
        assert!(Quarter::from_str("Q5").is_err());
        assert!(Quarter::from_str("q1").is_err());
    }

    #[test]
    fn test_quarter_wire_form() {
        assert_eq!(
            serde_json::to_string(&Quarter::Q3).expect("serializes"),
            "\"Q3\""
        );
    }
}
