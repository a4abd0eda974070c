//! Calendar month key ("YYYY-MM")
//!
//! Budgets are keyed by month and reports group transactions by the month
//! their date falls in.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// A year-month pair, ordered chronologically
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    year: i32,
    month: u32,
}

impl MonthKey {
    /// Create a month key; `month` must be in 1..=12
    pub fn new(year: i32, month: u32) -> Option<Self> {
        if (1..=12).contains(&month) && (0..=9999).contains(&year) {
            Some(Self { year, month })
        } else {
            None
        }
    }

    /// The month a date falls in
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The current local month
    pub fn current() -> Self {
        Self::from_date(chrono::Local::now().date_naive())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Check if a date falls within this month
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// Full English month name ("May")
    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[(self.month - 1) as usize]
    }

    /// Human-readable label ("May 2024")
    pub fn label(&self) -> String {
        format!("{} {}", self.month_name(), self.year)
    }

    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    pub fn prev(&self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// Parse a "YYYY-MM" string
    pub fn parse(s: &str) -> Result<Self, MonthParseError> {
        let s = s.trim();
        let invalid = || MonthParseError::InvalidFormat(s.to_string());

        let (year_str, month_str) = s.split_once('-').ok_or_else(invalid)?;
        if year_str.len() != 4 || month_str.len() != 2 {
            return Err(invalid());
        }

        let year: i32 = year_str.parse().map_err(|_| invalid())?;
        let month: u32 = month_str.parse().map_err(|_| invalid())?;

        Self::new(year, month).ok_or_else(invalid)
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for MonthKey {
    type Err = MonthParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for MonthKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MonthKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        MonthKey::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Error type for month parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonthParseError {
    InvalidFormat(String),
}

impl fmt::Display for MonthParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat(s) => write!(f, "Invalid month '{}', expected YYYY-MM", s),
        }
    }
}

impl std::error::Error for MonthParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let key = MonthKey::parse("2024-05").unwrap();
        assert_eq!(key.year(), 2024);
        assert_eq!(key.month(), 5);
        assert_eq!(key.to_string(), "2024-05");
        assert_eq!(key.label(), "May 2024");
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(MonthKey::parse("").is_err());
        assert!(MonthKey::parse("2024-13").is_err());
        assert!(MonthKey::parse("2024-00").is_err());
        assert!(MonthKey::parse("2024-5").is_err());
        assert!(MonthKey::parse("24-05").is_err());
        assert!(MonthKey::parse("2024/05").is_err());
        assert!(MonthKey::parse("2024-05-01").is_err());
    }

    #[test]
    fn test_from_date_truncates() {
        let date = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        let key = MonthKey::from_date(date);
        assert_eq!(key.to_string(), "2024-12");
        assert!(key.contains(date));
        assert!(!key.contains(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()));
    }

    #[test]
    fn test_ordering_is_chronological() {
        let mut keys = vec![
            MonthKey::parse("2024-10").unwrap(),
            MonthKey::parse("2023-12").unwrap(),
            MonthKey::parse("2024-02").unwrap(),
        ];
        keys.sort();
        let labels: Vec<_> = keys.iter().map(|k| k.to_string()).collect();
        assert_eq!(labels, vec!["2023-12", "2024-02", "2024-10"]);
    }

    #[test]
    fn test_next_prev_wrap_years() {
        let dec = MonthKey::parse("2024-12").unwrap();
        assert_eq!(dec.next().to_string(), "2025-01");
        assert_eq!(dec.next().prev(), dec);
        assert_eq!(MonthKey::parse("2024-01").unwrap().prev().to_string(), "2023-12");
    }

    #[test]
    fn test_serialization_as_string() {
        let key = MonthKey::parse("2024-05").unwrap();
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, "\"2024-05\"");
        let back: MonthKey = serde_json::from_str(&json).unwrap();
        assert_eq!(back, key);
        assert!(serde_json::from_str::<MonthKey>("\"May\"").is_err());
    }
}
