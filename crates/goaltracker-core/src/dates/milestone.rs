//! Milestone dates and their pipe-delimited line format.
//!
//! A line looks like `2016|8|2|10|30|0`: year, month, day, hour, minute,
//! second. Fields are plain integers without padding.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::DateParseError;

/// Separator between the six fields of a date line.
pub const FIELD_DELIMITER: char = '|';

const FIELD_NAMES: [&str; 6] = ["year", "month", "day", "hour", "minute", "second"];

/// Reference timestamp that elapsed time and goals are measured from.
///
/// Interpreted in local wall-clock time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MilestoneDate(NaiveDateTime);

impl MilestoneDate {
    pub fn new(at: NaiveDateTime) -> Self {
        Self(at)
    }

    /// Build from calendar fields, rejecting impossible dates and times.
    pub fn from_fields(
        year: i64,
        month: i64,
        day: i64,
        hour: i64,
        minute: i64,
        second: i64,
    ) -> Result<Self, DateParseError> {
        let invalid = || DateParseError::InvalidCalendar {
            year,
            month,
            day,
            hour,
            minute,
            second,
        };

        let date = match (i32::try_from(year), u32::try_from(month), u32::try_from(day)) {
            (Ok(y), Ok(m), Ok(d)) => NaiveDate::from_ymd_opt(y, m, d),
            _ => None,
        }
        .ok_or_else(invalid)?;

        let at = match (u32::try_from(hour), u32::try_from(minute), u32::try_from(second)) {
            (Ok(h), Ok(mi), Ok(s)) => date.and_hms_opt(h, mi, s),
            _ => None,
        }
        .ok_or_else(invalid)?;

        Ok(Self(at))
    }

    /// Parse a `year|month|day|hour|minute|second` line.
    pub fn parse_line(line: &str) -> Result<Self, DateParseError> {
        let fields: Vec<&str> = line.split(FIELD_DELIMITER).collect();
        if fields.len() != FIELD_NAMES.len() {
            return Err(DateParseError::FieldCount {
                found: fields.len(),
            });
        }

        let mut values = [0i64; 6];
        for (slot, (raw, name)) in values.iter_mut().zip(fields.iter().zip(FIELD_NAMES)) {
            let trimmed = raw.trim();
            *slot = trimmed
                .parse::<i64>()
                .map_err(|_| DateParseError::InvalidField {
                    field: name,
                    value: trimmed.to_string(),
                })?;
        }

        let [year, month, day, hour, minute, second] = values;
        Self::from_fields(year, month, day, hour, minute, second)
    }

    /// Format back into the store's line format.
    pub fn to_line(&self) -> String {
        let d = FIELD_DELIMITER;
        format!(
            "{}{d}{}{d}{}{d}{}{d}{}{d}{}",
            self.0.year(),
            self.0.month(),
            self.0.day(),
            self.0.hour(),
            self.0.minute(),
            self.0.second(),
        )
    }

    pub fn as_naive(&self) -> NaiveDateTime {
        self.0
    }
}

impl FromStr for MilestoneDate {
    type Err = DateParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_line(s)
    }
}

impl fmt::Display for MilestoneDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d %H:%M:%S"))
    }
}

impl From<NaiveDateTime> for MilestoneDate {
    fn from(at: NaiveDateTime) -> Self {
        Self(at)
    }
}
