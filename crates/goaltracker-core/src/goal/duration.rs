//! Human-readable rendering of a number of seconds.
//!
//! Years and months are fixed at 365 and 30 days. Output is meant to be
//! read at a glance, not to be calendar-accurate.

pub const MINUTE: f64 = 60.0;
pub const HOUR: f64 = 60.0 * MINUTE;
pub const DAY: f64 = 24.0 * HOUR;
pub const WEEK: f64 = 7.0 * DAY;
pub const MONTH: f64 = 30.0 * DAY;
pub const YEAR: f64 = 365.0 * DAY;

const UNIT_DELIMITER: &str = ", ";

/// Greedy breakdown of a duration, largest unit first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DurationParts {
    pub years: u64,
    pub months: u64,
    pub weeks: u64,
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl DurationParts {
    /// Split `total_seconds` into units. Fractional seconds are truncated;
    /// zero, negative and NaN inputs give all-zero parts.
    pub fn from_seconds(total_seconds: f64) -> Self {
        if total_seconds.is_nan() || total_seconds <= 0.0 {
            return Self::default();
        }

        let mut rest = total_seconds;
        let mut take = |unit: f64| {
            let count = (rest / unit).floor();
            rest -= count * unit;
            count as u64
        };

        Self {
            years: take(YEAR),
            months: take(MONTH),
            weeks: take(WEEK),
            days: take(DAY),
            hours: take(HOUR),
            minutes: take(MINUTE),
            seconds: take(1.0),
        }
    }

    fn has_clock(&self) -> bool {
        self.hours > 0 || self.minutes > 0 || self.seconds > 0
    }
}

/// Render seconds as e.g. `"2 years, 3 weeks, 4:05:06"`.
///
/// Only non-zero calendar units appear. The `H:MM:SS` group appears when any
/// of its parts is non-zero. A zero or negative duration renders as `""`.
pub fn format_duration(total_seconds: f64) -> String {
    let parts = DurationParts::from_seconds(total_seconds);
    let mut elements = Vec::new();

    for (count, unit) in [
        (parts.years, "years"),
        (parts.months, "months"),
        (parts.weeks, "weeks"),
        (parts.days, "days"),
    ] {
        if count > 0 {
            elements.push(format!("{count} {unit}"));
        }
    }

    if parts.has_clock() {
        elements.push(format!(
            "{}:{:02}:{:02}",
            parts.hours, parts.minutes, parts.seconds
        ));
    }

    elements.join(UNIT_DELIMITER)
}
