//! Text rendering of a [`GoalState`] for the live display.

use std::fmt;

use chrono::NaiveDateTime;

use super::duration::format_duration;
use super::engine::GoalState;

const LONG_DATE: &str = "%A, %B %-d, %Y";
const LONG_TIME: &str = "%-I:%M:%S %p";

/// The five display lines of a running goal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoalReport {
    pub current: String,
    pub next_goal: String,
    pub next_goal_date: String,
    pub time_until_goal: String,
    pub goals_reached: u32,
}

impl GoalReport {
    pub fn lines(&self) -> [String; 5] {
        [
            format!("Current:               {}", self.current),
            format!("Next Goal:             {}", self.next_goal),
            format!("Next Goal Date:        {}", self.next_goal_date),
            format!("Time Until Next Goal:  {}", self.time_until_goal),
            format!("Number of Goals:       {}", self.goals_reached),
        ]
    }
}

impl From<&GoalState> for GoalReport {
    fn from(state: &GoalState) -> Self {
        Self {
            current: format_duration(state.elapsed_secs),
            next_goal: format_duration(state.goal_secs),
            next_goal_date: state
                .goal_at
                .map(long_date_time)
                .unwrap_or_else(|| "out of range".to_string()),
            time_until_goal: format_duration(state.remaining_secs()),
            goals_reached: state.goals_reached,
        }
    }
}

impl fmt::Display for GoalReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// e.g. `Thursday, August 4, 2016, 10:30:00 AM`
pub fn long_date_time(at: NaiveDateTime) -> String {
    format!("{}, {}", at.format(LONG_DATE), at.format(LONG_TIME))
}
