use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::dates::MilestoneDate;

/// Every observable change of a running goal produces an Event.
/// The CLI prints them as JSON; notifiers react to `GoalReached`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    /// Full state of a goal at one instant.
    GoalSnapshot {
        milestone: MilestoneDate,
        elapsed_secs: f64,
        goal_secs: f64,
        goal_at: Option<NaiveDateTime>,
        remaining_secs: f64,
        goals_reached: u32,
        at: NaiveDateTime,
    },
    /// A new doubling threshold was crossed since the previous tick.
    GoalReached {
        milestone: MilestoneDate,
        goals_reached: u32,
        next_goal_secs: f64,
        at: NaiveDateTime,
    },
}
