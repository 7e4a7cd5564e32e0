//! Goal engine.
//!
//! Goals form a doubling sequence starting at one day: 1d, 2d, 4d, 8d, ...
//! The current goal is the first threshold that elapsed time has not yet
//! passed. Each threshold left behind counts as one goal reached.
//!
//! ## Usage
//!
//! ```ignore
//! let mut tracker = GoalTracker::new(milestone);
//! // Once per second:
//! let tick = tracker.tick(Local::now().naive_local());
//! if let Some(event) = tick.reached { /* play a sound */ }
//! ```

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::duration::DAY;
use crate::dates::MilestoneDate;
use crate::events::Event;

/// Seconds from `milestone` to `now`. Negative when the milestone lies ahead.
pub fn elapsed_seconds(milestone: &MilestoneDate, now: NaiveDateTime) -> f64 {
    let delta = now - milestone.as_naive();
    delta.num_milliseconds() as f64 / 1000.0
}

/// Smallest threshold in {1d, 2d, 4d, ...} not strictly below `elapsed`,
/// with the number of doublings needed to reach it.
///
/// Equality does not advance: exactly one day elapsed is still goal 0.
pub fn compute_goal(elapsed: f64) -> (f64, u32) {
    let mut threshold = DAY;
    let mut crossed = 0u32;
    while threshold < elapsed {
        threshold *= 2.0;
        crossed += 1;
    }
    (threshold, crossed)
}

/// Goal status at one instant. Rebuilt on every tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoalState {
    pub milestone: MilestoneDate,
    pub elapsed_secs: f64,
    pub goal_secs: f64,
    pub goals_reached: u32,
    /// Wall-clock time the current goal falls on. `None` past chrono's range.
    pub goal_at: Option<NaiveDateTime>,
    pub at: NaiveDateTime,
}

impl GoalState {
    pub fn compute(milestone: MilestoneDate, now: NaiveDateTime) -> Self {
        let elapsed_secs = elapsed_seconds(&milestone, now);
        let (goal_secs, goals_reached) = compute_goal(elapsed_secs);
        let goal_at = Duration::try_milliseconds((goal_secs * 1000.0) as i64)
            .and_then(|offset| milestone.as_naive().checked_add_signed(offset));

        Self {
            milestone,
            elapsed_secs,
            goal_secs,
            goals_reached,
            goal_at,
            at: now,
        }
    }

    pub fn remaining_secs(&self) -> f64 {
        self.goal_secs - self.elapsed_secs
    }

    pub fn snapshot(&self) -> Event {
        Event::GoalSnapshot {
            milestone: self.milestone,
            elapsed_secs: self.elapsed_secs,
            goal_secs: self.goal_secs,
            goal_at: self.goal_at,
            remaining_secs: self.remaining_secs(),
            goals_reached: self.goals_reached,
            at: self.at,
        }
    }
}

/// Result of one tick.
#[derive(Debug, Clone)]
pub struct Tick {
    pub state: GoalState,
    /// `Some(Event::GoalReached)` when a new goal was crossed since the last tick.
    pub reached: Option<Event>,
}

/// Tracks goal crossings across ticks for one milestone.
///
/// The first tick never reports a crossing, so resuming a long-running goal
/// does not announce every goal already behind it.
#[derive(Debug, Clone)]
pub struct GoalTracker {
    milestone: MilestoneDate,
    last_reached: Option<u32>,
}

impl GoalTracker {
    pub fn new(milestone: MilestoneDate) -> Self {
        Self {
            milestone,
            last_reached: None,
        }
    }

    pub fn milestone(&self) -> MilestoneDate {
        self.milestone
    }

    pub fn tick(&mut self, now: NaiveDateTime) -> Tick {
        let state = GoalState::compute(self.milestone, now);

        let reached = match self.last_reached {
            Some(previous) if state.goals_reached > previous => Some(Event::GoalReached {
                milestone: self.milestone,
                goals_reached: state.goals_reached,
                next_goal_secs: state.goal_secs,
                at: now,
            }),
            _ => None,
        };
        self.last_reached = Some(state.goals_reached);

        Tick { state, reached }
    }
}
