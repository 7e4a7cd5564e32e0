mod duration;
mod engine;
mod poller;
mod report;

pub use duration::{format_duration, DurationParts, DAY, HOUR, MINUTE, MONTH, WEEK, YEAR};
pub use engine::{compute_goal, elapsed_seconds, GoalState, GoalTracker, Tick};
pub use poller::{Clock, DisplaySink, LocalClock, Poller, RunSummary};
pub use report::{long_date_time, GoalReport};
