//! # GoalTracker Core Library
//!
//! Tracks how long it has been since a milestone date and celebrates
//! "doubling" goals: 1 day, 2 days, 4 days, 8 days, and so on.
//!
//! ## Architecture
//!
//! - **Dates**: flat `year|month|day|hour|minute|second` file, one milestone
//!   per line
//! - **Goal Engine**: elapsed time, the doubling goal sequence, and
//!   human-readable durations
//! - **Poller**: async loop that ticks once per interval until stopped
//! - **Storage**: TOML-based configuration
//!
//! ## Key Components
//!
//! - [`DateStore`]: Milestone date persistence
//! - [`GoalTracker`]: Per-run goal state machine
//! - [`Poller`]: Periodic tick loop with a stop signal
//! - [`Config`]: Application configuration management

pub mod dates;
pub mod error;
pub mod events;
pub mod goal;
pub mod notify;
pub mod storage;

pub use dates::{select_date, DateLine, DateStore, MilestoneDate};
pub use error::{ConfigError, CoreError, DateParseError, SelectionError};
pub use events::Event;
pub use goal::{
    compute_goal, elapsed_seconds, format_duration, Clock, DisplaySink, GoalReport, GoalState,
    GoalTracker, LocalClock, Poller, RunSummary, Tick,
};
pub use notify::{Notifier, SilentNotifier, SoundNotifier};
pub use storage::{Config, NotificationsConfig};
