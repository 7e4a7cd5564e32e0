//! Periodic goal polling.
//!
//! A [`Poller`] owns everything a running goal needs. It ticks once right
//! away, then once per interval, until the stop signal fires.
//!
//! ```text
//! Running --(stop signal | sender dropped)--> Stopped
//! ```

use std::time::Duration;

use chrono::{Local, NaiveDateTime};
use tokio::sync::oneshot;
use tokio::time::MissedTickBehavior;

use super::engine::GoalTracker;
use super::report::GoalReport;
use crate::error::Result;
use crate::notify::Notifier;

/// Source of "now" for each tick.
pub trait Clock: Send {
    fn now(&self) -> NaiveDateTime;
}

/// Local wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

impl<F> Clock for F
where
    F: Fn() -> NaiveDateTime + Send,
{
    fn now(&self) -> NaiveDateTime {
        self()
    }
}

/// Receives a fresh report on every tick.
pub trait DisplaySink: Send {
    fn show(&mut self, report: &GoalReport) -> Result<()>;
}

/// Counters for a finished run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub ticks: u64,
    pub notifications: u64,
}

pub struct Poller<C, N, S> {
    tracker: GoalTracker,
    clock: C,
    notifier: N,
    sink: S,
    interval: Duration,
}

impl<C, N, S> Poller<C, N, S>
where
    C: Clock,
    N: Notifier,
    S: DisplaySink,
{
    pub fn new(tracker: GoalTracker, clock: C, notifier: N, sink: S) -> Self {
        Self {
            tracker,
            clock,
            notifier,
            sink,
            interval: Duration::from_secs(1),
        }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Tick until `stop` fires or its sender is dropped.
    ///
    /// A sink failure ends the run. A notifier failure is only logged at
    /// debug level, since stderr shares the terminal with the display.
    pub async fn run(mut self, mut stop: oneshot::Receiver<()>) -> Result<RunSummary> {
        let mut interval = tokio::time::interval(self.interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let mut summary = RunSummary::default();

        tracing::info!(milestone = %self.tracker.milestone(), "goal polling started");
        loop {
            tokio::select! {
                biased;
                _ = &mut stop => break,
                _ = interval.tick() => {
                    self.tick_once(&mut summary)?;
                }
            }
        }
        tracing::info!(
            ticks = summary.ticks,
            notifications = summary.notifications,
            "goal polling stopped"
        );

        Ok(summary)
    }

    fn tick_once(&mut self, summary: &mut RunSummary) -> Result<()> {
        let tick = self.tracker.tick(self.clock.now());
        summary.ticks += 1;

        if let Some(event) = tick.reached {
            tracing::info!(goals = tick.state.goals_reached, "goal reached");
            summary.notifications += 1;
            if let Err(e) = self.notifier.notify(&event) {
                tracing::debug!(error = %e, "goal notification failed");
            }
        }

        self.sink.show(&GoalReport::from(&tick.state))
    }
}
