//! Terminal plumbing for the live display.

use std::io::Write;

use crossterm::cursor::{MoveTo, MoveToNextLine};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::style::Print;
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::{execute, queue};
use goaltracker_core::{DisplaySink, GoalReport};

const STOP_HINT: &str = "Press any key to stop.";

/// Redraws the whole screen on every report.
pub struct TerminalSink<W> {
    out: W,
}

impl<W: Write + Send> TerminalSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write + Send> DisplaySink for TerminalSink<W> {
    fn show(&mut self, report: &GoalReport) -> goaltracker_core::error::Result<()> {
        queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        for line in report.lines() {
            queue!(self.out, Print(line), MoveToNextLine(1))?;
        }
        queue!(self.out, MoveToNextLine(1), Print(STOP_HINT))?;
        self.out.flush()?;
        Ok(())
    }
}

/// Puts the terminal in raw mode until dropped.
pub struct RawModeGuard;

impl RawModeGuard {
    pub fn enable() -> std::io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

/// Block until any key is pressed. Needs raw mode to see single keys.
pub fn wait_for_key() -> std::io::Result<()> {
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(());
            }
        }
    }
}

pub fn clear_screen(out: &mut impl Write) -> std::io::Result<()> {
    execute!(out, Clear(ClearType::All), MoveTo(0, 0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sink_writes_every_line() {
        let report = GoalReport {
            current: "1 days".into(),
            next_goal: "2 days".into(),
            next_goal_date: "Thursday, August 4, 2016, 10:30:00 AM".into(),
            time_until_goal: "1 days".into(),
            goals_reached: 0,
        };

        let mut sink = TerminalSink::new(Vec::new());
        sink.show(&report).unwrap();
        let written = String::from_utf8(sink.into_inner()).unwrap();

        for line in report.lines() {
            assert!(written.contains(&line), "missing {line:?} in {written:?}");
        }
        assert!(written.contains(STOP_HINT));
    }
}
