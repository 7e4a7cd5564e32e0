//! Interactive mode: pick a milestone, then watch it until a key is pressed.
//!
//! ```text
//! Selecting --(valid index)--> Running --(any key)--> Stopped
//! ```

use std::io::{BufRead, Write};

use goaltracker_core::{
    notify, select_date, DateLine, GoalTracker, LocalClock, MilestoneDate, Poller,
};
use tokio::sync::oneshot;

use super::dates::listing_line;
use super::Overrides;
use crate::terminal::{clear_screen, wait_for_key, RawModeGuard, TerminalSink};

pub fn run(overrides: &Overrides) -> Result<(), Box<dyn std::error::Error>> {
    let config = overrides.load_config()?;
    let store = overrides.open_store(&config)?;
    let lines = store.load()?;

    if lines.is_empty() {
        println!(
            "No dates in {}. Add one with `goaltracker add \"year|month|day|hour|minute|second\"`.",
            store.path().display()
        );
        return Ok(());
    }

    let stdin = std::io::stdin();
    let Some(milestone) = prompt_for_date(&lines, &mut stdin.lock(), &mut std::io::stdout())?
    else {
        return Ok(());
    };
    tracing::info!(%milestone, "milestone selected");

    let notifier = notify::from_config(&config.notifications);
    let poller = Poller::new(
        GoalTracker::new(milestone),
        LocalClock,
        notifier,
        TerminalSink::new(std::io::stdout()),
    )
    .with_interval(config.tick_interval());

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async move {
        let _raw = RawModeGuard::enable()?;
        let (stop_tx, stop_rx) = oneshot::channel();
        let mut polling = tokio::spawn(poller.run(stop_rx));
        let key = tokio::task::spawn_blocking(wait_for_key);

        tokio::select! {
            finished = &mut polling => {
                finished??;
            }
            pressed = key => {
                pressed??;
                let _ = stop_tx.send(());
                polling.await??;
            }
        }
        Ok::<(), Box<dyn std::error::Error>>(())
    })?;

    // The key reader may still be blocked if polling ended on its own.
    runtime.shutdown_background();
    println!();
    Ok(())
}

/// Re-prompt until a selectable index is entered. `None` on end of input.
fn prompt_for_date(
    lines: &[DateLine],
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<Option<MilestoneDate>, Box<dyn std::error::Error>> {
    let mut last_error: Option<String> = None;

    loop {
        clear_screen(out)?;
        for line in lines {
            writeln!(out, "{}", listing_line(line))?;
        }
        writeln!(out)?;
        if let Some(message) = last_error.take() {
            writeln!(out, "{message}")?;
        }
        write!(out, "> ")?;
        out.flush()?;

        let mut choice = String::new();
        if input.read_line(&mut choice)? == 0 {
            return Ok(None);
        }

        match select_date(lines, &choice) {
            Ok(date) => return Ok(Some(date)),
            Err(e) => {
                tracing::debug!(error = %e, "rejected selection");
                last_error = Some(e.to_string());
            }
        }
    }
}
