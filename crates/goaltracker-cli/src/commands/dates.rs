use chrono::Local;
use goaltracker_core::{select_date, CoreError, DateLine, GoalReport, GoalState, MilestoneDate};

use super::Overrides;

/// Message shown in place of a line that does not parse.
pub const MSG_BAD_DATE: &str = "The date could not be parsed.";

/// `[i] - <date>` or the bad-date message.
pub fn listing_line(line: &DateLine) -> String {
    match line.date() {
        Some(date) => format!("[{}] - {}", line.index, date),
        None => MSG_BAD_DATE.to_string(),
    }
}

pub fn list(overrides: &Overrides, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let config = overrides.load_config()?;
    let store = overrides.open_store(&config)?;
    let lines = store.load()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&lines)?);
        return Ok(());
    }

    if lines.is_empty() {
        println!("No dates in {}.", store.path().display());
        return Ok(());
    }
    for line in &lines {
        println!("{}", listing_line(line));
    }
    Ok(())
}

pub fn add(overrides: &Overrides, raw: &str) -> Result<(), Box<dyn std::error::Error>> {
    let date = MilestoneDate::parse_line(raw).map_err(CoreError::from)?;

    let config = overrides.load_config()?;
    let store = overrides.open_store(&config)?;
    store.append(&date)?;

    let index = store.load()?.len().saturating_sub(1);
    println!("[{index}] - {date}");
    Ok(())
}

pub fn status(
    overrides: &Overrides,
    index: &str,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = overrides.load_config()?;
    let store = overrides.open_store(&config)?;
    let lines = store.load()?;
    let milestone = select_date(&lines, index)?;

    let state = GoalState::compute(milestone, Local::now().naive_local());
    if json {
        println!("{}", serde_json::to_string_pretty(&state.snapshot())?);
    } else {
        print!("{}", GoalReport::from(&state));
    }
    Ok(())
}
