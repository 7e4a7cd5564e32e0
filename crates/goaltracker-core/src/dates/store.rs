//! Flat-file date store.
//!
//! One candidate milestone per line. Malformed lines are kept so the listing
//! can flag them, but they can never be selected.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;

use super::milestone::MilestoneDate;
use crate::error::{DateParseError, Result, SelectionError};

/// A single line of the date store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateLine {
    pub index: usize,
    pub raw: String,
    #[serde(serialize_with = "serialize_parsed")]
    pub parsed: std::result::Result<MilestoneDate, DateParseError>,
}

impl DateLine {
    pub fn new(index: usize, raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let parsed = MilestoneDate::parse_line(&raw);
        Self { index, raw, parsed }
    }

    pub fn date(&self) -> Option<MilestoneDate> {
        self.parsed.as_ref().ok().copied()
    }
}

fn serialize_parsed<S: serde::Serializer>(
    parsed: &std::result::Result<MilestoneDate, DateParseError>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    use serde::ser::SerializeMap;
    let mut map = serializer.serialize_map(Some(1))?;
    match parsed {
        Ok(date) => map.serialize_entry("date", date)?,
        Err(e) => map.serialize_entry("error", &e.to_string())?,
    }
    map.end()
}

/// Storage for milestone dates.
pub struct DateStore {
    path: PathBuf,
}

impl DateStore {
    /// Open the store at `path`, creating an empty file if needed.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        if !path.exists() {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::File::create(&path)?;
            tracing::info!(path = %path.display(), "created empty date store");
        }

        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every line of the store.
    ///
    /// A store deleted since `open` reads as empty.
    pub fn load(&self) -> Result<Vec<DateLine>> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
            Err(e) => return Err(e.into()),
        };

        let lines: Vec<DateLine> = content
            .lines()
            .enumerate()
            .map(|(i, raw)| DateLine::new(i, raw))
            .collect();

        let invalid = lines.iter().filter(|l| l.parsed.is_err()).count();
        if invalid > 0 {
            tracing::debug!(invalid, total = lines.len(), "date store has unparseable lines");
        }
        Ok(lines)
    }

    /// Append a date as a new line.
    pub fn append(&self, date: &MilestoneDate) -> Result<()> {
        let needs_newline = std::fs::read(&self.path)
            .map(|bytes| bytes.last().is_some_and(|b| *b != b'\n'))
            .unwrap_or(false);

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        if needs_newline {
            writeln!(file)?;
        }
        writeln!(file, "{}", date.to_line())?;
        tracing::info!(date = %date, "appended milestone");
        Ok(())
    }
}

/// Resolve the user's index text to a selectable milestone.
pub fn select_date(
    lines: &[DateLine],
    input: &str,
) -> std::result::Result<MilestoneDate, SelectionError> {
    let trimmed = input.trim();
    let index: usize = trimmed
        .parse()
        .map_err(|_| SelectionError::NotANumber(trimmed.to_string()))?;

    let line = lines.get(index).ok_or(SelectionError::OutOfRange {
        index,
        len: lines.len(),
    })?;

    line.date().ok_or(SelectionError::InvalidDate { index })
}
