//! Error types for timetable-engine operations.

use chrono::{NaiveTime, Weekday};
use thiserror::Error;

use crate::availability::ConflictReport;

#[derive(Error, Debug)]
pub enum ScheduleError {
    /// The candidate interval is zero-length or inverted. Rejected before
    /// any conflict scan runs.
    #[error("Invalid time slot: start {start} is not before end {end}")]
    InvalidSlot { start: NaiveTime, end: NaiveTime },

    /// A multi-day request with no days selected.
    #[error("No days of week selected")]
    NoDaysSelected,

    /// A multi-day request listing the same day more than once. The per-day
    /// checks only scan existing bookings, so duplicate days would insert
    /// mutually overlapping periods behind the commit authority's back.
    #[error("Duplicate day in selection: {0}")]
    DuplicateDay(Weekday),

    /// A store operation referenced a period id that does not exist.
    #[error("Unknown period id: {0}")]
    UnknownPeriod(String),

    /// A commit collided with a booking made after the pre-flight check.
    /// Carries the full report so the caller can render every conflict.
    #[error("Slot no longer available: {} conflict(s) at commit time", .0.conflicts.len())]
    CommitConflict(ConflictReport),
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
