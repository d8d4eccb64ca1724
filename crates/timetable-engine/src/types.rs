//! Core timetable data types.
//!
//! All time values are wall-clock times of day (`NaiveTime`) on a day-of-week
//! axis — a weekly-recurring schedule has no calendar dates. Slots are
//! half-open `[start, end)`, so a period ending at 10:00 and one starting at
//! 10:00 can sit back to back without conflicting.

use chrono::{NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};

/// A half-open time range `[start, end)` on a single day of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub day: Weekday,
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl TimeSlot {
    /// Build a slot, rejecting zero-length or inverted ranges.
    pub fn new(day: Weekday, start: NaiveTime, end: NaiveTime) -> Result<Self> {
        if start >= end {
            return Err(ScheduleError::InvalidSlot { start, end });
        }
        Ok(TimeSlot { day, start, end })
    }

    /// Half-open overlap test: slots on different days never overlap, and
    /// `a.end == b.start` (back to back) is not an overlap.
    pub fn overlaps(&self, other: &TimeSlot) -> bool {
        self.day == other.day && self.start < other.end && other.start < self.end
    }

    /// Length of the overlap with `other` in whole minutes.
    ///
    /// Only meaningful when [`overlaps`](Self::overlaps) holds.
    pub fn overlap_minutes(&self, other: &TimeSlot) -> i64 {
        let overlap_start = self.start.max(other.start);
        let overlap_end = self.end.min(other.end);
        (overlap_end - overlap_start).num_minutes()
    }

    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }
}

/// A single scheduled teaching slot within a timetable.
///
/// `id` is `None` for a candidate that has not been created yet and `Some`
/// for a stored period; on edit the stored id is passed as the exclusion so
/// a period does not conflict with itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Period {
    pub id: Option<String>,
    pub slot: TimeSlot,
    pub teacher_id: String,
    pub classroom_id: String,
    pub subject_id: String,
    pub timetable_id: String,
}

/// The kind of recurring non-teaching interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BreakKind {
    ShortBreak,
    LunchBreak,
}

/// A recurring non-teaching interval that blocks scheduling for every
/// teacher and classroom under the owning timetable on that day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakTime {
    pub slot: TimeSlot,
    pub kind: BreakKind,
    pub timetable_id: String,
}

/// A multi-day candidate as submitted by the scheduling form: one time range
/// applied to every selected day of the week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodRequest {
    pub days: Vec<Weekday>,
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub teacher_id: String,
    pub classroom_id: String,
    pub subject_id: String,
    pub timetable_id: String,
}

impl PeriodRequest {
    /// The single-day candidate for one selected day, with no identity yet.
    pub fn period_for(&self, day: Weekday) -> Period {
        Period {
            id: None,
            slot: TimeSlot {
                day,
                start: self.start,
                end: self.end,
            },
            teacher_id: self.teacher_id.clone(),
            classroom_id: self.classroom_id.clone(),
            subject_id: self.subject_id.clone(),
            timetable_id: self.timetable_id.clone(),
        }
    }
}
