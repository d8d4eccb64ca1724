//! Pre-flight conflict checking for candidate timetable periods.
//!
//! Given a candidate period and a snapshot of the existing bookings, the
//! checker reports every overlap with the teacher's other periods, the
//! classroom's other periods, and the timetable's break times. A conflict is
//! not an error: the caller gets a full [`ConflictReport`] and decides
//! whether to block submission.
//!
//! The check runs against a snapshot and holds no reservation — two
//! concurrent submissions can both pass it. The commit-time authority is
//! [`crate::store::TimetableStore`].

use chrono::{NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};
use crate::types::{BreakTime, Period, PeriodRequest, TimeSlot};

/// Which existing booking a candidate collided with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConflictKind {
    /// The teacher already has a period in this window.
    Teacher,
    /// The classroom is already booked in this window.
    Classroom,
    /// The window overlaps a break time of the timetable.
    BreakTime,
}

/// A detected overlap between the candidate and one existing booking.
///
/// Carries the overlapping booking's interval so the caller can render a
/// human-readable message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conflict {
    pub kind: ConflictKind,
    pub day: Weekday,
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub overlap_minutes: i64,
}

/// Result of an availability check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConflictReport {
    pub is_available: bool,
    /// Every overlap found, across all conflict kinds and checked days —
    /// not just the first.
    pub conflicts: Vec<Conflict>,
}

impl ConflictReport {
    fn from_conflicts(conflicts: Vec<Conflict>) -> Self {
        ConflictReport {
            is_available: conflicts.is_empty(),
            conflicts,
        }
    }
}

/// Check a single-day candidate against the existing bookings.
///
/// `teacher_periods` and `classroom_periods` are the stored periods for the
/// candidate's teacher and classroom (the caller scopes them to the term);
/// `break_times` are the break windows of the candidate's timetable. Items on
/// other days, for other teachers/classrooms, or for other timetables are
/// filtered out here, so passing broader lists is harmless.
///
/// `exclude_period_id` is the id of the period being edited, if any: the
/// stored copy of an edited period must not conflict with its own update.
///
/// # Errors
/// Returns [`ScheduleError::InvalidSlot`] when the candidate's interval is
/// zero-length or inverted. Conflicts are reported in the `Ok` value.
pub fn check_availability(
    candidate: &Period,
    teacher_periods: &[Period],
    classroom_periods: &[Period],
    break_times: &[BreakTime],
    exclude_period_id: Option<&str>,
) -> Result<ConflictReport> {
    let slot = validate_slot(&candidate.slot)?;

    let mut conflicts = Vec::new();
    scan_periods(
        &slot,
        teacher_periods,
        |p| p.teacher_id == candidate.teacher_id,
        exclude_period_id,
        ConflictKind::Teacher,
        &mut conflicts,
    );
    scan_periods(
        &slot,
        classroom_periods,
        |p| p.classroom_id == candidate.classroom_id,
        exclude_period_id,
        ConflictKind::Classroom,
        &mut conflicts,
    );
    scan_breaks(&slot, break_times, &candidate.timetable_id, &mut conflicts);

    Ok(ConflictReport::from_conflicts(conflicts))
}

/// Check a multi-day request: one single-day check per selected day, in the
/// order the days were selected, with the conflicts aggregated.
///
/// The request is available only if every selected day is individually
/// available; days without conflicts contribute nothing to the list.
///
/// # Errors
/// Returns [`ScheduleError::NoDaysSelected`] for an empty day list,
/// [`ScheduleError::DuplicateDay`] when the same day is selected twice, and
/// [`ScheduleError::InvalidSlot`] for a zero-length or inverted interval.
pub fn check_request(
    request: &PeriodRequest,
    teacher_periods: &[Period],
    classroom_periods: &[Period],
    break_times: &[BreakTime],
    exclude_period_id: Option<&str>,
) -> Result<ConflictReport> {
    if request.days.is_empty() {
        return Err(ScheduleError::NoDaysSelected);
    }
    // The per-day checks scan existing bookings only, never the request's
    // other days, so a repeated day would slip past the overlap scan.
    let mut seen = Vec::with_capacity(request.days.len());
    for &day in &request.days {
        if seen.contains(&day) {
            return Err(ScheduleError::DuplicateDay(day));
        }
        seen.push(day);
    }

    let mut conflicts = Vec::new();
    for &day in &request.days {
        let candidate = request.period_for(day);
        let report = check_availability(
            &candidate,
            teacher_periods,
            classroom_periods,
            break_times,
            exclude_period_id,
        )?;
        conflicts.extend(report.conflicts);
    }

    Ok(ConflictReport::from_conflicts(conflicts))
}

fn validate_slot(slot: &TimeSlot) -> Result<TimeSlot> {
    TimeSlot::new(slot.day, slot.start, slot.end)
}

fn scan_periods<F>(
    candidate: &TimeSlot,
    periods: &[Period],
    owner_matches: F,
    exclude_period_id: Option<&str>,
    kind: ConflictKind,
    conflicts: &mut Vec<Conflict>,
) where
    F: Fn(&Period) -> bool,
{
    for period in periods {
        if period.slot.day != candidate.day || !owner_matches(period) {
            continue;
        }
        // Self-exclusion: the stored copy of the period being edited.
        if let (Some(id), Some(excluded)) = (period.id.as_deref(), exclude_period_id) {
            if id == excluded {
                continue;
            }
        }
        if candidate.overlaps(&period.slot) {
            conflicts.push(Conflict {
                kind,
                day: period.slot.day,
                start: period.slot.start,
                end: period.slot.end,
                overlap_minutes: candidate.overlap_minutes(&period.slot),
            });
        }
    }
}

fn scan_breaks(
    candidate: &TimeSlot,
    break_times: &[BreakTime],
    timetable_id: &str,
    conflicts: &mut Vec<Conflict>,
) {
    for bt in break_times {
        if bt.slot.day != candidate.day || bt.timetable_id != timetable_id {
            continue;
        }
        if candidate.overlaps(&bt.slot) {
            conflicts.push(Conflict {
                kind: ConflictKind::BreakTime,
                day: bt.slot.day,
                start: bt.slot.start,
                end: bt.slot.end,
                overlap_minutes: candidate.overlap_minutes(&bt.slot),
            });
        }
    }
}
