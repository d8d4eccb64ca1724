//! In-memory period store that enforces the overlap constraint at commit.
//!
//! The pre-flight check in [`crate::availability`] runs against a snapshot
//! and cannot stop two concurrent submissions from both passing. The store
//! is the commit-time authority: every insert and update re-runs the
//! conflict scan against the live contents under exclusive access, so the
//! second of two racing commits fails with
//! [`ScheduleError::CommitConflict`] instead of double-booking.
//!
//! The store itself takes `&mut self` for mutations; callers that submit
//! from multiple threads share it behind a lock.

use uuid::Uuid;

use crate::availability::{check_availability, check_request, ConflictReport};
use crate::error::{Result, ScheduleError};
use crate::types::{BreakTime, Period, PeriodRequest, TimeSlot};

/// The stored periods and break times of one timetable.
#[derive(Debug, Clone, Default)]
pub struct TimetableStore {
    timetable_id: String,
    periods: Vec<Period>,
    break_times: Vec<BreakTime>,
}

impl TimetableStore {
    pub fn new(timetable_id: impl Into<String>) -> Self {
        TimetableStore {
            timetable_id: timetable_id.into(),
            periods: Vec::new(),
            break_times: Vec::new(),
        }
    }

    pub fn with_break_times(timetable_id: impl Into<String>, break_times: Vec<BreakTime>) -> Self {
        TimetableStore {
            timetable_id: timetable_id.into(),
            periods: Vec::new(),
            break_times,
        }
    }

    pub fn timetable_id(&self) -> &str {
        &self.timetable_id
    }

    /// Every stored period, each with a generated id.
    pub fn periods(&self) -> &[Period] {
        &self.periods
    }

    pub fn break_times(&self) -> &[BreakTime] {
        &self.break_times
    }

    pub fn add_break_time(&mut self, break_time: BreakTime) {
        self.break_times.push(break_time);
    }

    /// Pre-flight check against the current contents.
    ///
    /// Snapshot semantics: a passing check reserves nothing, and the answer
    /// can be stale by the time the caller commits.
    pub fn check(&self, request: &PeriodRequest) -> Result<ConflictReport> {
        check_request(request, &self.periods, &self.periods, &self.break_times, None)
    }

    /// Commit a request: re-check against the live contents and insert one
    /// period per selected day, returning the generated ids in day order.
    ///
    /// The insert is atomic across days — if any selected day conflicts,
    /// nothing is inserted and the full report comes back in
    /// [`ScheduleError::CommitConflict`].
    pub fn create_period(&mut self, request: &PeriodRequest) -> Result<Vec<String>> {
        let report = self.check(request)?;
        if !report.is_available {
            return Err(ScheduleError::CommitConflict(report));
        }

        let mut ids = Vec::with_capacity(request.days.len());
        for &day in &request.days {
            let mut period = request.period_for(day);
            let id = Uuid::new_v4().to_string();
            period.id = Some(id.clone());
            self.periods.push(period);
            ids.push(id);
        }
        Ok(ids)
    }

    /// Move a stored period to a new slot, re-checking with self-exclusion.
    ///
    /// On conflict the store is left unchanged.
    pub fn update_period(&mut self, id: &str, new_slot: TimeSlot) -> Result<()> {
        let index = self
            .position_of(id)
            .ok_or_else(|| ScheduleError::UnknownPeriod(id.to_string()))?;

        let mut candidate = self.periods[index].clone();
        candidate.slot = new_slot;

        let report = check_availability(
            &candidate,
            &self.periods,
            &self.periods,
            &self.break_times,
            Some(id),
        )?;
        if !report.is_available {
            return Err(ScheduleError::CommitConflict(report));
        }

        self.periods[index] = candidate;
        Ok(())
    }

    /// Remove a stored period, returning it.
    pub fn remove_period(&mut self, id: &str) -> Result<Period> {
        let index = self
            .position_of(id)
            .ok_or_else(|| ScheduleError::UnknownPeriod(id.to_string()))?;
        Ok(self.periods.remove(index))
    }

    fn position_of(&self, id: &str) -> Option<usize> {
        self.periods
            .iter()
            .position(|p| p.id.as_deref() == Some(id))
    }
}
