//! # timetable-engine
//!
//! Conflict checking for school timetable periods.
//!
//! A candidate teaching period (time window, day(s) of week, teacher,
//! classroom) is checked against the existing periods and break times of its
//! timetable context. Overlap is half-open interval overlap on a shared
//! day-of-week: back-to-back periods are legal. Every conflict found is
//! reported, tagged by source (teacher booking, classroom booking, or break
//! time), so the caller can render all relevant messages at once.
//!
//! ## Modules
//!
//! - [`availability`] — pre-flight conflict scan over a booking snapshot
//! - [`store`] — commit-time authority that re-checks under exclusive access
//! - [`types`] — periods, break times, and half-open time slots
//! - [`error`] — error types

pub mod availability;
pub mod error;
pub mod store;
pub mod types;

pub use availability::{check_availability, check_request, Conflict, ConflictKind, ConflictReport};
pub use error::ScheduleError;
pub use store::TimetableStore;
pub use types::{BreakKind, BreakTime, Period, PeriodRequest, TimeSlot};
