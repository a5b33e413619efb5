//! Configuration errors raised by the tracking engine.
//!
//! Bad log lines never show up here: sentinel, malformed and unmatched
//! records are ordinary scan outcomes. Everything in this enum means the
//! run was set up wrong and must be reported to the caller.

use chrono::NaiveDate;
use thiserror::Error;

use crate::schedule::GridShape;

/// Errors for a misconfigured tracking run.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TrackerError {
    /// A business-day offset walked past the range chrono can represent.
    #[error("business-day offset {offset} leaves the supported calendar range")]
    DateOutOfRange { offset: i64 },

    /// Tracked days were not strictly ascending (this includes duplicates).
    #[error("tracked days must be strictly ascending, but {date} follows {previous}")]
    UnorderedTrackedDays {
        previous: NaiveDate,
        date: NaiveDate,
    },

    /// Slot definitions do not match the configured grid.
    #[error("slot definitions describe {found}, expected {expected}")]
    GridShapeMismatch {
        expected: GridShape,
        found: GridShape,
    },

    /// The number of tracked days differs from the schedule's day count.
    #[error("{tracked} tracked days but the schedule has {scheduled} days")]
    DayCountMismatch { tracked: usize, scheduled: usize },

    /// A grid cell was addressed outside the schedule.
    #[error("no slot at day {day}, slot {slot}")]
    CellOutOfRange { day: usize, slot: usize },
}
