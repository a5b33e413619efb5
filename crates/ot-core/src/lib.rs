//! Core domain logic for the occupancy tracker.
//!
//! This crate contains the fundamental types and logic for:
//! - Calendar: business-day offsets and spreadsheet date serials
//! - Records: classifying raw `serial#language#interval` log entries
//! - Schedule: the day × slot grid of occupancy counters
//! - Tracking: the single-pass scan that fills the grid
//!
//! Nothing here reads the clock or touches the filesystem; the host
//! supplies today's date, the slot definitions and the raw log.

pub mod calendar;
mod error;
pub mod record;
pub mod schedule;
pub mod slot;
pub mod time;
mod tracking;

pub use error::TrackerError;
pub use record::{Appointment, Outcome};
pub use schedule::{GridLayout, GridShape, Schedule};
pub use slot::Slot;
pub use time::TimeOfDay;
pub use tracking::{
    LanguageAliases, ScanStop, ScanSummary, TrackedDays, TrackerConfig, TrackingEngine,
    TrackingResult, track_appointments,
};
