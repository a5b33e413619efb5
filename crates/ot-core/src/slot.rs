//! A bounded time-of-day window with an occupancy counter.

use serde::Serialize;

use crate::time::{TimeOfDay, split_interval};

/// One availability window in the schedule.
///
/// Bounds are fixed at construction; only the count changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Slot {
    /// The definition text, kept for display.
    interval: String,
    /// Inclusive `(lower, upper)` bounds. `None` for a definition that
    /// does not split into two parseable times; such a slot never matches.
    #[serde(skip)]
    bounds: Option<(TimeOfDay, TimeOfDay)>,
    /// Appointments attributed to this slot.
    count: u32,
}

impl Slot {
    /// Builds a slot from an `"HH:MM-HH:MM"` definition.
    pub fn new(interval: impl Into<String>) -> Self {
        let interval = interval.into();
        let bounds = match split_interval(&interval).as_slice() {
            [lower, upper] => TimeOfDay::parse(lower).zip(TimeOfDay::parse(upper)),
            _ => None,
        };

        Self {
            interval,
            bounds,
            count: 0,
        }
    }

    pub fn interval(&self) -> &str {
        &self.interval
    }

    pub const fn count(&self) -> u32 {
        self.count
    }

    /// Whether `time` falls inside the window, bounds included.
    pub fn can_contain(&self, time: TimeOfDay) -> bool {
        self.bounds
            .is_some_and(|(lower, upper)| lower <= time && time <= upper)
    }

    pub fn increment(&mut self) {
        self.count += 1;
    }
}
