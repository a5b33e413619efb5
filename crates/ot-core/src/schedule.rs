//! The day × slot availability grid.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::TrackerError;
use crate::slot::Slot;
use crate::time::TimeOfDay;

/// Dimensions of the schedule grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridShape {
    /// Number of tracked days.
    pub days: usize,
    /// Number of slots per day.
    pub slots: usize,
}

impl fmt::Display for GridShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} days x {} slots", self.days, self.slots)
    }
}

/// How slot definitions are laid out in the source grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GridLayout {
    /// One row per day, one column per slot.
    DayMajor,
    /// One row per slot, one column per day (a sheet with a column per day).
    #[default]
    SlotMajor,
}

/// Availability grid indexed by `[day][slot]`.
///
/// Every cell owns its slot; the shape is fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Schedule {
    days: Vec<Vec<Slot>>,
    #[serde(skip)]
    shape: GridShape,
}

impl Schedule {
    /// Builds the grid from raw interval definitions.
    ///
    /// The definitions must match `shape` exactly once `layout` is taken
    /// into account; the shape is never inferred from the data.
    pub fn from_definitions<S: AsRef<str>>(
        definitions: &[Vec<S>],
        layout: GridLayout,
        shape: GridShape,
    ) -> Result<Self, TrackerError> {
        let (rows, columns) = match layout {
            GridLayout::DayMajor => (shape.days, shape.slots),
            GridLayout::SlotMajor => (shape.slots, shape.days),
        };

        let found_columns = definitions
            .iter()
            .map(Vec::len)
            .find(|&len| len != columns)
            .unwrap_or(columns);
        if definitions.len() != rows || found_columns != columns {
            let found = match layout {
                GridLayout::DayMajor => GridShape {
                    days: definitions.len(),
                    slots: found_columns,
                },
                GridLayout::SlotMajor => GridShape {
                    days: found_columns,
                    slots: definitions.len(),
                },
            };
            return Err(TrackerError::GridShapeMismatch {
                expected: shape,
                found,
            });
        }

        let days = (0..shape.days)
            .map(|day| {
                (0..shape.slots)
                    .map(|slot| {
                        let definition = match layout {
                            GridLayout::DayMajor => &definitions[day][slot],
                            GridLayout::SlotMajor => &definitions[slot][day],
                        };
                        Slot::new(definition.as_ref())
                    })
                    .collect()
            })
            .collect();

        Ok(Self { days, shape })
    }

    pub const fn shape(&self) -> GridShape {
        self.shape
    }

    pub const fn day_count(&self) -> usize {
        self.shape.days
    }

    /// Slots of one day, in configured order.
    pub fn slots(&self, day: usize) -> Option<&[Slot]> {
        self.days.get(day).map(Vec::as_slice)
    }

    /// Finds the slot an appointment belongs to.
    ///
    /// Bounds are tried in order (start before end), and for each bound
    /// the day's slots are tried in order, so the start time wins over the
    /// end time and the lowest-indexed slot wins ties. `None` when nothing
    /// matches or `day` is not in the grid.
    pub fn resolve<S: AsRef<str>>(&self, day: usize, bounds: &[S]) -> Option<usize> {
        let slots = self.slots(day)?;
        bounds
            .iter()
            .filter_map(|bound| TimeOfDay::parse(bound.as_ref()))
            .find_map(|time| slots.iter().position(|slot| slot.can_contain(time)))
    }

    /// Counts one appointment in a cell.
    pub fn increment_at(&mut self, day: usize, slot: usize) -> Result<(), TrackerError> {
        let cell = self
            .days
            .get_mut(day)
            .and_then(|slots| slots.get_mut(slot))
            .ok_or(TrackerError::CellOutOfRange { day, slot })?;
        cell.increment();
        Ok(())
    }

    /// Day-major grid of counts.
    pub fn counts(&self) -> Vec<Vec<u32>> {
        self.days
            .iter()
            .map(|slots| slots.iter().map(Slot::count).collect())
            .collect()
    }
}
