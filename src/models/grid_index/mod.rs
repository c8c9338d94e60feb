// Grid index module
// Three-level (day, hour, slot) coordinates on the timetable grid and the
// mixed-radix arithmetic used by drag/resize tracking.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::error::GridError;

/// A position on the grid: day column, hour row and sub-hour slot.
///
/// Positions on the grid are non-negative and inside the configured
/// [`GridBounds`]. Deltas produced by [`subtract`] may carry negative
/// components, all with the same sign.
///
/// Ordering is lexicographic on `(day, hour, slot)`, which agrees with the
/// weighted flattening of [`GridBounds::flatten`] for every normalized index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GridIndex {
    pub day: i32,
    pub hour: i32,
    pub slot: i32,
}

impl GridIndex {
    pub const ZERO: GridIndex = GridIndex { day: 0, hour: 0, slot: 0 };

    pub const fn new(day: i32, hour: i32, slot: i32) -> Self {
        Self { day, hour, slot }
    }

    /// A pure slot offset, handy as a delta for [`add`].
    pub const fn slots(slot: i32) -> Self {
        Self { day: 0, hour: 0, slot }
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

impl Ord for GridIndex {
    fn cmp(&self, other: &Self) -> Ordering {
        self.day
            .cmp(&other.day)
            .then(self.hour.cmp(&other.hour))
            .then(self.slot.cmp(&other.slot))
    }
}

impl PartialOrd for GridIndex {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for GridIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.day, self.hour, self.slot)
    }
}

/// Grid cardinalities. Every dimension is strictly positive and one day
/// holds at most `i32::MAX` slots; the only way to obtain a value is
/// through [`GridBounds::new`] (or deserialization, which goes through the
/// same check).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawBounds", into = "RawBounds")]
pub struct GridBounds {
    number_of_days: i32,
    number_of_hours: i32,
    number_of_slots: i32,
}

#[derive(Serialize, Deserialize)]
struct RawBounds {
    number_of_days: i32,
    number_of_hours: i32,
    number_of_slots: i32,
}

impl TryFrom<RawBounds> for GridBounds {
    type Error = GridError;

    fn try_from(raw: RawBounds) -> Result<Self, Self::Error> {
        GridBounds::new(raw.number_of_days, raw.number_of_hours, raw.number_of_slots)
    }
}

impl From<GridBounds> for RawBounds {
    fn from(bounds: GridBounds) -> Self {
        Self {
            number_of_days: bounds.number_of_days,
            number_of_hours: bounds.number_of_hours,
            number_of_slots: bounds.number_of_slots,
        }
    }
}

impl GridBounds {
    pub fn new(
        number_of_days: i32,
        number_of_hours: i32,
        number_of_slots: i32,
    ) -> Result<Self, GridError> {
        let day_too_wide = number_of_hours as i64 * number_of_slots as i64 > i32::MAX as i64;
        if number_of_days <= 0 || number_of_hours <= 0 || number_of_slots <= 0 || day_too_wide {
            return Err(GridError::InvalidBounds {
                days: number_of_days,
                hours: number_of_hours,
                slots: number_of_slots,
            });
        }
        Ok(Self {
            number_of_days,
            number_of_hours,
            number_of_slots,
        })
    }

    pub fn number_of_days(&self) -> i32 {
        self.number_of_days
    }

    pub fn number_of_hours(&self) -> i32 {
        self.number_of_hours
    }

    pub fn number_of_slots(&self) -> i32 {
        self.number_of_slots
    }

    /// Slots in one full day.
    pub fn slots_per_day(&self) -> i64 {
        self.number_of_hours as i64 * self.number_of_slots as i64
    }

    /// First index of the grid.
    pub fn min_index(&self) -> GridIndex {
        GridIndex::ZERO
    }

    /// Last index of the grid (the last slot of the last day).
    pub fn max_index(&self) -> GridIndex {
        self.end_of_day(self.number_of_days - 1)
    }

    pub fn start_of_day(&self, day: i32) -> GridIndex {
        GridIndex::new(day, 0, 0)
    }

    pub fn end_of_day(&self, day: i32) -> GridIndex {
        GridIndex::new(day, self.number_of_hours - 1, self.number_of_slots - 1)
    }

    pub fn clamp_day(&self, day: i32) -> i32 {
        day.clamp(0, self.number_of_days - 1)
    }

    /// Clamp an index onto the grid.
    ///
    /// The index is first clamped into `min_index()..=max_index()`. An hour
    /// outside the day then snaps to the start or end of that day, and a
    /// slot outside the hour snaps to the first or last slot of the hour.
    /// Both steps preserve order, so a valid range stays valid.
    pub fn clamp(&self, index: GridIndex) -> GridIndex {
        let index = index.clamp(self.min_index(), self.max_index());
        if index.hour < 0 {
            self.start_of_day(index.day)
        } else if index.hour >= self.number_of_hours {
            self.end_of_day(index.day)
        } else {
            GridIndex::new(
                index.day,
                index.hour,
                index.slot.clamp(0, self.number_of_slots - 1),
            )
        }
    }

    pub fn contains(&self, index: GridIndex) -> bool {
        (0..self.number_of_days).contains(&index.day)
            && (0..self.number_of_hours).contains(&index.hour)
            && (0..self.number_of_slots).contains(&index.slot)
    }

    /// Weighted-sum flattening using these cardinalities.
    ///
    /// Exact for every `i32` index: with at most `i32::MAX` slots per day
    /// each term stays below `2^62`.
    pub fn flatten(&self, index: GridIndex) -> i64 {
        index.day as i64 * self.slots_per_day()
            + index.hour as i64 * self.number_of_slots as i64
            + index.slot as i64
    }

    /// Inverse of [`flatten`](Self::flatten). Negative values expand into
    /// components that are all non-positive. A day count outside `i32`
    /// saturates.
    pub fn expand(&self, flat: i64) -> GridIndex {
        if flat == 0 {
            return GridIndex::ZERO;
        }
        let per_day = self.slots_per_day();
        let per_hour = self.number_of_slots as i64;
        // Truncating division keeps every component on the sign of `flat`.
        let day = flat / per_day;
        let within_day = flat % per_day;
        GridIndex::new(
            day.clamp(i32::MIN as i64, i32::MAX as i64) as i32,
            (within_day / per_hour) as i32,
            (within_day % per_hour) as i32,
        )
    }

    /// Number of slots between `start` and `end`.
    pub fn span(&self, start: GridIndex, end: GridIndex) -> i64 {
        self.flatten(end) - self.flatten(start)
    }
}

/// Total order of two indices.
pub fn compare(a: GridIndex, b: GridIndex) -> Ordering {
    a.cmp(&b)
}

/// Treat both indices as signed offsets under `bounds` and add them.
/// The result is not clamped; a day count past `i32` saturates.
pub fn add(a: GridIndex, b: GridIndex, bounds: &GridBounds) -> GridIndex {
    bounds.expand(bounds.flatten(a).saturating_add(bounds.flatten(b)))
}

/// Treat both indices as signed offsets under `bounds` and subtract `b`
/// from `a`. The result is not clamped and may be negative; a day count
/// past `i32` saturates.
pub fn subtract(a: GridIndex, b: GridIndex, bounds: &GridBounds) -> GridIndex {
    bounds.expand(bounds.flatten(a).saturating_sub(bounds.flatten(b)))
}
