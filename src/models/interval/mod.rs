// Interval module
// A time-ranged item on the grid, identified by a caller-owned id

use serde::{Deserialize, Serialize};

use crate::models::error::GridError;
use crate::models::grid_index::{GridBounds, GridIndex};

/// Half-open `[start, end)` range on the grid.
///
/// `start == end` is allowed and denotes an in-progress creation that the
/// pointer has not stretched yet.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Interval {
    pub id: String,
    pub start: GridIndex,
    pub end: GridIndex,
}

impl Interval {
    /// Create a validated interval.
    ///
    /// # Examples
    /// ```
    /// use timetable_grid::models::grid_index::GridIndex;
    /// use timetable_grid::models::interval::Interval;
    ///
    /// let standup = Interval::new("standup", GridIndex::new(0, 9, 0), GridIndex::new(0, 9, 2)).unwrap();
    /// assert!(!standup.is_empty());
    /// assert!(Interval::new("bad", GridIndex::new(0, 9, 2), GridIndex::new(0, 9, 0)).is_err());
    /// ```
    pub fn new(
        id: impl Into<String>,
        start: GridIndex,
        end: GridIndex,
    ) -> Result<Self, GridError> {
        let interval = Self {
            id: id.into(),
            start,
            end,
        };
        interval.validate()?;
        Ok(interval)
    }

    pub fn validate(&self) -> Result<(), GridError> {
        if self.start > self.end {
            return Err(GridError::MalformedInterval {
                id: self.id.clone(),
                start: self.start,
                end: self.end,
            });
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// True when both endpoints fall on the same day.
    pub fn is_day_local(&self) -> bool {
        self.start.day == self.end.day
    }

    /// Half-open overlap test. Touching endpoints do not overlap.
    pub fn overlaps(&self, other: &Interval) -> bool {
        !(self.end <= other.start || self.start >= other.end)
    }

    /// Length in slots under `bounds`.
    pub fn duration(&self, bounds: &GridBounds) -> i64 {
        bounds.span(self.start, self.end)
    }
}
