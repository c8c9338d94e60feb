// Date utility functions
// Mapping between naive date-times and grid indices

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::models::grid_index::{GridBounds, GridIndex};

/// Calculate the start of the week containing the given date.
///
/// # Arguments
/// * `date` - The date to find the week start for
/// * `first_day_of_week` - 0 = Sunday, 1 = Monday, etc.
pub fn week_start(date: NaiveDate, first_day_of_week: u8) -> NaiveDate {
    let weekday = date.weekday().num_days_from_sunday() as i64;
    let offset = (weekday - first_day_of_week as i64 + 7) % 7;
    date - Duration::days(offset)
}

/// Minutes covered by one slot. Slots that do not divide an hour evenly
/// round down, never below one minute.
pub fn minutes_per_slot(bounds: &GridBounds) -> i64 {
    (60 / bounds.number_of_slots() as i64).max(1)
}

/// Grid index of `datetime` on a grid whose day 0 is `grid_start`.
///
/// Minutes within a slot are truncated. Date-times before the grid, past its
/// last day or past its last hour yield out-of-range indices; decomposition
/// clamps them.
pub fn index_for_datetime(
    datetime: NaiveDateTime,
    grid_start: NaiveDate,
    bounds: &GridBounds,
) -> GridIndex {
    let day = (datetime.date() - grid_start).num_days() as i32;
    let hour = datetime.hour() as i32;
    let slot = (datetime.minute() as i64 / minutes_per_slot(bounds)) as i32;
    GridIndex::new(day, hour, slot.min(bounds.number_of_slots() - 1))
}

/// Inverse of [`index_for_datetime`] for in-range indices.
pub fn datetime_for_index(
    index: GridIndex,
    grid_start: NaiveDate,
    bounds: &GridBounds,
) -> NaiveDateTime {
    let minutes =
        index.hour as i64 * 60 + index.slot as i64 * minutes_per_slot(bounds);
    grid_start.and_time(NaiveTime::MIN)
        + Duration::days(index.day as i64)
        + Duration::minutes(minutes)
}
