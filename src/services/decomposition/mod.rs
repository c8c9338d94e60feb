//! Item decomposition.
//!
//! Splits an interval that crosses day boundaries into one day-local cell
//! per day, clamping every day, hour and slot that falls off the grid. Clamping rather
//! than failing is what lets a dragged item hang off the edge of the week.

use crate::models::error::GridError;
use crate::models::grid_index::GridBounds;
use crate::models::interval::Interval;

/// Split `item` into day-local cells, each tagged with the item's id.
///
/// Returns one cell per day in the clamped day range. Only an inverted
/// range is an error; zero-length items produce a single empty cell.
pub fn decompose_into_cells(
    item: &Interval,
    bounds: &GridBounds,
) -> Result<Vec<Interval>, GridError> {
    item.validate()?;

    let start = bounds.clamp(item.start);
    let end = bounds.clamp(item.end);
    if start != item.start || end != item.end {
        log::trace!(
            "Clamped item '{}' from {}..{} to {}..{}",
            item.id,
            item.start,
            item.end,
            start,
            end
        );
    }

    let start_day = bounds.clamp_day(start.day);
    let end_day = bounds.clamp_day(end.day);

    if start_day == end_day {
        return Ok(vec![Interval {
            id: item.id.clone(),
            start,
            end,
        }]);
    }

    let cells = (start_day..=end_day)
        .map(|day| {
            let cell_start = if day == start_day {
                start
            } else {
                bounds.start_of_day(day)
            };
            let cell_end = if day == end_day {
                end
            } else {
                bounds.end_of_day(day)
            };
            Interval {
                id: item.id.clone(),
                start: cell_start,
                end: cell_end,
            }
        })
        .collect();

    Ok(cells)
}
