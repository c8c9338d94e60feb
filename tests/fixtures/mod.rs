// Test fixtures - reusable grid data
// Provides consistent bounds and items across the integration tests

#![allow(dead_code)]

use timetable_grid::models::grid_index::{GridBounds, GridIndex};
use timetable_grid::models::interval::Interval;

/// Sample grid shapes
pub mod bounds {
    use super::*;

    /// A single 24-hour day in quarter-hour slots
    pub fn single_day() -> GridBounds {
        GridBounds::new(1, 24, 4).unwrap()
    }

    /// A seven-day week in quarter-hour slots
    pub fn week() -> GridBounds {
        GridBounds::new(7, 24, 4).unwrap()
    }
}

/// Shorthand for a grid index
pub fn at(day: i32, hour: i32, slot: i32) -> GridIndex {
    GridIndex::new(day, hour, slot)
}

/// Shorthand for a validated interval
pub fn item(id: &str, start: GridIndex, end: GridIndex) -> Interval {
    Interval::new(id, start, end).unwrap()
}

/// Sample item sets
pub mod items {
    use super::*;

    /// Two overlapping morning meetings and a disjoint afternoon one
    pub fn morning_clash() -> Vec<Interval> {
        vec![
            item("A", at(0, 9, 0), at(0, 10, 0)),
            item("B", at(0, 9, 2), at(0, 10, 2)),
            item("C", at(0, 14, 0), at(0, 15, 0)),
        ]
    }

    /// A busy working week including an item that spans three days
    pub fn busy_week() -> Vec<Interval> {
        vec![
            item("standup-mon", at(0, 9, 0), at(0, 9, 1)),
            item("planning", at(0, 9, 0), at(0, 11, 0)),
            item("offsite", at(1, 13, 0), at(3, 12, 0)),
            item("review", at(2, 10, 0), at(2, 11, 2)),
            item("1on1", at(2, 10, 2), at(2, 11, 0)),
            item("lunch", at(2, 12, 0), at(2, 13, 0)),
            item("demo", at(3, 11, 0), at(3, 12, 2)),
            item("retro", at(4, 15, 0), at(4, 16, 0)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_items_are_valid() {
        for item in items::busy_week() {
            assert!(item.validate().is_ok());
            assert!(bounds::week().contains(item.start));
            assert!(bounds::week().contains(item.end));
        }
    }
}
