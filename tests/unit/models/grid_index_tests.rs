// Parameterised unit tests for grid index arithmetic

use std::cmp::Ordering;
use test_case::test_case;
use timetable_grid::models::grid_index::{add, compare, subtract, GridBounds, GridIndex};

fn week() -> GridBounds {
    GridBounds::new(7, 24, 4).unwrap()
}

fn idx(day: i32, hour: i32, slot: i32) -> GridIndex {
    GridIndex::new(day, hour, slot)
}

#[test_case(idx(0, 9, 0), idx(0, 9, 0), Ordering::Equal ; "same index")]
#[test_case(idx(0, 9, 3), idx(0, 10, 0), Ordering::Less ; "slot does not outrank hour")]
#[test_case(idx(1, 0, 0), idx(0, 23, 3), Ordering::Greater ; "day outranks hour")]
#[test_case(idx(0, 0, 150), idx(0, 1, 0), Ordering::Less ; "wide slot fields stay ordered")]
fn test_compare(a: GridIndex, b: GridIndex, expected: Ordering) {
    assert_eq!(compare(a, b), expected);
}

#[test_case(idx(0, 9, 0), idx(0, 0, 2), idx(0, 9, 2) ; "within an hour")]
#[test_case(idx(0, 9, 3), idx(0, 0, 1), idx(0, 10, 0) ; "carry into hour")]
#[test_case(idx(2, 23, 3), idx(0, 0, 1), idx(3, 0, 0) ; "carry into day")]
#[test_case(idx(1, 0, 0), idx(0, 0, -1), idx(0, 23, 3) ; "negative delta borrows")]
#[test_case(idx(0, 1, 0), idx(0, -1, 0), idx(0, 0, 0) ; "sum to zero")]
fn test_add(a: GridIndex, b: GridIndex, expected: GridIndex) {
    assert_eq!(add(a, b, &week()), expected);
}

#[test_case(idx(0, 10, 2), idx(0, 9, 0), idx(0, 1, 2) ; "positive difference")]
#[test_case(idx(0, 9, 0), idx(0, 10, 2), idx(0, -1, -2) ; "negative difference")]
#[test_case(idx(0, 0, 0), idx(2, 0, 1), idx(-2, 0, -1) ; "negative days")]
#[test_case(idx(3, 5, 1), idx(3, 5, 1), idx(0, 0, 0) ; "zero difference")]
fn test_subtract(a: GridIndex, b: GridIndex, expected: GridIndex) {
    assert_eq!(subtract(a, b, &week()), expected);
}
