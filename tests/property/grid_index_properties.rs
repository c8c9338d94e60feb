// Property-based tests for grid index arithmetic

use proptest::prelude::*;
use timetable_grid::models::grid_index::{add, compare, subtract, GridBounds, GridIndex};

fn bounds_strategy() -> impl Strategy<Value = GridBounds> {
    (1i32..10, 1i32..30, 1i32..130).prop_map(|(d, h, s)| GridBounds::new(d, h, s).unwrap())
}

fn index_in(bounds: GridBounds) -> impl Strategy<Value = GridIndex> {
    (
        0..bounds.number_of_days(),
        0..bounds.number_of_hours(),
        0..bounds.number_of_slots(),
    )
        .prop_map(|(d, h, s)| GridIndex::new(d, h, s))
}

proptest! {
    /// Property: adding then subtracting a delta returns the starting index
    #[test]
    fn prop_add_subtract_round_trip(
        (bounds, a, delta) in bounds_strategy().prop_flat_map(|b| {
            let span = b.slots_per_day() * b.number_of_days() as i64;
            (Just(b), index_in(b), -span..=span)
        })
    ) {
        let x = bounds.expand(delta);
        prop_assert_eq!(subtract(add(a, x, &bounds), x, &bounds), a);
    }

    /// Property: compare agrees with the weighted flattening
    #[test]
    fn prop_compare_matches_flattening(
        (bounds, a, b) in bounds_strategy().prop_flat_map(|b| (Just(b), index_in(b), index_in(b)))
    ) {
        prop_assert_eq!(compare(a, b), bounds.flatten(a).cmp(&bounds.flatten(b)));
    }

    /// Property: expanded values keep every component on one side of zero
    #[test]
    fn prop_expand_is_sign_consistent(
        (bounds, flat) in bounds_strategy().prop_flat_map(|b| (Just(b), -100_000i64..100_000))
    ) {
        let index = bounds.expand(flat);
        prop_assert_eq!(bounds.flatten(index), flat);
        let components = [index.day, index.hour, index.slot];
        if flat >= 0 {
            prop_assert!(components.iter().all(|&c| c >= 0));
        } else {
            prop_assert!(components.iter().all(|&c| c <= 0));
        }
        prop_assert!(index.hour.abs() < bounds.number_of_hours());
        prop_assert!(index.slot.abs() < bounds.number_of_slots());
    }
}
