// Property-based tests for the layout engine and decomposition
// Random day-local cell sets must always pack without collisions

use proptest::prelude::*;
use timetable_grid::models::grid_index::{GridBounds, GridIndex};
use timetable_grid::models::interval::Interval;
use timetable_grid::models::layout::LayoutAttributes;
use timetable_grid::{decompose_into_cells, layout};

fn day() -> GridBounds {
    GridBounds::new(1, 24, 4).unwrap()
}

/// Non-empty cells inside a single 96-slot day.
fn cells_strategy() -> impl Strategy<Value = Vec<Interval>> {
    prop::collection::vec((0i64..95, 1i64..16), 0..40).prop_map(|spans| {
        let bounds = day();
        spans
            .into_iter()
            .enumerate()
            .map(|(i, (start, length))| {
                let end = (start + length).min(95);
                Interval::new(format!("c{i}"), bounds.expand(start), bounds.expand(end.max(start + 1)))
                    .unwrap()
            })
            .collect()
    })
}

fn overlaps(l: &LayoutAttributes, r: &LayoutAttributes) -> bool {
    !(l.end <= r.start || l.start >= r.end)
}

/// Group cells into clusters linked transitively by overlaps in time.
fn clusters(result: &[LayoutAttributes]) -> Vec<Vec<usize>> {
    let n = result.len();
    let mut cluster_of: Vec<Option<usize>> = vec![None; n];
    let mut out = Vec::new();

    for seed in 0..n {
        if cluster_of[seed].is_some() {
            continue;
        }
        let id = out.len();
        let mut members = vec![seed];
        let mut stack = vec![seed];
        cluster_of[seed] = Some(id);
        while let Some(a) = stack.pop() {
            for b in 0..n {
                if cluster_of[b].is_some() {
                    continue;
                }
                if overlaps(&result[a], &result[b]) {
                    cluster_of[b] = Some(id);
                    members.push(b);
                    stack.push(b);
                }
            }
        }
        out.push(members);
    }
    out
}

proptest! {
    /// Property: cells sharing a column never overlap in time
    #[test]
    fn prop_no_overlap_within_a_column(cells in cells_strategy()) {
        let result = layout(&cells, &day()).unwrap();
        prop_assert_eq!(result.len(), cells.len());

        for (i, l) in result.iter().enumerate() {
            for r in &result[i + 1..] {
                if l.position.start == r.position.start {
                    prop_assert!(!overlaps(l, r), "{:?} collides with {:?}", l, r);
                }
            }
        }
    }

    /// Property: every cell's column range fits inside its column count
    #[test]
    fn prop_positions_are_well_formed(cells in cells_strategy()) {
        for attributes in layout(&cells, &day()).unwrap() {
            let position = attributes.position;
            prop_assert!(position.start < position.end);
            prop_assert!(position.end <= position.column);
        }
    }

    /// Property: a cluster agrees on its column count, which is the number
    /// of columns the greedy pass used for it. This is at least the peak
    /// number of cells live at one instant and can be larger, since cells
    /// are packed longest first rather than by start time.
    #[test]
    fn prop_cluster_column_count_is_consistent(cells in cells_strategy()) {
        let result = layout(&cells, &day()).unwrap();
        for members in clusters(&result) {
            let count = result[members[0]].position.column;
            let used = members.iter().map(|&m| result[m].position.start + 1).max().unwrap();
            for &m in &members {
                prop_assert_eq!(result[m].position.column, count);
            }
            prop_assert_eq!(count, used);
        }
    }

    /// Property: the column count never falls below the peak overlap
    #[test]
    fn prop_column_count_covers_peak_overlap(cells in cells_strategy()) {
        let result = layout(&cells, &day()).unwrap();
        for cell in &result {
            let live = result
                .iter()
                .filter(|other| other.start <= cell.start && cell.start < other.end)
                .count();
            prop_assert!(cell.position.column >= live);
        }
    }

    /// Property: cells that overlap in time are drawn at the same column
    /// count and never share horizontal space, stretched or not
    #[test]
    fn prop_overlapping_cells_never_share_columns(cells in cells_strategy()) {
        let result = layout(&cells, &day()).unwrap();
        for (i, l) in result.iter().enumerate() {
            for r in &result[i + 1..] {
                if overlaps(l, r) {
                    prop_assert_eq!(l.position.column, r.position.column);
                    let disjoint = l.position.end <= r.position.start || r.position.end <= l.position.start;
                    prop_assert!(disjoint, "{:?} covers {:?}", l, r);
                }
            }
        }
    }

    /// Property: laying out the same cells twice gives the same answer
    #[test]
    fn prop_layout_is_idempotent(cells in cells_strategy()) {
        prop_assert_eq!(layout(&cells, &day()).unwrap(), layout(&cells, &day()).unwrap());
    }

    /// Property: decomposition yields one contiguous day-local cell per day
    #[test]
    fn prop_decomposition_covers_the_clamped_range(
        start in -200i64..700,
        length in 0i64..500,
    ) {
        let bounds = GridBounds::new(7, 24, 4).unwrap();
        let source = Interval::new("span", bounds.expand(start), bounds.expand(start + length)).unwrap();
        let cells = decompose_into_cells(&source, &bounds).unwrap();

        let clamped_start = bounds.clamp(source.start);
        let clamped_end = bounds.clamp(source.end);
        prop_assert_eq!(cells.len(), (clamped_end.day - clamped_start.day + 1) as usize);
        prop_assert_eq!(cells[0].start, clamped_start);
        prop_assert_eq!(cells[cells.len() - 1].end, clamped_end);

        for cell in &cells {
            prop_assert!(cell.is_day_local());
            prop_assert!(cell.start <= cell.end);
            prop_assert_eq!(&cell.id, "span");
        }
        for pair in cells.windows(2) {
            prop_assert_eq!(pair[0].end, bounds.end_of_day(pair[0].end.day));
            prop_assert_eq!(pair[1].start, GridIndex::new(pair[0].end.day + 1, 0, 0));
        }
    }
}
