//! Schedule layout service.
//! Runs decomposition over a whole item set, buckets the resulting cells by
//! day and packs each day independently.

use crate::models::error::GridError;
use crate::models::grid_index::GridBounds;
use crate::models::interval::Interval;
use crate::models::layout::DayLayout;
use crate::models::settings::GridSettings;
use crate::services::decomposition::decompose_into_cells;
use crate::services::layout::LayoutEngine;

/// Lays out a full grid of items, one day column at a time.
#[derive(Debug, Clone, Copy)]
pub struct ScheduleService {
    engine: LayoutEngine,
}

impl ScheduleService {
    pub fn new(bounds: GridBounds) -> Self {
        Self {
            engine: LayoutEngine::new(bounds),
        }
    }

    pub fn from_settings(settings: &GridSettings) -> Result<Self, GridError> {
        let engine = LayoutEngine::new(settings.bounds()?).with_safety(settings.layout_safety);
        Ok(Self { engine })
    }

    pub fn bounds(&self) -> &GridBounds {
        self.engine.bounds()
    }

    /// Decompose `items` and group the cells by day. The outer vector has
    /// one entry per grid day; cells keep the order of their items.
    pub fn cells_by_day(&self, items: &[Interval]) -> Result<Vec<Vec<Interval>>, GridError> {
        let bounds = self.bounds();
        let mut days: Vec<Vec<Interval>> = vec![Vec::new(); bounds.number_of_days() as usize];

        for item in items {
            for cell in decompose_into_cells(item, bounds)? {
                let day = bounds.clamp_day(cell.start.day) as usize;
                days[day].push(cell);
            }
        }

        Ok(days)
    }

    /// Lay out a single day.
    pub fn layout_day(&self, items: &[Interval], day: i32) -> Result<DayLayout, GridError> {
        let cells: Vec<Interval> = items
            .iter()
            .map(|item| decompose_into_cells(item, self.bounds()))
            .collect::<Result<Vec<_>, _>>()?
            .into_iter()
            .flatten()
            .filter(|cell| cell.start.day == day && cell.end.day == day)
            .collect();

        Ok(DayLayout {
            day,
            cells: self.engine.layout(&cells)?,
        })
    }

    /// Lay out every day of the grid. Fails on the first day that cannot be
    /// laid out.
    pub fn layout_days(&self, items: &[Interval]) -> Result<Vec<DayLayout>, GridError> {
        let days = self.cells_by_day(items)?;
        log::debug!(
            "Laying out {} items across {} days",
            items.len(),
            days.len()
        );

        days.into_iter()
            .enumerate()
            .map(|(day, cells)| {
                self.engine.layout(&cells).map(|cells| DayLayout {
                    day: day as i32,
                    cells,
                })
            })
            .collect()
    }
}
