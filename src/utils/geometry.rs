//! Pixel geometry for the timetable grid.
//!
//! Converts pointer positions into grid indices and laid-out cells into the
//! boxes a renderer draws. The grid is `number_of_days` equal-width columns
//! stacked over `number_of_hours` rows of `number_of_slots` slots each.

use crate::models::grid_index::{GridBounds, GridIndex};
use crate::models::layout::LayoutAttributes;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

/// Measured size of the grid surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridMetrics {
    pub width: f32,
    pub height: f32,
    /// Pixel height of one slot
    pub step: f32,
}

impl GridMetrics {
    pub fn hour_height(&self, bounds: &GridBounds) -> f32 {
        self.step * bounds.number_of_slots() as f32
    }
}

/// Box of one cell inside its day column. Horizontal values are fractions
/// of the column width; vertical values are pixels from the top of the grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellFrame {
    pub left: f32,
    pub width: f32,
    pub top: f32,
    pub height: f32,
}

impl CellFrame {
    /// Absolute pixel rectangle `(x, y, width, height)` for a day column
    /// starting at `column_x` and `column_width` pixels wide.
    pub fn to_pixels(&self, column_x: f32, column_width: f32) -> (f32, f32, f32, f32) {
        (
            column_x + self.left * column_width,
            self.top,
            self.width * column_width,
            self.height,
        )
    }
}

fn clamp_floor(value: f32, count: i32) -> i32 {
    if !value.is_finite() {
        return 0;
    }
    (value.floor() as i32).clamp(0, count - 1)
}

/// Grid index under `point`, clamped onto the grid.
pub fn index_for_point(point: Point, bounds: &GridBounds, metrics: &GridMetrics) -> GridIndex {
    let day = clamp_floor(
        point.x / metrics.width * bounds.number_of_days() as f32,
        bounds.number_of_days(),
    );
    let hour = clamp_floor(
        point.y / metrics.height * bounds.number_of_hours() as f32,
        bounds.number_of_hours(),
    );
    let hour_height = metrics.hour_height(bounds);
    let slot = clamp_floor(
        (point.y - hour as f32 * hour_height) / hour_height * bounds.number_of_slots() as f32,
        bounds.number_of_slots(),
    );
    GridIndex::new(day, hour, slot)
}

/// Vertical pixel offset of an index within its day column.
pub fn offset_for_index(index: GridIndex, bounds: &GridBounds, step: f32) -> f32 {
    index.hour as f32 * step * bounds.number_of_slots() as f32 + index.slot as f32 * step
}

pub fn frame_for(attributes: &LayoutAttributes, bounds: &GridBounds, step: f32) -> CellFrame {
    let position = attributes.position;
    let columns = position.column.max(1) as f32;
    let top = offset_for_index(attributes.start, bounds, step);
    let bottom = offset_for_index(attributes.end, bounds, step);

    CellFrame {
        left: position.start as f32 / columns,
        width: position.width() as f32 / columns,
        top,
        height: bottom - top,
    }
}
