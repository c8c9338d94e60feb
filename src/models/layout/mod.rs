// Layout module
// Output records of the interval layout engine

use serde::{Deserialize, Serialize};

use crate::models::grid_index::GridIndex;

/// Horizontal placement of a cell inside its day column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnPosition {
    /// Total columns shared by the cell's overlap cluster
    pub column: usize,
    /// First occupied column (0-based)
    pub start: usize,
    /// One past the last occupied column
    pub end: usize,
}

impl ColumnPosition {
    pub fn width(&self) -> usize {
        self.end - self.start
    }
}

/// Placement of one laid-out cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutAttributes {
    /// Id shared with the source item (several cells may carry the same id)
    pub id: String,
    /// Position of the cell in the slice handed to the engine
    pub index: usize,
    pub position: ColumnPosition,
    pub start: GridIndex,
    pub end: GridIndex,
}

/// Laid-out cells of one day column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayLayout {
    pub day: i32,
    pub cells: Vec<LayoutAttributes>,
}
