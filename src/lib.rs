// Timetable Grid Library
// Interval layout and pointer interaction for day/hour/slot timetable grids

pub mod models;
pub mod services;
pub mod utils;

pub use models::error::GridError;
pub use models::grid_index::{add, compare, subtract, GridBounds, GridIndex};
pub use models::interval::Interval;
pub use models::layout::{ColumnPosition, DayLayout, LayoutAttributes};
pub use services::decomposition::decompose_into_cells;
pub use services::layout::{layout, LayoutEngine};
