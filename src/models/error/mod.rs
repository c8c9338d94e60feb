// Error module
// Typed failures reported by the grid arithmetic, decomposition and layout

use thiserror::Error;

use crate::models::grid_index::GridIndex;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// A grid dimension was zero or negative.
    #[error("invalid grid bounds {days}x{hours}x{slots}: every dimension must be positive")]
    InvalidBounds { days: i32, hours: i32, slots: i32 },

    /// An interval ends before it starts.
    #[error("interval '{id}' ends at {end} before it starts at {start}")]
    MalformedInterval {
        id: String,
        start: GridIndex,
        end: GridIndex,
    },

    /// Column packing hit the safety cap without placing every cell.
    #[error("layout exceeded {limit} columns with {placed} of {total} cells placed")]
    LayoutOverflow {
        limit: usize,
        placed: usize,
        total: usize,
    },
}
