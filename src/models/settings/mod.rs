// Settings module
// Grid configuration persisted as TOML

use serde::{Deserialize, Serialize};

use crate::models::error::GridError;
use crate::models::grid_index::GridBounds;

pub const DEFAULT_NUMBER_OF_DAYS: i32 = 7;
pub const DEFAULT_NUMBER_OF_HOURS: i32 = 24;
pub const DEFAULT_NUMBER_OF_SLOTS: i32 = 4;
pub const DEFAULT_STEP: f32 = 20.0;
pub const DEFAULT_LAYOUT_SAFETY: usize = 100;

/// How a bottom-edge resize treats a pointer that lands on the item's start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResizeBoundary {
    /// Only a pointer strictly before the start collapses the item to one slot
    #[default]
    Exclusive,
    /// A pointer on the start collapses the item as well
    Inclusive,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSettings {
    pub number_of_days: i32,
    pub number_of_hours: i32,
    pub number_of_slots: i32,
    /// Pixel height of one slot
    pub step: f32,
    pub resize_boundary: ResizeBoundary,
    /// Column cap for one day's packing pass
    pub layout_safety: usize,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            number_of_days: DEFAULT_NUMBER_OF_DAYS,
            number_of_hours: DEFAULT_NUMBER_OF_HOURS,
            number_of_slots: DEFAULT_NUMBER_OF_SLOTS,
            step: DEFAULT_STEP,
            resize_boundary: ResizeBoundary::default(),
            layout_safety: DEFAULT_LAYOUT_SAFETY,
        }
    }
}

impl GridSettings {
    pub fn bounds(&self) -> Result<GridBounds, GridError> {
        GridBounds::new(self.number_of_days, self.number_of_hours, self.number_of_slots)
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<(), String> {
        self.bounds().map_err(|e| e.to_string())?;

        if !self.step.is_finite() || self.step <= 0.0 {
            return Err(format!("Step must be a positive number of pixels, got {}", self.step));
        }

        if self.layout_safety == 0 {
            return Err("Layout safety must allow at least one column".to_string());
        }

        Ok(())
    }
}
