// Module exports for models

pub mod error;
pub mod grid_index;
pub mod interval;
pub mod layout;
pub mod settings;
