// Service module exports

pub mod decomposition;
pub mod interaction;
pub mod layout;
pub mod schedule;
pub mod settings;
