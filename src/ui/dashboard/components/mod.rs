//! Dashboard panels

pub mod queue;
pub mod tables;
