//! Rendering components shared by every screen

pub mod footer;
pub mod header;
pub mod logs;
