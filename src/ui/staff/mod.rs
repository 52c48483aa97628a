//! Staff panel
//!
//! Table management behind the staff login

pub mod renderer;
pub mod state;

pub use renderer::render_staff_panel;
pub use state::StaffPanelState;
