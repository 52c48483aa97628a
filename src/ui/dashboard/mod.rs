//! Customer-facing dashboard
//!
//! Live table availability and the current queue

pub mod components;
pub mod renderer;
pub mod state;

pub use renderer::render_dashboard;
pub use state::DashboardState;
