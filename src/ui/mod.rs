// Module declarations
mod app;
pub mod components;
pub mod dashboard;
pub mod home;
pub mod login;
pub mod route;
pub mod splash;
pub mod staff;
pub mod utils;
// Re-exports for external use
pub use app::{App, UIConfig, run};
pub use route::Route;
