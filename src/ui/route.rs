//! Screen routes

use crate::events::View;
use std::str::FromStr;

/// Navigable screens, named after their paths.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Route {
    /// `/`
    #[default]
    Home,
    /// `/dashboard`
    Dashboard,
    /// `/staff`
    StaffLogin,
    /// `/staff/panel`
    StaffPanel,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Dashboard => "/dashboard",
            Route::StaffLogin => "/staff",
            Route::StaffPanel => "/staff/panel",
        }
    }

    /// The polling view backing this route, if it polls at all.
    pub fn polling_view(&self) -> Option<View> {
        match self {
            Route::Home => Some(View::Home),
            Route::Dashboard => Some(View::Dashboard),
            Route::StaffLogin => None,
            Route::StaffPanel => Some(View::StaffPanel),
        }
    }
}

impl FromStr for Route {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "home" | "/" => Ok(Route::Home),
            "dashboard" | "/dashboard" => Ok(Route::Dashboard),
            "staff" | "login" | "/staff" => Ok(Route::StaffLogin),
            other => Err(format!(
                "unknown screen '{}', expected one of: home, dashboard, staff",
                other
            )),
        }
    }
}
