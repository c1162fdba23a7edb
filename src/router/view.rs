//! Page views addressable by a route

use serde::Serialize;
use std::fmt;

/// Identifier of the page a route renders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    Home,
    About,
    Skills,
    Projects,
    ProjectDetails,
    Contact,
    /// Catch-all for paths no route declares
    NotFound,
}

impl View {
    /// Every view with a declared route, in navigation order
    pub const ROUTED: [View; 6] = [
        View::Home,
        View::About,
        View::Skills,
        View::Projects,
        View::ProjectDetails,
        View::Contact,
    ];

    /// Stable machine name
    pub fn name(&self) -> &'static str {
        match self {
            View::Home => "home",
            View::About => "about",
            View::Skills => "skills",
            View::Projects => "projects",
            View::ProjectDetails => "project_details",
            View::Contact => "contact",
            View::NotFound => "not_found",
        }
    }

    /// Document title for the page
    pub fn title(&self) -> &'static str {
        match self {
            View::Home => "Home",
            View::About => "About",
            View::Skills => "Skills",
            View::Projects => "Projects",
            View::ProjectDetails => "Project",
            View::Contact => "Contact",
            View::NotFound => "Page Not Found",
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, View::NotFound)
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
