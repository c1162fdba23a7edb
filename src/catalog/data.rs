//! Project data
//!
//! The catalog is compiled into the binary and never changes at runtime.

use super::types::Project;

/// Every project shown on the site, in listing order
pub static PROJECTS: &[Project] = &[
    Project {
        id: 0,
        title: "Fuel Delivery Platform",
        description: "A full-stack platform for ordering and managing fuel deliveries with role-based access.",
        tech: &["Vue", "TypeScript", "Node.js", "MongoDB"],
        github: "https://github.com/yourusername/fuel-delivery",
        demo: None,
        image: None,
    },
    Project {
        id: 1,
        title: "Mental Health Journal App",
        description: "A journaling app that allows users to track moods, activities, and receive insights.",
        tech: &["Vue", "TypeScript", "Tailwind", "AI"],
        github: "https://github.com/yourusername/journal-app",
        demo: None,
        image: None,
    },
];
