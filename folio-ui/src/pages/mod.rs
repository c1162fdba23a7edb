//! Pages
//!
//! Top-level page components, one per view in the route table.

pub mod about;
pub mod contact;
pub mod home;
pub mod not_found;
pub mod project_details;
pub mod projects;
pub mod skills;

pub use about::About;
pub use contact::Contact;
pub use home::Home;
pub use not_found::NotFound;
pub use project_details::ProjectDetails;
pub use projects::Projects;
pub use skills::Skills;
