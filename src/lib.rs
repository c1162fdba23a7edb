//! # Folio
//!
//! Personal Portfolio - a static project catalog and the route table that
//! maps site paths to page views, plus an Axum host for the Leptos
//! front-end.
//!
//! ## Modules
//!
//! - [`catalog`]: Immutable project records with lookup and validation
//! - [`content`]: Static copy for the profile pages
//! - [`router`]: Route table, path resolution, history and scroll policy
//! - `api`: HTTP host serving the front-end and a read-only JSON API
//!   (feature `server`)
//! - `config`: TOML configuration and logging setup (feature `server`)
//!
//! The core modules do no I/O and build for `wasm32`; the front-end crate
//! depends on this library with default features disabled.
//!
//! ## Quick Start
//!
//! ```rust
//! use folio::catalog::Catalog;
//! use folio::router::{RouteTable, View};
//!
//! let matched = RouteTable::global().resolve("/projects/1");
//! assert_eq!(matched.view, View::ProjectDetails);
//!
//! let project = Catalog::global().lookup(matched.param("id").unwrap()).unwrap();
//! assert_eq!(project.title, "Mental Health Journal App");
//!
//! assert!(RouteTable::global().resolve("/missing").is_not_found());
//! ```

pub mod catalog;
pub mod content;
pub mod router;

#[cfg(feature = "server")]
pub mod api;
#[cfg(feature = "server")]
pub mod config;

// Re-export top-level types for convenience
pub use catalog::{Catalog, CatalogError, CatalogResult, Project, ProjectId, PROJECTS};

pub use router::{
    Navigation, NavigationKind, Navigator, Params, ResetToTop, RouteError, RouteMatch,
    RouteResult, RouteTable, ScrollBehavior, ScrollPosition, View,
};

#[cfg(feature = "server")]
pub use api::{build_router, serve, ApiError, AppState};

#[cfg(feature = "server")]
pub use config::{Config, ConfigError, LoggingConfig, ServerConfig};
