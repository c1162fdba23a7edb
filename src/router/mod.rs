//! Router
//!
//! Maps URL paths to page views.
//!
//! - [`RouteTable`]: ordered pattern → view entries with a not-found fallback
//! - [`RoutePattern`]: `/literal/:param` patterns compiled to regexes
//! - [`Navigator`]: in-memory history applying a [`ScrollBehavior`]
//!
//! # Example
//!
//! ```rust
//! use folio::router::{RouteTable, View};
//!
//! let matched = RouteTable::global().resolve("/projects/0");
//! assert_eq!(matched.view, View::ProjectDetails);
//! assert_eq!(matched.param("id"), Some("0"));
//! ```

pub mod error;
pub mod history;
pub mod pattern;
pub mod scroll;
pub mod table;
pub mod view;

pub use error::{RouteError, RouteResult};
pub use history::{Navigation, Navigator};
pub use pattern::{Params, RoutePattern, Segment};
pub use scroll::{NavigationKind, ResetToTop, ScrollBehavior, ScrollPosition};
pub use table::{normalize_path, Route, RouteMatch, RouteTable};
pub use view::View;
