//! Navigation History
//!
//! In-memory model of browser history: a list of entries and a cursor.
//! Every navigation is resolved through a [`RouteTable`] and the resulting
//! scroll position comes from a [`ScrollBehavior`].

use serde::Serialize;

use super::error::{RouteError, RouteResult};
use super::scroll::{NavigationKind, ResetToTop, ScrollBehavior, ScrollPosition};
use super::table::{RouteMatch, RouteTable};

/// Outcome of a single navigation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Navigation {
    pub kind: NavigationKind,
    /// Path navigated away from, `None` for the initial load
    pub from: Option<String>,
    pub to: RouteMatch,
    /// Where the page scrolls after the navigation
    pub scroll: ScrollPosition,
}

#[derive(Debug, Clone)]
struct Entry {
    route: RouteMatch,
    scroll: Option<ScrollPosition>,
}

/// Browser-style history over a route table
#[derive(Debug)]
pub struct Navigator<'t, B = ResetToTop> {
    table: &'t RouteTable,
    behavior: B,
    entries: Vec<Entry>,
    cursor: usize,
}

impl Navigator<'static, ResetToTop> {
    /// Navigator over the global route table, starting at `path`
    pub fn start(path: &str) -> (Self, Navigation) {
        Navigator::new(RouteTable::global(), ResetToTop, path)
    }
}

impl<'t, B: ScrollBehavior> Navigator<'t, B> {
    /// Create a navigator whose first entry is `path`
    pub fn new(table: &'t RouteTable, behavior: B, path: &str) -> (Self, Navigation) {
        let route = table.resolve(path);
        let scroll = behavior.position(NavigationKind::Push, None);
        let navigator = Self {
            table,
            behavior,
            entries: vec![Entry {
                route: route.clone(),
                scroll: None,
            }],
            cursor: 0,
        };
        let navigation = Navigation {
            kind: NavigationKind::Push,
            from: None,
            to: route,
            scroll,
        };
        (navigator, navigation)
    }

    /// Current entry
    pub fn current(&self) -> &RouteMatch {
        &self.entries[self.cursor].route
    }

    /// Number of entries in the history, never zero
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn can_go_back(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    /// Remember the scroll position of the current entry
    pub fn record_scroll(&mut self, position: ScrollPosition) {
        self.entries[self.cursor].scroll = Some(position);
    }

    /// Navigate to a new path, discarding any forward entries
    pub fn push(&mut self, path: &str) -> Navigation {
        let route = self.table.resolve(path);
        self.entries.truncate(self.cursor + 1);
        self.entries.push(Entry {
            route,
            scroll: None,
        });
        let from = self.entries[self.cursor].route.path.clone();
        self.cursor += 1;
        self.finish(NavigationKind::Push, Some(from))
    }

    /// Replace the current entry
    pub fn replace(&mut self, path: &str) -> Navigation {
        let route = self.table.resolve(path);
        let from = std::mem::replace(
            &mut self.entries[self.cursor],
            Entry {
                route,
                scroll: None,
            },
        );
        self.finish(NavigationKind::Replace, Some(from.route.path))
    }

    /// Step one entry back
    pub fn back(&mut self) -> RouteResult<Navigation> {
        if !self.can_go_back() {
            return Err(RouteError::NoHistory("back"));
        }
        let from = self.current().path.clone();
        self.cursor -= 1;
        Ok(self.finish(NavigationKind::Back, Some(from)))
    }

    /// Step one entry forward
    pub fn forward(&mut self) -> RouteResult<Navigation> {
        if !self.can_go_forward() {
            return Err(RouteError::NoHistory("forward"));
        }
        let from = self.current().path.clone();
        self.cursor += 1;
        Ok(self.finish(NavigationKind::Forward, Some(from)))
    }

    fn finish(&self, kind: NavigationKind, from: Option<String>) -> Navigation {
        let entry = &self.entries[self.cursor];
        let scroll = self.behavior.position(kind, entry.scroll);

        tracing::debug!(
            kind = ?kind,
            from = ?from,
            to = %entry.route.path,
            view = %entry.route.view,
            scroll_x = scroll.x,
            scroll_y = scroll.y,
            "Navigation"
        );

        Navigation {
            kind,
            from,
            to: entry.route.clone(),
            scroll,
        }
    }
}
