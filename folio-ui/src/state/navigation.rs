//! Navigation State
//!
//! Derives the current route from the browser location and applies the
//! site's scroll policy on every change.

use folio::catalog::Catalog;
use folio::content::PROFILE;
use folio::router::{NavigationKind, ResetToTop, RouteMatch, RouteTable, ScrollBehavior, View};
use leptos::*;
use leptos_router::use_location;

/// Current location resolved through the route table
pub fn use_route_match() -> Memo<RouteMatch> {
    let location = use_location();
    create_memo(move |_| location.pathname.with(|path| RouteTable::global().resolve(path)))
}

/// Scroll to the policy position and retitle the document after each navigation
///
/// The effect tracks the whole location, so a change to only the query
/// string or the fragment still scrolls to the top.
pub fn use_navigation_effects(route: Memo<RouteMatch>) {
    let location = use_location();
    let href = create_memo(move |_| {
        location_href(
            &location.pathname.get(),
            &location.search.get(),
            &location.hash.get(),
        )
    });

    create_effect(move |_| {
        let current = href.get();
        // The router does not report traversal direction; the reset
        // policy ignores it anyway.
        let position = ResetToTop.position(NavigationKind::Push, None);
        window().scroll_to_with_x_and_y(f64::from(position.x), f64::from(position.y));
        route.with_untracked(|matched| document().set_title(&document_title(matched)));
        current
    });
}

/// Full location as a single string: path, then `?query`, then `#fragment`
pub fn location_href(pathname: &str, search: &str, hash: &str) -> String {
    let search = search.trim_start_matches('?');
    let hash = hash.trim_start_matches('#');

    let mut href = String::from(pathname);
    if !search.is_empty() {
        href.push('?');
        href.push_str(search);
    }
    if !hash.is_empty() {
        href.push('#');
        href.push_str(hash);
    }
    href
}

/// Stop the browser from restoring scroll offsets on back/forward
pub fn disable_scroll_restoration() {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            if history
                .set_scroll_restoration(web_sys::ScrollRestoration::Manual)
                .is_err()
            {
                web_sys::console::warn_1(&"Could not disable scroll restoration".into());
            }
        }
    }
}

/// Document title for a resolved route
pub fn document_title(matched: &RouteMatch) -> String {
    let page = match matched.view {
        View::ProjectDetails => matched
            .param("id")
            .and_then(|id| Catalog::global().lookup(id).ok())
            .map(|project| project.title)
            .unwrap_or(View::NotFound.title()),
        view => view.title(),
    };
    format!("{} | {}", page, PROFILE.name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_href_distinguishes_query_and_fragment() {
        let plain = location_href("/about", "", "");
        assert_eq!(plain, "/about");
        assert_eq!(location_href("/about", "ref=x", ""), "/about?ref=x");
        assert_eq!(location_href("/about", "?ref=x", "#team"), "/about?ref=x#team");
        assert_eq!(location_href("/about", "", "team"), "/about#team");

        assert_ne!(location_href("/about", "ref=x", ""), plain);
        assert_ne!(location_href("/about", "", "#team"), plain);
        assert_eq!(
            RouteTable::global().resolve(&location_href("/about", "ref=x", "team")),
            RouteTable::global().resolve(&plain)
        );
    }

    #[test]
    fn test_document_title() {
        let table = RouteTable::global();
        assert_eq!(
            document_title(&table.resolve("/about")),
            format!("About | {}", PROFILE.name)
        );
        assert_eq!(
            document_title(&table.resolve("/projects/1")),
            format!("Mental Health Journal App | {}", PROFILE.name)
        );
        assert_eq!(
            document_title(&table.resolve("/projects/999")),
            format!("Page Not Found | {}", PROFILE.name)
        );
        assert_eq!(
            document_title(&table.resolve("/nope")),
            format!("Page Not Found | {}", PROFILE.name)
        );
    }
}
