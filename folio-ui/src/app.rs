//! App Root Component
//!
//! Main application component with routing and layout.

use chrono::Datelike;
use folio::content::PROFILE;
use folio::router::{RouteMatch, View as PageView};
use leptos::*;
use leptos_router::*;

use crate::components::Nav;
use crate::pages::{About, Contact, Home, NotFound, ProjectDetails, Projects, Skills};
use crate::state::navigation::{use_navigation_effects, use_route_match};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <div class="min-h-screen bg-gray-900 text-white flex flex-col">
                // Navigation header
                <Nav />

                // Main content area
                <main class="flex-1 container mx-auto px-4 py-8">
                    // Dispatch goes through the shared route table rather than
                    // per-path <Route> entries, so the server agrees on 404s.
                    <Routes>
                        <Route path="/*any" view=RoutedPage />
                    </Routes>
                </main>

                <Footer />
            </div>
        </Router>
    }
}

/// Renders the view the route table picks for the current location
#[component]
fn RoutedPage() -> impl IntoView {
    let route = use_route_match();
    use_navigation_effects(route);

    move || route.with(render_view)
}

fn render_view(matched: &RouteMatch) -> View {
    match matched.view {
        PageView::Home => view! { <Home /> }.into_view(),
        PageView::About => view! { <About /> }.into_view(),
        PageView::Skills => view! { <Skills /> }.into_view(),
        PageView::Projects => view! { <Projects /> }.into_view(),
        PageView::ProjectDetails => {
            let id = matched.param("id").unwrap_or_default().to_string();
            view! { <ProjectDetails id=id /> }.into_view()
        }
        PageView::Contact => view! { <Contact /> }.into_view(),
        PageView::NotFound => view! { <NotFound /> }.into_view(),
    }
}

/// Site footer
#[component]
fn Footer() -> impl IntoView {
    let year = chrono::Utc::now().year();

    view! {
        <footer class="bg-gray-800 border-t border-gray-700 py-4 px-4">
            <div class="container mx-auto flex items-center justify-between text-sm text-gray-400">
                <span>{format!("© {} {}", year, PROFILE.name)}</span>
                <A href="/contact" class="hover:text-white transition-colors">
                    "Get in touch"
                </A>
            </div>
        </footer>
    }
}
