//! Project Details Page
//!
//! One catalog entry, chosen by the `id` route prop. A prop that is not a
//! known id renders a not-found state in place of the project.

use folio::catalog::{Catalog, Project};
use leptos::*;
use leptos_router::*;

use crate::components::TechBadges;

/// Project details page component
#[component]
pub fn ProjectDetails(
    /// Raw `:id` route parameter
    #[prop(into)]
    id: String,
) -> impl IntoView {
    match Catalog::global().lookup(&id) {
        Ok(project) => view! { <ProjectView project=project /> }.into_view(),
        Err(e) => {
            web_sys::console::warn_1(&format!("Project lookup failed: {}", e).into());
            view! { <ProjectNotFound id=id /> }.into_view()
        }
    }
}

#[component]
fn ProjectView(project: &'static Project) -> impl IntoView {
    view! {
        <article class="max-w-3xl space-y-6">
            <A href="/projects" class="text-sm text-gray-400 hover:text-white">
                "← All projects"
            </A>

            <h1 class="text-3xl font-bold">{project.title}</h1>

            {project.image.map(|src| view! {
                <img src=src alt=project.title class="rounded-xl w-full object-cover" />
            })}

            <p class="text-gray-300 leading-relaxed">{project.description}</p>

            <section>
                <h2 class="text-lg font-semibold mb-3">"Built with"</h2>
                <TechBadges tech=project.tech />
            </section>

            <div class="flex space-x-4">
                <a
                    href=project.github
                    target="_blank"
                    rel="noopener"
                    class="px-6 py-3 bg-gray-700 hover:bg-gray-600 rounded-lg font-medium transition-colors"
                >
                    "Source on GitHub"
                </a>
                {project.demo.map(|href| view! {
                    <a
                        href=href
                        target="_blank"
                        rel="noopener"
                        class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
                    >
                        "Live demo"
                    </a>
                })}
            </div>
        </article>
    }
}

#[component]
fn ProjectNotFound(id: String) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <h1 class="text-3xl font-bold mb-2">"Project Not Found"</h1>
            <p class="text-gray-400 mb-6">{format!("There is no project with id {:?}.", id)}</p>
            <A
                href="/projects"
                class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
            >
                "Browse projects"
            </A>
        </div>
    }
}
