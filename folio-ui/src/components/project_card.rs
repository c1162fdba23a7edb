//! Project Card Component
//!
//! Summary tile for one catalog entry, linking to its detail page.

use folio::catalog::Project;
use leptos::*;
use leptos_router::*;

/// Project summary card
#[component]
pub fn ProjectCard(project: &'static Project) -> impl IntoView {
    view! {
        <article class="bg-gray-800 rounded-xl p-6 flex flex-col">
            {project.image.map(|src| view! {
                <img src=src alt=project.title class="rounded-lg mb-4 w-full object-cover" />
            })}

            <h3 class="text-xl font-semibold mb-2">
                <A href=project.detail_path() class="hover:text-primary-400">
                    {project.title}
                </A>
            </h3>
            <p class="text-gray-400 flex-1 mb-4">{project.description}</p>

            <TechBadges tech=project.tech />

            <div class="mt-4 flex items-center space-x-4 text-sm">
                <A href=project.detail_path() class="text-primary-400 hover:underline">
                    "Details"
                </A>
                <a href=project.github target="_blank" rel="noopener" class="text-gray-300 hover:text-white">
                    "GitHub"
                </a>
                {project.demo.map(|href| view! {
                    <a href=href target="_blank" rel="noopener" class="text-gray-300 hover:text-white">
                        "Live demo"
                    </a>
                })}
            </div>
        </article>
    }
}

/// Technology badges, in catalog order
#[component]
pub fn TechBadges(tech: &'static [&'static str]) -> impl IntoView {
    view! {
        <ul class="flex flex-wrap gap-2">
            {tech.iter().map(|t| view! {
                <li class="px-2 py-1 bg-gray-700 rounded text-xs text-gray-200">{*t}</li>
            }).collect_view()}
        </ul>
    }
}
