//! Projects Page
//!
//! The full project catalog.

use folio::catalog::Catalog;
use leptos::*;

use crate::components::ProjectCard;

/// Projects page component
#[component]
pub fn Projects() -> impl IntoView {
    let catalog = Catalog::global();

    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Projects"</h1>
                <p class="text-gray-400 mt-1">{format!("{} things I've built", catalog.len())}</p>
            </div>

            {if catalog.is_empty() {
                view! { <p class="text-gray-400">"Nothing here yet."</p> }.into_view()
            } else {
                view! {
                    <div class="grid md:grid-cols-2 gap-6">
                        {catalog.all().iter().map(|project| view! {
                            <ProjectCard project=project />
                        }).collect_view()}
                    </div>
                }.into_view()
            }}
        </div>
    }
}
