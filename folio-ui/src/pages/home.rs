//! Home Page
//!
//! Introduction and the most recent projects.

use folio::catalog::Catalog;
use folio::content::PROFILE;
use leptos::*;
use leptos_router::*;

use crate::components::ProjectCard;

/// Number of projects featured on the home page
const FEATURED: usize = 2;

/// Home page component
#[component]
pub fn Home() -> impl IntoView {
    let featured = Catalog::global().all().iter().rev().take(FEATURED);

    view! {
        <div class="space-y-12">
            // Hero
            <section class="py-12">
                <p class="text-primary-400 font-medium">{PROFILE.headline}</p>
                <h1 class="text-4xl font-bold mt-2">{format!("Hi, I'm {}.", PROFILE.name)}</h1>
                <p class="text-gray-400 mt-4 max-w-2xl">{PROFILE.intro}</p>
                <div class="mt-8 flex space-x-4">
                    <A
                        href="/projects"
                        class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
                    >
                        "View projects"
                    </A>
                    <A
                        href="/contact"
                        class="px-6 py-3 bg-gray-700 hover:bg-gray-600 rounded-lg font-medium transition-colors"
                    >
                        "Contact me"
                    </A>
                </div>
            </section>

            // Recent work
            <section>
                <h2 class="text-2xl font-semibold mb-4">"Recent work"</h2>
                <div class="grid md:grid-cols-2 gap-6">
                    {featured.map(|project| view! { <ProjectCard project=project /> }).collect_view()}
                </div>
            </section>
        </div>
    }
}
