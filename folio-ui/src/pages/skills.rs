//! Skills Page
//!
//! Skill groups, followed by the technologies used across the projects.

use folio::catalog::Catalog;
use folio::content::SKILLS;
use leptos::*;

use crate::components::TechBadges;

/// Skills page component
#[component]
pub fn Skills() -> impl IntoView {
    let catalog = Catalog::global();
    let used = catalog.tech_index();

    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Skills"</h1>
                <p class="text-gray-400 mt-1">"What I work with day to day"</p>
            </div>

            <div class="grid md:grid-cols-2 gap-6">
                {SKILLS.iter().map(|group| view! {
                    <section class="bg-gray-800 rounded-xl p-6">
                        <h2 class="text-lg font-semibold mb-4">{group.title}</h2>
                        <TechBadges tech=group.skills />
                    </section>
                }).collect_view()}
            </div>

            <section>
                <h2 class="text-lg font-semibold mb-4">"Used in my projects"</h2>
                <ul class="space-y-2">
                    {used.into_iter().map(|tech| {
                        let count = catalog.using(tech).count();
                        view! {
                            <li class="flex items-center justify-between bg-gray-800 rounded-lg px-4 py-2">
                                <span>{tech}</span>
                                <span class="text-sm text-gray-400">
                                    {format!("{} project{}", count, if count == 1 { "" } else { "s" })}
                                </span>
                            </li>
                        }
                    }).collect_view()}
                </ul>
            </section>
        </div>
    }
}
