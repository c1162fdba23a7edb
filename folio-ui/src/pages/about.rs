//! About Page

use folio::content::PROFILE;
use leptos::*;

/// About page component
#[component]
pub fn About() -> impl IntoView {
    view! {
        <div class="max-w-3xl space-y-6">
            <div>
                <h1 class="text-3xl font-bold">"About"</h1>
                <p class="text-gray-400 mt-1">{PROFILE.headline}</p>
            </div>

            {PROFILE.about.iter().map(|paragraph| view! {
                <p class="text-gray-300 leading-relaxed">{*paragraph}</p>
            }).collect_view()}
        </div>
    }
}
