//! Contact Page

use folio::content::{CONTACT, PROFILE};
use leptos::*;

/// Contact page component
#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <div class="max-w-xl space-y-6">
            <div>
                <h1 class="text-3xl font-bold">"Contact"</h1>
                <p class="text-gray-400 mt-1">
                    {format!("Want to work with {}? Reach out.", PROFILE.name)}
                </p>
            </div>

            <ul class="space-y-3">
                {CONTACT.iter().map(|link| view! {
                    <li class="bg-gray-800 rounded-lg px-4 py-3 flex items-center justify-between">
                        <span class="text-gray-400">{link.label}</span>
                        <a href=link.href target="_blank" rel="noopener" class="text-primary-400 hover:underline">
                            {link.href.trim_start_matches("mailto:")}
                        </a>
                    </li>
                }).collect_view()}
            </ul>
        </div>
    }
}
