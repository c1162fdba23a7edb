//! Portfolio Front-End
//!
//! Personal portfolio site built with Leptos (WASM).
//!
//! # Pages
//!
//! - Home, About, Skills, Contact: static profile content
//! - Projects: the project catalog
//! - Project details: one catalog entry, selected by the `:id` route prop
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. Every location change is resolved through the `folio` route
//! table, so the server and the browser agree on which paths exist. The
//! catalog is compiled in; nothing is fetched at runtime.
//!
//! Build with `trunk build --release`, then serve `dist/` with the `folio`
//! server binary.

use leptos::*;

mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    state::navigation::disable_scroll_restoration();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
