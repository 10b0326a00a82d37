//! Lost & Found Frontend App
//!
//! Builds the shared dependencies once and mounts the page the document
//! asks for via `<body data-page="lost|found|items">`.

use leptos::prelude::*;
use lost_found_core::{AppConfig, RecordStore, SeedData};

use crate::components::{FoundForm, ListingPage, LostForm, NavBar};
use crate::context::SiteContext;
use crate::local_storage::BrowserStorage;
use crate::models::PageMode;

/// Read a `data-*` attribute of `<body>` by its dataset name
fn body_data(name: &str) -> Option<String> {
    web_sys::window()?.document()?.body()?.dataset().get(name)
}

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::default().with_submit_delay(body_data("submitDelayMs").as_deref());
    let initial_page = PageMode::from_attr(body_data("page").as_deref());

    let storage = BrowserStorage::new();
    if !storage.is_persistent() {
        log::warn!("[APP] localStorage unavailable, reports will be lost on reload");
    }
    let store = RecordStore::new(storage, config.keys.clone());
    log::info!("[APP] Starting on {:?} page, submit delay {}ms", initial_page, config.submit_delay_ms);

    let ctx = SiteContext::new(store, SeedData::demo(), config, signal(initial_page), signal(0u32));
    provide_context(ctx.clone());

    view! {
        <NavBar />
        <main class="container">
            {move || match ctx.page.get() {
                PageMode::Lost => view! { <LostForm /> }.into_any(),
                PageMode::Found => view! { <FoundForm /> }.into_any(),
                PageMode::Items => view! { <ListingPage /> }.into_any(),
            }}
        </main>
        <footer class="footer">
            <p class="subtle">"Reports are saved in this browser only and are not shared with anyone."</p>
        </footer>
    }
}
