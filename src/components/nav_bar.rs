//! Navigation Bar Component
//!
//! Site header with links to the three pages.

use leptos::prelude::*;

use crate::context::use_site_context;
use crate::models::PageMode;

#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = use_site_context();
    let page = ctx.page;

    let go_home = {
        let ctx = ctx.clone();
        move |ev: web_sys::MouseEvent| {
            ev.prevent_default();
            ctx.navigate(PageMode::Items);
        }
    };

    view! {
        <header class="navbar">
            <a class="brand" href="#" on:click=go_home>
                "Campus Lost & Found"
            </a>
            <nav class="links">
                {PageMode::ALL.iter().map(|mode| {
                    let mode = *mode;
                    let ctx = ctx.clone();
                    view! {
                        <button
                            type="button"
                            class=move || if page.get() == mode { "nav-link active" } else { "nav-link" }
                            on:click=move |_| ctx.navigate(mode)
                        >
                            {mode.nav_label()}
                        </button>
                    }
                }).collect_view()}
            </nav>
        </header>
    }
}
