//! Listing Page Component
//!
//! Search box, category filter and the lost/found result panels. The
//! listing is recomputed whenever a control changes or a report is stored.

use leptos::prelude::*;
use lost_found_core::{ListingView, RecordKind};
use reactive_stores::Store;

use crate::components::{CategoryFilter, ListingTabs};
use crate::context::use_site_context;
use crate::store::{current_filter, ListingState, ListingStateStoreFields};

#[component]
pub fn ListingPage() -> impl IntoView {
    let ctx = use_site_context();
    let state = Store::new(ListingState::default());
    provide_context(state);

    let render_ctx = ctx.clone();
    let rendered = Memo::new(move |_| {
        render_ctx.records_version.track();
        let filter = current_filter(&state);
        ListingView::new(&render_ctx.store, &render_ctx.seed).render(&filter)
    });

    let categories = Memo::new(move |_| {
        ctx.records_version.track();
        ListingView::new(&ctx.store, &ctx.seed).category_options()
    });

    let panel_class = move |tab: RecordKind| {
        if state.tab().get() == tab { "tab-panel active" } else { "tab-panel" }
    };

    view! {
        <section class="listing-page">
            <h1>"Lost & Found Items"</h1>
            <div class="filters">
                <input
                    id="searchInput"
                    type="search"
                    placeholder="Search by name, place or description..."
                    prop:value=move || state.query().get()
                    on:input=move |ev| state.query().set(event_target_value(&ev))
                />
                <CategoryFilter options=categories />
            </div>

            <ListingTabs
                lost_count=Signal::derive(move || rendered.with(|r| r.lost_count))
                found_count=Signal::derive(move || rendered.with(|r| r.found_count))
            />

            <div
                id="lostList"
                class=move || panel_class(RecordKind::Lost)
                inner_html=move || rendered.with(|r| r.lost_html.clone())
            ></div>
            <div
                id="foundList"
                class=move || panel_class(RecordKind::Found)
                inner_html=move || rendered.with(|r| r.found_html.clone())
            ></div>
        </section>
    }
}
