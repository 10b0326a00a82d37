//! Category Filter Component
//!
//! Select populated from the categories present in the listing.

use leptos::prelude::*;
use lost_found_core::ALL_CATEGORIES;

use crate::store::{use_listing_store, ListingStateStoreFields};

#[component]
pub fn CategoryFilter(options: Memo<Vec<String>>) -> impl IntoView {
    let state = use_listing_store();

    view! {
        <select
            id="categoryFilter"
            on:change=move |ev| state.category().set(event_target_value(&ev))
        >
            {move || options.get().into_iter().map(|opt| {
                let label = if opt == ALL_CATEGORIES { "All categories".to_string() } else { opt.clone() };
                let value = opt.clone();
                let is_selected = move || state.category().get().eq_ignore_ascii_case(&opt);
                view! {
                    <option value=value selected=is_selected>{label}</option>
                }
            }).collect_view()}
        </select>
    }
}
