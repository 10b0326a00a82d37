//! Listing Tabs Component
//!
//! Tab bar for switching between the lost and found result panels.

use leptos::prelude::*;
use lost_found_core::RecordKind;

use crate::store::{use_listing_store, ListingStateStoreFields};

const TABS: [RecordKind; 2] = [RecordKind::Lost, RecordKind::Found];

fn tab_label(tab: RecordKind) -> String {
    format!("{} Items", tab.label())
}

#[component]
pub fn ListingTabs(lost_count: Signal<usize>, found_count: Signal<usize>) -> impl IntoView {
    let state = use_listing_store();

    view! {
        <div class="tabs">
            {TABS.into_iter().map(|tab| {
                let is_active = move || state.tab().get() == tab;
                let count = move || match tab {
                    RecordKind::Lost => lost_count.get(),
                    RecordKind::Found => found_count.get(),
                };
                view! {
                    <button
                        type="button"
                        class=move || if is_active() { "tab active" } else { "tab" }
                        on:click=move |_| state.tab().set(tab)
                    >
                        {tab_label(tab)} " (" {count} ")"
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
