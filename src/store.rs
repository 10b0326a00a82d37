//! Listing Page State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity on the search
//! box, the category selector and the active tab.

use leptos::prelude::*;
use lost_found_core::{ListingFilter, RecordKind, ALL_CATEGORIES};
use reactive_stores::Store;

/// Listing controls with field-level reactivity
#[derive(Clone, Debug, Store)]
pub struct ListingState {
    /// Free-text search
    pub query: String,
    /// Selected category, "all" for no filtering
    pub category: String,
    /// Visible result panel
    pub tab: RecordKind,
}

impl Default for ListingState {
    fn default() -> Self {
        Self {
            query: String::new(),
            category: ALL_CATEGORIES.to_string(),
            tab: RecordKind::Lost,
        }
    }
}

/// Type alias for the store
pub type ListingStore = Store<ListingState>;

/// Get the listing store from context
pub fn use_listing_store() -> ListingStore {
    expect_context::<ListingStore>()
}

/// Current filter, tracked
pub fn current_filter(store: &ListingStore) -> ListingFilter {
    ListingFilter::new(store.query().get(), store.category().get())
}
