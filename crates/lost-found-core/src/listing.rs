//! Listing View
//!
//! Merges seed records with stored ones, applies the search box and the
//! category selector, and renders both result sets.

use log::debug;

use crate::record::{CollectionRecord, FoundItemRecord, LostItemRecord, RecordKind};
use crate::render::{found_card, lost_card, render_cards};
use crate::seed::SeedData;
use crate::storage::KeyValueStorage;
use crate::store::RecordStore;

/// Category selector value that disables category filtering
pub const ALL_CATEGORIES: &str = "all";

/// Current search text and category selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingFilter {
    pub query: String,
    pub category: String,
}

impl Default for ListingFilter {
    fn default() -> Self {
        Self {
            query: String::new(),
            category: ALL_CATEGORIES.to_string(),
        }
    }
}

impl ListingFilter {
    pub fn new(query: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            category: category.into(),
        }
    }

    /// Whether a record passes both the text query and the category selection
    pub fn matches<R: CollectionRecord>(&self, record: &R) -> bool {
        let query = self.query.to_lowercase();
        let selected = if self.category.is_empty() {
            ALL_CATEGORIES.to_string()
        } else {
            self.category.to_lowercase()
        };

        let query_ok = query.is_empty() || record.haystack().to_lowercase().contains(&query);
        let category_ok = selected == ALL_CATEGORIES || record.category().to_lowercase() == selected;
        query_ok && category_ok
    }

    /// Keep matching records in their original order
    pub fn apply<R: CollectionRecord>(&self, records: Vec<R>) -> Vec<R> {
        records.into_iter().filter(|r| self.matches(r)).collect()
    }
}

/// Seed records followed by stored records
pub fn combine<R: Clone>(seed: &[R], stored: Vec<R>) -> Vec<R> {
    let mut combined = seed.to_vec();
    combined.extend(stored);
    combined
}

/// Rendered output of one listing pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingRender {
    pub lost_html: String,
    pub found_html: String,
    pub lost_count: usize,
    pub found_count: usize,
}

/// Listing over an injected store and seed set
pub struct ListingView<'a, S> {
    store: &'a RecordStore<S>,
    seed: &'a SeedData,
}

impl<'a, S: KeyValueStorage> ListingView<'a, S> {
    pub fn new(store: &'a RecordStore<S>, seed: &'a SeedData) -> Self {
        Self { store, seed }
    }

    pub fn combined_lost(&self) -> Vec<LostItemRecord> {
        self.combined()
    }

    pub fn combined_found(&self) -> Vec<FoundItemRecord> {
        self.combined()
    }

    /// Distinct categories across both kinds, first-seen order,
    /// case-insensitive, preceded by "all"
    pub fn category_options(&self) -> Vec<String> {
        let lost = self.combined_lost();
        let found = self.combined_found();
        let categories = lost
            .iter()
            .map(|r| r.category())
            .chain(found.iter().map(|r| r.category()));

        let mut options = vec![ALL_CATEGORIES.to_string()];
        for category in categories {
            let category = category.trim();
            if category.is_empty() {
                continue;
            }
            let lower = category.to_lowercase();
            if !options.iter().any(|o| o.to_lowercase() == lower) {
                options.push(category.to_string());
            }
        }
        options
    }

    /// Combined records of one kind
    pub fn combined<R: CollectionRecord>(&self) -> Vec<R> {
        combine(R::seeded(self.seed), self.store.load())
    }

    /// Filtered records of one kind
    pub fn filtered<R: CollectionRecord>(&self, filter: &ListingFilter) -> Vec<R> {
        filter.apply(self.combined())
    }

    /// Run combine, filter and render for both kinds
    pub fn render(&self, filter: &ListingFilter) -> ListingRender {
        let lost = filter.apply(self.combined_lost());
        let found = filter.apply(self.combined_found());
        debug!(
            "[LISTING] query={:?} category={:?}: {} lost, {} found",
            filter.query,
            filter.category,
            lost.len(),
            found.len()
        );

        ListingRender {
            lost_html: render_cards(RecordKind::Lost, &lost, lost_card),
            found_html: render_cards(RecordKind::Found, &found, found_card),
            lost_count: lost.len(),
            found_count: found.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StorageKeys;
    use crate::storage::MemoryStorage;

    fn make_lost(name: &str, category: &str) -> LostItemRecord {
        LostItemRecord {
            item_name: name.to_string(),
            category: category.to_string(),
            last_seen: "Library".to_string(),
            date_lost: "2025-11-21".to_string(),
            description: "Stainless steel".to_string(),
            contact: "me@example.com".to_string(),
            ..Default::default()
        }
    }

    fn make_found(category: &str, notes: &str) -> FoundItemRecord {
        FoundItemRecord {
            category: category.to_string(),
            found_location: "Canteen".to_string(),
            date_found: "2025-11-17".to_string(),
            kept_at: "Office".to_string(),
            contact: "dept@example.com".to_string(),
            notes: notes.to_string(),
        }
    }

    fn setup_store() -> RecordStore<MemoryStorage> {
        RecordStore::new(MemoryStorage::new(), StorageKeys::default())
    }

    #[test]
    fn test_seed_precedes_stored() {
        let store = setup_store();
        store.append(make_lost("Stored", "Bottle")).unwrap();
        let seed = SeedData::new(vec![make_lost("Seed", "Bottle")], vec![]);

        let names: Vec<_> = ListingView::new(&store, &seed)
            .combined_lost()
            .into_iter()
            .map(|r| r.item_name)
            .collect();
        assert_eq!(names, vec!["Seed", "Stored"]);
    }

    #[test]
    fn test_empty_filter_is_identity() {
        let store = setup_store();
        store.append(make_found("Keys", "")).unwrap();
        let seed = SeedData::demo();
        let view = ListingView::new(&store, &seed);

        let filter = ListingFilter::default();
        assert_eq!(view.filtered::<FoundItemRecord>(&filter), view.combined_found());
        assert_eq!(view.filtered::<LostItemRecord>(&filter), view.combined_lost());
    }

    #[test]
    fn test_query_is_case_insensitive_substring() {
        let record = make_lost("Blue Bottle", "Bottle");
        assert!(ListingFilter::new("blue", ALL_CATEGORIES).matches(&record));
        assert!(ListingFilter::new("STEEL", ALL_CATEGORIES).matches(&record));
        assert!(!ListingFilter::new("black", ALL_CATEGORIES).matches(&record));
    }

    #[test]
    fn test_query_ignores_unsearched_fields() {
        // contact and keptAt are not searchable
        assert!(!ListingFilter::new("example.com", "all").matches(&make_lost("Pen", "Stationery")));
        assert!(!ListingFilter::new("office", "all").matches(&make_found("Keys", "")));
        assert!(ListingFilter::new("canteen", "all").matches(&make_found("Keys", "")));
    }

    #[test]
    fn test_category_filter() {
        let store = setup_store();
        store.append(make_found("Bottle", "green")).unwrap();
        store.append(make_found("ID Card", "lanyard")).unwrap();
        store.append(make_found("bottle", "red")).unwrap();
        let seed = SeedData::default();
        let view = ListingView::new(&store, &seed);

        let bottles = view.filtered::<FoundItemRecord>(&ListingFilter::new("", "Bottle"));
        assert_eq!(bottles.len(), 2);
        assert!(bottles.iter().all(|r| r.category.eq_ignore_ascii_case("bottle")));

        let render = view.render(&ListingFilter::new("", "Bottle"));
        assert_eq!(render.found_count, 2);
        assert_eq!(render.lost_count, 0);
        assert!(render.lost_html.contains(crate::render::LOST_EMPTY_MESSAGE));
    }

    #[test]
    fn test_category_without_matches_renders_empty_state() {
        let store = setup_store();
        let seed = SeedData::demo();
        let render = ListingView::new(&store, &seed).render(&ListingFilter::new("", "Umbrella"));
        assert_eq!(render.found_count, 0);
        assert!(render.found_html.contains(crate::render::FOUND_EMPTY_MESSAGE));
    }

    #[test]
    fn test_category_options() {
        let store = setup_store();
        store.append(make_found("bottle", "")).unwrap();
        store.append(make_lost("Pen", "Stationery")).unwrap();
        let seed = SeedData::new(vec![make_lost("Cup", "Bottle")], vec![make_found("ID Card", "")]);

        let options = ListingView::new(&store, &seed).category_options();
        assert_eq!(options, vec!["all", "Bottle", "Stationery", "ID Card"]);
    }

    #[test]
    fn test_render_escapes_stored_fields() {
        let store = setup_store();
        let mut record = make_lost("Blue Bottle", "Bottle");
        record.contact = "<b>x</b>".to_string();
        store.append(record).unwrap();
        let seed = SeedData::default();

        let render = ListingView::new(&store, &seed).render(&ListingFilter::default());
        assert_eq!(render.lost_count, 1);
        assert!(render.lost_html.contains("&lt;b&gt;x&lt;/b&gt;"));
        assert!(!render.lost_html.contains("<b>x</b>"));
    }
}
