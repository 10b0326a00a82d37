//! Site Flow Tests
//!
//! Intake, store and listing wired together over an in-memory backend,
//! the same way the frontend wires them over local storage.

#[cfg(test)]
mod tests {
    use crate::{
        AppConfig, FormIntake, FormMessage, FoundItemInput, FoundItemRecord, IntakeError,
        KeyValueStorage, ListingFilter, ListingView, LostItemInput, LostItemRecord, MemoryStorage,
        MessageKind, RecordKind, RecordStore, SeedData, LOST_EMPTY_MESSAGE, MISSING_FIELDS_MESSAGE,
    };

    fn setup_store() -> RecordStore<MemoryStorage> {
        RecordStore::new(MemoryStorage::new(), AppConfig::default().keys)
    }

    fn blue_bottle() -> LostItemInput {
        LostItemInput {
            item_name: "Blue Bottle".to_string(),
            category: "Bottle".to_string(),
            last_seen: "Lab 3".to_string(),
            date_lost: "2025-11-22".to_string(),
            description: "Insulated, dented".to_string(),
            unique_marks: String::new(),
            contact: "<b>x</b>".to_string(),
            photo_url: "data:image/png;base64,iVBORw0KGgo=".to_string(),
        }
    }

    #[test]
    fn test_submitted_report_appears_in_listing() {
        let store = setup_store();
        let seed = SeedData::demo();

        let outcome = FormIntake::new(&store).submit(&blue_bottle());
        assert_eq!(FormMessage::for_outcome(RecordKind::Lost, &outcome).kind, MessageKind::Success);

        let view = ListingView::new(&store, &seed);
        let combined = view.combined_lost();
        assert_eq!(combined.len(), seed.lost.len() + 1);
        assert_eq!(combined.last().map(|r| r.item_name.as_str()), Some("Blue Bottle"));

        let hit = view.render(&ListingFilter::new("blue", "all"));
        assert!(hit.lost_html.contains("Blue Bottle"));
        assert!(hit.lost_html.contains(r#"src="data:image/png;base64,iVBORw0KGgo=""#));
        assert!(hit.lost_html.contains("&lt;b&gt;x&lt;/b&gt;"));

        let miss = view.render(&ListingFilter::new("black", "all"));
        assert!(!miss.lost_html.contains("Blue Bottle"));
    }

    #[test]
    fn test_rejected_report_stores_nothing() {
        let store = setup_store();
        let mut input = blue_bottle();
        input.contact = "   ".to_string();

        let outcome = FormIntake::new(&store).submit(&input);
        assert_eq!(outcome, Err(IntakeError::MissingFields(vec!["contact"])));
        assert_eq!(FormMessage::for_outcome(RecordKind::Lost, &outcome).text, MISSING_FIELDS_MESSAGE);
        assert!(store.load::<LostItemRecord>().is_empty());
    }

    #[test]
    fn test_found_report_category_filter() {
        let store = setup_store();
        let seed = SeedData::demo();
        FormIntake::new(&store)
            .submit(&FoundItemInput {
                category: "bottle".to_string(),
                found_location: "Bus stop".to_string(),
                date_found: "2025-11-23".to_string(),
                kept_at: "Security".to_string(),
                contact: "guard@example.com".to_string(),
                notes: "Red cap".to_string(),
            })
            .unwrap();

        let view = ListingView::new(&store, &seed);
        let bottles = view.filtered::<FoundItemRecord>(&ListingFilter::new("", "Bottle"));
        let places: Vec<_> = bottles.iter().map(|r| r.found_location.as_str()).collect();
        assert_eq!(places, vec!["Ground floor canteen", "Bus stop"]);

        // No lost seed record is in the "Bottle" category
        let render = view.render(&ListingFilter::new("", "Bottle"));
        assert!(render.lost_html.contains(LOST_EMPTY_MESSAGE));
    }

    #[test]
    fn test_corrupt_storage_falls_back_to_seed() {
        let storage = MemoryStorage::new();
        storage.set_item("clf_lostItems", "[{\"broken\"").unwrap();
        let store = RecordStore::new(storage, AppConfig::default().keys);
        let seed = SeedData::demo();

        let view = ListingView::new(&store, &seed);
        assert_eq!(view.combined_lost(), seed.lost);

        // A later submission replaces the corrupt value
        FormIntake::new(&store).submit(&blue_bottle()).unwrap();
        assert_eq!(store.load::<LostItemRecord>().len(), 1);
    }

    #[test]
    fn test_legacy_browser_data_loads() {
        let storage = MemoryStorage::new();
        storage
            .set_item(
                "clf_foundItems",
                r#"[{"category":"Umbrella","foundLocation":"Gate 2","dateFound":"2025-10-01",
                    "keptAt":"Guard room","contact":"g@example.com","notes":""}]"#,
            )
            .unwrap();
        let store = RecordStore::new(storage, AppConfig::default().keys);

        let found = store.load::<FoundItemRecord>();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].kept_at, "Guard room");
    }
}
