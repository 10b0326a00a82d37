//! Lost & Found Core
//!
//! Platform-independent half of the site:
//! - record: the two record shapes and their shared contract
//! - storage / store: key-value backends and the record store on top
//! - intake: form validation and submission
//! - listing / render: merge, filter and card markup
//!
//! The frontend crate supplies a local-storage backend and the Leptos views.

mod config;
mod error;
mod intake;
mod listing;
mod pending;
mod record;
mod render;
mod seed;
mod storage;
mod store;

mod tests;

pub use config::{AppConfig, StorageKeys, DEFAULT_FOUND_KEY, DEFAULT_LOST_KEY, DEFAULT_SUBMIT_DELAY_MS};
pub use error::{IntakeError, IntakeResult, StoreError, StoreResult};
pub use intake::{
    FormInput, FormIntake, FormMessage, FoundItemInput, LostItemInput, MessageKind,
    FOUND_SUCCESS_MESSAGE, LOST_SUCCESS_MESSAGE, MISSING_FIELDS_MESSAGE, STORE_FAILED_MESSAGE,
};
pub use listing::{combine, ListingFilter, ListingRender, ListingView, ALL_CATEGORIES};
pub use pending::{LatestWins, Ticket};
pub use record::{CollectionRecord, FoundItemRecord, LostItemRecord, Record, RecordKind};
pub use render::{escape_html, found_card, lost_card, render_cards, safe_photo_src, FOUND_EMPTY_MESSAGE, LOST_EMPTY_MESSAGE};
pub use seed::SeedData;
pub use storage::{KeyValueStorage, MemoryStorage};
pub use store::RecordStore;
