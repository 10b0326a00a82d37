//! Site Context
//!
//! Shared state provided via Leptos Context API: the record store, the seed
//! set and configuration are built once in `App` and handed to every page.

use std::sync::Arc;

use leptos::prelude::*;
use lost_found_core::{AppConfig, RecordStore, SeedData};

use crate::local_storage::BrowserStorage;
use crate::models::PageMode;

/// Record store as used by the site
pub type SiteStore = RecordStore<BrowserStorage>;

/// Site-wide dependencies and signals provided via context
#[derive(Clone)]
pub struct SiteContext {
    pub store: Arc<SiteStore>,
    pub seed: Arc<SeedData>,
    pub config: Arc<AppConfig>,
    /// Current page - read
    pub page: ReadSignal<PageMode>,
    /// Current page - write
    set_page: WriteSignal<PageMode>,
    /// Bumped after every successful submission - read
    pub records_version: ReadSignal<u32>,
    /// Bumped after every successful submission - write
    set_records_version: WriteSignal<u32>,
}

impl SiteContext {
    pub fn new(
        store: SiteStore,
        seed: SeedData,
        config: AppConfig,
        page: (ReadSignal<PageMode>, WriteSignal<PageMode>),
        records_version: (ReadSignal<u32>, WriteSignal<u32>),
    ) -> Self {
        Self {
            store: Arc::new(store),
            seed: Arc::new(seed),
            config: Arc::new(config),
            page: page.0,
            set_page: page.1,
            records_version: records_version.0,
            set_records_version: records_version.1,
        }
    }

    /// Switch to another page
    pub fn navigate(&self, mode: PageMode) {
        self.set_page.set(mode);
    }

    /// Signal that stored records changed
    pub fn records_changed(&self) {
        self.set_records_version.update(|v| *v += 1);
    }
}

/// Get the site context
pub fn use_site_context() -> SiteContext {
    expect_context::<SiteContext>()
}
