//! Form Intake
//!
//! Turns raw form values into records, validates required fields and
//! appends valid records to the store.

use log::{info, warn};

use crate::error::{IntakeError, IntakeResult};
use crate::record::{CollectionRecord, FoundItemRecord, LostItemRecord, RecordKind};
use crate::storage::KeyValueStorage;
use crate::store::RecordStore;

pub const MISSING_FIELDS_MESSAGE: &str = "⚠️ Please fill all required fields.";
pub const STORE_FAILED_MESSAGE: &str =
    "⚠️ Could not save your report. Browser storage may be full or disabled.";
pub const LOST_SUCCESS_MESSAGE: &str =
    "✓ Lost item report submitted successfully! Data stored locally in this browser.";
pub const FOUND_SUCCESS_MESSAGE: &str =
    "✓ Found item report submitted successfully! Data stored locally in this browser.";

/// Raw values of a submission form
pub trait FormInput {
    type Record: CollectionRecord;

    /// Trim text fields, pass date fields through as entered
    fn normalize(&self) -> Self::Record;
}

/// Values of the lost item form as typed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LostItemInput {
    pub item_name: String,
    pub category: String,
    pub last_seen: String,
    pub date_lost: String,
    pub description: String,
    pub unique_marks: String,
    pub contact: String,
    /// Data URI of the selected photo, empty when none
    pub photo_url: String,
}

impl FormInput for LostItemInput {
    type Record = LostItemRecord;

    fn normalize(&self) -> LostItemRecord {
        LostItemRecord {
            item_name: self.item_name.trim().to_string(),
            category: self.category.trim().to_string(),
            last_seen: self.last_seen.trim().to_string(),
            date_lost: self.date_lost.clone(),
            description: self.description.trim().to_string(),
            unique_marks: self.unique_marks.trim().to_string(),
            contact: self.contact.trim().to_string(),
            photo_url: self.photo_url.clone(),
        }
    }
}

/// Values of the found item form as typed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FoundItemInput {
    pub category: String,
    pub found_location: String,
    pub date_found: String,
    pub kept_at: String,
    pub contact: String,
    pub notes: String,
}

impl FormInput for FoundItemInput {
    type Record = FoundItemRecord;

    fn normalize(&self) -> FoundItemRecord {
        FoundItemRecord {
            category: self.category.trim().to_string(),
            found_location: self.found_location.trim().to_string(),
            date_found: self.date_found.clone(),
            kept_at: self.kept_at.trim().to_string(),
            contact: self.contact.trim().to_string(),
            notes: self.notes.trim().to_string(),
        }
    }
}

/// Message kind, doubles as the CSS modifier class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

impl MessageKind {
    pub fn as_class(&self) -> &'static str {
        match self {
            MessageKind::Success => "success",
            MessageKind::Error => "error",
        }
    }
}

/// Inline message shown under a form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormMessage {
    pub kind: MessageKind,
    pub text: &'static str,
}

impl FormMessage {
    /// Message for the outcome of a submission of `kind`
    pub fn for_outcome<T>(kind: RecordKind, outcome: &IntakeResult<T>) -> Self {
        match outcome {
            Ok(_) => Self {
                kind: MessageKind::Success,
                text: match kind {
                    RecordKind::Lost => LOST_SUCCESS_MESSAGE,
                    RecordKind::Found => FOUND_SUCCESS_MESSAGE,
                },
            },
            Err(IntakeError::MissingFields(_)) => Self {
                kind: MessageKind::Error,
                text: MISSING_FIELDS_MESSAGE,
            },
            Err(IntakeError::Store(_)) => Self {
                kind: MessageKind::Error,
                text: STORE_FAILED_MESSAGE,
            },
        }
    }

    /// Class list for the message element
    pub fn class(&self) -> String {
        format!("form-msg show {}", self.kind.as_class())
    }
}

/// Validates submissions and writes them through a record store
pub struct FormIntake<'a, S> {
    store: &'a RecordStore<S>,
}

impl<'a, S: KeyValueStorage> FormIntake<'a, S> {
    pub fn new(store: &'a RecordStore<S>) -> Self {
        Self { store }
    }

    /// Validate and store one submission.
    ///
    /// Returns the stored record. Nothing is written when validation fails.
    pub fn submit<I: FormInput>(&self, input: &I) -> IntakeResult<I::Record> {
        let record = input.normalize();
        let missing = record.missing_fields();
        if !missing.is_empty() {
            warn!(
                "[INTAKE] Rejected {} report, missing: {}",
                I::Record::KIND.as_str(),
                missing.join(", ")
            );
            return Err(IntakeError::MissingFields(missing));
        }

        self.store.append_record(record.clone().into())?;
        info!("[INTAKE] Stored {} report", I::Record::KIND.as_str());
        Ok(record)
    }
}
