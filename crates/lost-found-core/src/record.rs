//! Record Entities
//!
//! The two record shapes shown on the site. Field names serialize in
//! camelCase, which is also the persisted layout in local storage.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

use crate::seed::SeedData;

/// Which collection a record belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Lost,
    Found,
}

impl RecordKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::Lost => "lost",
            RecordKind::Found => "found",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RecordKind::Lost => "Lost",
            RecordKind::Found => "Found",
        }
    }
}

/// Contract shared by both record shapes
///
/// Ties a shape to its collection and describes which fields are required,
/// searchable and used for category filtering.
pub trait CollectionRecord: Clone + Serialize + DeserializeOwned + Into<Record> {
    /// Collection this shape is stored in
    const KIND: RecordKind;

    /// Field names (camelCase) that must be non-empty at append time
    const REQUIRED_FIELDS: &'static [&'static str];

    /// Seed records of this shape
    fn seeded(seed: &SeedData) -> &[Self];

    /// Look up a text field by its persisted name
    fn field(&self, name: &str) -> Option<&str>;

    fn category(&self) -> &str;

    /// Searchable fields joined by single spaces
    fn haystack(&self) -> String;

    /// Required fields that are currently empty, in declaration order
    fn missing_fields(&self) -> Vec<&'static str> {
        Self::REQUIRED_FIELDS
            .iter()
            .copied()
            .filter(|name| self.field(name).map_or(true, str::is_empty))
            .collect()
    }
}

/// An item someone lost
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LostItemRecord {
    pub item_name: String,
    pub category: String,
    /// Where the item was last seen
    pub last_seen: String,
    /// Calendar date as entered, not parsed
    pub date_lost: String,
    pub description: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub unique_marks: String,
    pub contact: String,
    /// Data URI or relative path, empty when no photo was attached
    #[serde(default, deserialize_with = "null_as_empty")]
    pub photo_url: String,
}

impl CollectionRecord for LostItemRecord {
    const KIND: RecordKind = RecordKind::Lost;
    const REQUIRED_FIELDS: &'static [&'static str] = &[
        "itemName",
        "category",
        "lastSeen",
        "dateLost",
        "description",
        "contact",
    ];

    fn seeded(seed: &SeedData) -> &[Self] {
        &seed.lost
    }

    fn field(&self, name: &str) -> Option<&str> {
        let value = match name {
            "itemName" => &self.item_name,
            "category" => &self.category,
            "lastSeen" => &self.last_seen,
            "dateLost" => &self.date_lost,
            "description" => &self.description,
            "uniqueMarks" => &self.unique_marks,
            "contact" => &self.contact,
            "photoUrl" => &self.photo_url,
            _ => return None,
        };
        Some(value.as_str())
    }

    fn category(&self) -> &str {
        &self.category
    }

    fn haystack(&self) -> String {
        [
            self.item_name.as_str(),
            &self.category,
            &self.last_seen,
            &self.description,
            &self.unique_marks,
        ]
        .join(" ")
    }
}

/// An item someone found and is holding
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoundItemRecord {
    pub category: String,
    pub found_location: String,
    /// Calendar date as entered, not parsed
    pub date_found: String,
    /// Who or where has custody of the item
    pub kept_at: String,
    pub contact: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub notes: String,
}

impl CollectionRecord for FoundItemRecord {
    const KIND: RecordKind = RecordKind::Found;
    const REQUIRED_FIELDS: &'static [&'static str] = &[
        "category",
        "foundLocation",
        "dateFound",
        "keptAt",
        "contact",
    ];

    fn seeded(seed: &SeedData) -> &[Self] {
        &seed.found
    }

    fn field(&self, name: &str) -> Option<&str> {
        let value = match name {
            "category" => &self.category,
            "foundLocation" => &self.found_location,
            "dateFound" => &self.date_found,
            "keptAt" => &self.kept_at,
            "contact" => &self.contact,
            "notes" => &self.notes,
            _ => return None,
        };
        Some(value.as_str())
    }

    fn category(&self) -> &str {
        &self.category
    }

    fn haystack(&self) -> String {
        [self.category.as_str(), &self.found_location, &self.notes].join(" ")
    }
}

/// Either record shape
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    Lost(LostItemRecord),
    Found(FoundItemRecord),
}

impl Record {
    pub fn kind(&self) -> RecordKind {
        match self {
            Record::Lost(_) => RecordKind::Lost,
            Record::Found(_) => RecordKind::Found,
        }
    }
}

impl From<LostItemRecord> for Record {
    fn from(record: LostItemRecord) -> Self {
        Record::Lost(record)
    }
}

impl From<FoundItemRecord> for Record {
    fn from(record: FoundItemRecord) -> Self {
        Record::Found(record)
    }
}

/// Optional text fields accept a missing key or `null`
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lost_missing_fields() {
        let record = LostItemRecord {
            item_name: "Umbrella".to_string(),
            category: "Umbrella".to_string(),
            ..Default::default()
        };
        assert_eq!(
            record.missing_fields(),
            vec!["lastSeen", "dateLost", "description", "contact"]
        );
    }

    #[test]
    fn test_optional_fields_not_required() {
        let record = FoundItemRecord {
            category: "Keys".to_string(),
            found_location: "Library".to_string(),
            date_found: "2025-11-02".to_string(),
            kept_at: "Front desk".to_string(),
            contact: "desk@example.com".to_string(),
            notes: String::new(),
        };
        assert!(record.missing_fields().is_empty());
    }

    #[test]
    fn test_camel_case_layout() {
        let json = r#"{"itemName":"Pen","category":"Stationery","lastSeen":"Hall",
            "dateLost":"2025-01-01","description":"Black pen","uniqueMarks":null,
            "contact":"a@b.c"}"#;
        let record: LostItemRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.item_name, "Pen");
        assert_eq!(record.unique_marks, "");
        assert_eq!(record.photo_url, "");

        let out = serde_json::to_value(&record).unwrap();
        assert_eq!(out["lastSeen"], "Hall");
        assert_eq!(out["photoUrl"], "");
    }

    #[test]
    fn test_haystack_fields() {
        let record = FoundItemRecord {
            category: "ID Card".to_string(),
            found_location: "Near CSE block".to_string(),
            kept_at: "With Finder".to_string(),
            notes: "Blue lanyard".to_string(),
            ..Default::default()
        };
        assert_eq!(record.haystack(), "ID Card Near CSE block Blue lanyard");
    }

    #[test]
    fn test_record_kind() {
        let record: Record = FoundItemRecord::default().into();
        assert_eq!(record.kind(), RecordKind::Found);
        assert_eq!(record.kind().as_str(), "found");
    }
}
