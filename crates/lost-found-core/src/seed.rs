//! Seed Data
//!
//! Example records shown on the listing page ahead of anything stored in
//! the visitor's browser.

use crate::record::{FoundItemRecord, LostItemRecord};

/// Fixed records merged in front of stored ones
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedData {
    pub lost: Vec<LostItemRecord>,
    pub found: Vec<FoundItemRecord>,
}

impl SeedData {
    pub fn new(lost: Vec<LostItemRecord>, found: Vec<FoundItemRecord>) -> Self {
        Self { lost, found }
    }

    /// The campus demo set
    pub fn demo() -> Self {
        Self::new(demo_lost(), demo_found())
    }
}

fn demo_lost() -> Vec<LostItemRecord> {
    vec![
        LostItemRecord {
            item_name: "Realme TechLife Earbuds (Blue)".to_string(),
            category: "Earbuds / Earphones".to_string(),
            last_seen: "LNCTS Old Campus – F11 Lab".to_string(),
            date_lost: "2025-11-20".to_string(),
            description: "Navy blue Realme TechLife TWS earbuds with charging case.".to_string(),
            unique_marks: "Small scratch on the back side of the charging case.".to_string(),
            contact: "student1@lncts.ac.in".to_string(),
            photo_url: "images/earbuds.png".to_string(),
        },
        LostItemRecord {
            item_name: "Milton Water Bottle (Blue)".to_string(),
            category: "Water Bottle".to_string(),
            last_seen: "LNCTS New Campus – G2 Class".to_string(),
            date_lost: "2025-11-21".to_string(),
            description: "Steel Milton bottle, bright blue colour with white 'milton' logo.".to_string(),
            unique_marks: "Owner's name written with black marker near the bottom.".to_string(),
            contact: "student2@lncts.ac.in".to_string(),
            photo_url: "images/bottel.png".to_string(),
        },
    ]
}

fn demo_found() -> Vec<FoundItemRecord> {
    vec![
        FoundItemRecord {
            category: "ID Card".to_string(),
            found_location: "Near CSE block".to_string(),
            date_found: "2025-11-19".to_string(),
            kept_at: "With Finder".to_string(),
            contact: "personal@example.com".to_string(),
            notes: "Blue lanyard".to_string(),
        },
        FoundItemRecord {
            category: "Bottle".to_string(),
            found_location: "Ground floor canteen".to_string(),
            date_found: "2025-11-17".to_string(),
            kept_at: "Department Office".to_string(),
            contact: "dept@example.com".to_string(),
            notes: "Green steel bottle".to_string(),
        },
    ]
}
