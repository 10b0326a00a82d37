//! Frontend Models
//!
//! Page-level enums. Record shapes live in `lost_found_core`.

/// Which page the document is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMode {
    /// Lost item submission form
    Lost,
    /// Found item submission form
    Found,
    /// Listing with search and filters
    Items,
}

impl PageMode {
    pub const ALL: [PageMode; 3] = [PageMode::Items, PageMode::Lost, PageMode::Found];

    /// Parse the `data-page` attribute, unknown values fall back to the listing
    pub fn from_attr(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("lost") => PageMode::Lost,
            Some("found") => PageMode::Found,
            _ => PageMode::Items,
        }
    }

    pub fn nav_label(&self) -> &'static str {
        match self {
            PageMode::Lost => "Report Lost",
            PageMode::Found => "Report Found",
            PageMode::Items => "Browse Items",
        }
    }
}

/// Category choices offered on the submission forms
pub const CATEGORY_PRESETS: &[&str] = &[
    "Electronics",
    "Earbuds / Earphones",
    "Water Bottle",
    "Bottle",
    "ID Card",
    "Keys",
    "Wallet",
    "Bag",
    "Books / Stationery",
    "Clothing",
    "Other",
];
