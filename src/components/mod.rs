//! UI Components
//!
//! Pages and the form controls they are built from.

mod nav_bar;
mod form_field;
mod form_message;
mod submit_button;
mod submission;
mod photo_picker;
mod lost_form;
mod found_form;
mod category_filter;
mod listing_tabs;
mod listing_page;

pub use nav_bar::NavBar;
pub use form_field::{SelectField, TextField};
pub use form_message::FormMessageLine;
pub use submit_button::SubmitButton;
pub use submission::FormSignals;
pub use photo_picker::PhotoPicker;
pub use lost_form::LostForm;
pub use found_form::FoundForm;
pub use category_filter::CategoryFilter;
pub use listing_tabs::ListingTabs;
pub use listing_page::ListingPage;
