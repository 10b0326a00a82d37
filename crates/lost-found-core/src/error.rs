//! Error Types
//!
//! Store and intake failures. Reading a collection never errors; only
//! writes and validation do.

use std::fmt;

/// Result type for store writes
pub type StoreResult<T> = Result<T, StoreError>;

/// Result type for form submissions
pub type IntakeResult<T> = Result<T, IntakeError>;

/// Storage-level errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Collection could not be encoded
    Encode(String),
    /// Backend rejected the write (quota, unavailable storage)
    Write(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Encode(msg) => write!(f, "Encode error: {}", msg),
            StoreError::Write(msg) => write!(f, "Write error: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

/// Form submission errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntakeError {
    /// Required fields left blank, by persisted field name
    MissingFields(Vec<&'static str>),
    /// Record was valid but could not be stored
    Store(StoreError),
}

impl IntakeError {
    /// Fields to mark with error styling
    pub fn missing_fields(&self) -> &[&'static str] {
        match self {
            IntakeError::MissingFields(fields) => fields,
            IntakeError::Store(_) => &[],
        }
    }
}

impl fmt::Display for IntakeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntakeError::MissingFields(fields) => {
                write!(f, "Missing required fields: {}", fields.join(", "))
            }
            IntakeError::Store(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for IntakeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IntakeError::Store(err) => Some(err),
            IntakeError::MissingFields(_) => None,
        }
    }
}

impl From<StoreError> for IntakeError {
    fn from(err: StoreError) -> Self {
        IntakeError::Store(err)
    }
}
