//! Site Configuration
//!
//! Storage key names and intake timing. Defaults match the keys already
//! present in visitors' browsers.

use crate::record::RecordKind;

/// Default local storage key for lost records
pub const DEFAULT_LOST_KEY: &str = "clf_lostItems";
/// Default local storage key for found records
pub const DEFAULT_FOUND_KEY: &str = "clf_foundItems";
/// Default pause between pressing submit and processing the form
pub const DEFAULT_SUBMIT_DELAY_MS: u32 = 800;

/// Storage key per collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKeys {
    pub lost: String,
    pub found: String,
}

impl StorageKeys {
    pub fn key_for(&self, kind: RecordKind) -> &str {
        match kind {
            RecordKind::Lost => &self.lost,
            RecordKind::Found => &self.found,
        }
    }
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            lost: DEFAULT_LOST_KEY.to_string(),
            found: DEFAULT_FOUND_KEY.to_string(),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub keys: StorageKeys,
    /// Cosmetic delay before a submission is validated and stored
    pub submit_delay_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            keys: StorageKeys::default(),
            submit_delay_ms: DEFAULT_SUBMIT_DELAY_MS,
        }
    }
}

impl AppConfig {
    /// Override the submit delay from a raw attribute value.
    /// Unparseable values keep the current delay.
    pub fn with_submit_delay(mut self, raw: Option<&str>) -> Self {
        if let Some(ms) = raw.and_then(|s| s.trim().parse::<u32>().ok()) {
            self.submit_delay_ms = ms;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_keys() {
        let config = AppConfig::default();
        assert_eq!(config.keys.key_for(RecordKind::Lost), "clf_lostItems");
        assert_eq!(config.keys.key_for(RecordKind::Found), "clf_foundItems");
        assert_eq!(config.submit_delay_ms, 800);
    }

    #[test]
    fn test_submit_delay_override() {
        assert_eq!(AppConfig::default().with_submit_delay(Some(" 250 ")).submit_delay_ms, 250);
        assert_eq!(AppConfig::default().with_submit_delay(Some("soon")).submit_delay_ms, 800);
        assert_eq!(AppConfig::default().with_submit_delay(None).submit_delay_ms, 800);
    }
}
