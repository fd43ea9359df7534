//! Localized UI strings.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components look labels up by key so copy can change per locale without
//! touching markup. The en-US table is bundled at compile time; embedding apps
//! may provide another table through context.

#[cfg(test)]
#[path = "i18n_test.rs"]
mod i18n_test;

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

const EN_US: &str = include_str!("../res/strings/en-us.json");

/// String table keys used by the portal components.
pub mod keys {
    pub const CHAT_INPUT_PLACEHOLDER: &str = "CHAT_INPUT_PLACEHOLDER";
    pub const CHAT_INFO_REPLIES: &str = "CHAT_INFO_REPLIES";
    pub const CHAT_INFO_VIEWS: &str = "CHAT_INFO_VIEWS";
    pub const CHAT_LOGIN_MESSAGE: &str = "CHAT_LOGIN_MESSAGE";
    pub const EVENTS_HEADER: &str = "EVENTS_HEADER";
    pub const EVENTS_SEARCH_PLACEHOLDER: &str = "EVENTS_SEARCH_PLACEHOLDER";
    pub const NEWS_PREVIEW_HEADER: &str = "NEWS_PREVIEW_HEADER";
    pub const UPCOMING_EVENTS_HEADER: &str = "UPCOMING_EVENTS_HEADER";
    pub const UPCOMING_EVENTS_VIEW_ALL: &str = "UPCOMING_EVENTS_VIEW_ALL";

    /// Every key a complete table must define.
    pub const ALL: &[&str] = &[
        CHAT_INPUT_PLACEHOLDER,
        CHAT_INFO_REPLIES,
        CHAT_INFO_VIEWS,
        CHAT_LOGIN_MESSAGE,
        EVENTS_HEADER,
        EVENTS_SEARCH_PLACEHOLDER,
        NEWS_PREVIEW_HEADER,
        UPCOMING_EVENTS_HEADER,
        UPCOMING_EVENTS_VIEW_ALL,
    ];
}

/// Error returned by [`Localization::from_json`].
#[derive(Debug, thiserror::Error)]
pub enum LocalizationError {
    /// The table was not a flat JSON object of strings.
    #[error("invalid string table: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Immutable key -> string table. Cheap to clone.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Localization {
    strings: Arc<HashMap<String, String>>,
}

impl Localization {
    /// Parse a flat JSON object of key -> localized string.
    ///
    /// # Errors
    ///
    /// Returns an error if `raw` is not a JSON object whose values are strings.
    pub fn from_json(raw: &str) -> Result<Self, LocalizationError> {
        let strings: HashMap<String, String> = serde_json::from_str(raw)?;
        Ok(Self { strings: Arc::new(strings) })
    }

    /// The bundled en-US table.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundled table is malformed.
    pub fn en_us() -> Result<Self, LocalizationError> {
        Self::from_json(EN_US)
    }

    /// A table with no entries; every lookup echoes its key.
    pub fn empty() -> Self {
        Self { strings: Arc::new(HashMap::new()) }
    }

    /// Localized string for `key`, or `key` itself when the table lacks it.
    pub fn get(&self, key: &str) -> String {
        match self.strings.get(key) {
            Some(value) => value.clone(),
            None => {
                log::warn!("missing localized string: {key}");
                key.to_owned()
            }
        }
    }

    /// Keys from [`keys::ALL`] that this table does not define.
    pub fn missing_keys(&self) -> Vec<&'static str> {
        keys::ALL.iter().copied().filter(|key| !self.strings.contains_key(*key)).collect()
    }
}

impl Default for Localization {
    fn default() -> Self {
        static BUNDLED: OnceLock<Localization> = OnceLock::new();
        BUNDLED
            .get_or_init(|| match Localization::en_us() {
                Ok(table) => table,
                Err(err) => {
                    log::error!("bundled en-US strings failed to load: {err}");
                    Localization::empty()
                }
            })
            .clone()
    }
}
