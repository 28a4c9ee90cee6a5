//! Browser persistence for journeys.
//!
//! Implements the `obfs-journey` store seam on top of `localStorage`. The whole
//! journey list lives under a single key.

use crate::dom;
use obfs_journey::{
    Journey, JourneyService, JourneyStore, WizardConfig, decode_journeys, encode_journeys,
};
use wasm_bindgen::JsValue;

/// Journey store backed by `window.localStorage`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalJourneyStore {
    key: String,
}

#[derive(Debug, thiserror::Error)]
pub enum WebStorageError {
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl WebStorageError {
    fn from_js(value: &JsValue) -> Self {
        let message = dom::js_error_message(value);
        dom::console_error(&format!("journey storage: {message}"));
        Self::Storage(message)
    }
}

impl LocalJourneyStore {
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Drop every stored journey.
    ///
    /// # Errors
    ///
    /// Returns an error if `localStorage` is unavailable.
    pub fn clear(&self) -> Result<(), WebStorageError> {
        dom::local_storage()
            .and_then(|storage| storage.remove_item(&self.key))
            .map_err(|err| WebStorageError::from_js(&err))
    }
}

impl JourneyStore for LocalJourneyStore {
    type Error = WebStorageError;

    fn list(&self) -> Result<Vec<Journey>, Self::Error> {
        let raw = dom::local_storage()
            .and_then(|storage| storage.get_item(&self.key))
            .map_err(|err| WebStorageError::from_js(&err))?;
        Ok(decode_journeys(raw.as_deref()))
    }

    fn write_all(&self, journeys: &[Journey]) -> Result<(), Self::Error> {
        let encoded = encode_journeys(journeys)?;
        dom::local_storage()
            .and_then(|storage| storage.set_item(&self.key, &encoded))
            .map_err(|err| WebStorageError::from_js(&err))
    }
}

pub type WebJourneyService = JourneyService<LocalJourneyStore>;

/// Create the browser journey service from the compiled-in wizard config.
#[must_use]
pub fn create_web_journey_service() -> WebJourneyService {
    let config = WizardConfig::load_from_static();
    let store = LocalJourneyStore::new(config.storage_key.clone());
    JourneyService::new(store, config)
}
