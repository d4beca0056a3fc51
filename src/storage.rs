//! Persistence boundary: a string key-value store plus the JSON codec for
//! the review collection.
use crate::error::AdapterError;
use crate::models::review::Review;
use gloo_utils::errors::JsError;
use leptos::logging::log;
use std::cell::RefCell;
use std::collections::HashMap;
use wasm_bindgen::JsValue;

/// Synchronous string storage, the shape of `window.localStorage`.
pub trait KeyValueStorage {
    fn load(&self, key: &str) -> Result<Option<String>, AdapterError>;
    fn save(&self, key: &str, value: &str) -> Result<(), AdapterError>;
}

impl<T: KeyValueStorage + ?Sized> KeyValueStorage for &T {
    fn load(&self, key: &str) -> Result<Option<String>, AdapterError> {
        (**self).load(key)
    }

    fn save(&self, key: &str, value: &str) -> Result<(), AdapterError> {
        (**self).save(key, value)
    }
}

impl<T: KeyValueStorage + ?Sized> KeyValueStorage for Box<T> {
    fn load(&self, key: &str) -> Result<Option<String>, AdapterError> {
        (**self).load(key)
    }

    fn save(&self, key: &str, value: &str) -> Result<(), AdapterError> {
        (**self).save(key, value)
    }
}

pub fn encode_reviews(reviews: &[Review]) -> Result<String, AdapterError> {
    Ok(serde_json::to_string(reviews)?)
}

pub fn decode_reviews(raw: &str) -> Result<Vec<Review>, AdapterError> {
    Ok(serde_json::from_str(raw)?)
}

/// The browser's local storage.
#[derive(Debug, Clone)]
pub struct BrowserStorage {
    inner: web_sys::Storage,
}

impl BrowserStorage {
    pub fn new() -> Result<Self, AdapterError> {
        let window = web_sys::window().ok_or(AdapterError::Unavailable("window"))?;
        let inner = window
            .local_storage()
            .map_err(|e| AdapterError::Storage(js_error_message(e)))?
            .ok_or(AdapterError::Unavailable("localStorage"))?;
        log!("[STORAGE] Using browser local storage");
        Ok(Self { inner })
    }
}

impl KeyValueStorage for BrowserStorage {
    fn load(&self, key: &str) -> Result<Option<String>, AdapterError> {
        self.inner
            .get_item(key)
            .map_err(|e| AdapterError::Storage(js_error_message(e)))
    }

    fn save(&self, key: &str, value: &str) -> Result<(), AdapterError> {
        self.inner
            .set_item(key, value)
            .map_err(|e| AdapterError::Storage(js_error_message(e)))
    }
}

fn js_error_message(value: JsValue) -> String {
    match JsError::try_from(value) {
        Ok(err) => err.to_string(),
        Err(not_error) => not_error.to_string(),
    }
}

/// In-memory storage for tests and hosts without a browser.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-seeded with one entry.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage
            .entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        storage
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn load(&self, key: &str) -> Result<Option<String>, AdapterError> {
        Ok(self.get(key))
    }

    fn save(&self, key: &str, value: &str) -> Result<(), AdapterError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
