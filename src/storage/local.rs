//! Browser LocalStorage backend

use wasm_bindgen::JsValue;

use super::KeyValueStore;
use crate::error::{Result, StoreError};

/// `window.localStorage`
pub struct LocalStorage {
    storage: web_sys::Storage,
}

impl LocalStorage {
    /// Grab the page's LocalStorage
    ///
    /// Fails when there is no window, or the browser blocks storage
    /// (private mode, sandboxed iframe, disabled cookies).
    pub fn open() -> Result<Self> {
        let window =
            web_sys::window().ok_or_else(|| StoreError::Unavailable("no window".to_string()))?;
        let storage = window
            .local_storage()
            .map_err(|e| StoreError::Unavailable(describe(&e)))?
            .ok_or_else(|| StoreError::Unavailable("localStorage is null".to_string()))?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for LocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        self.storage
            .get_item(key)
            .map_err(|e| StoreError::Unavailable(describe(&e)))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        // QuotaExceededError also lands here; the browser does not report sizes
        self.storage
            .set_item(key, value)
            .map_err(|e| StoreError::Write(describe(&e)))
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        self.storage
            .remove_item(key)
            .map_err(|e| StoreError::Write(describe(&e)))
    }
}

fn describe(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            js_sys::Reflect::get(value, &JsValue::from_str("message"))
                .ok()
                .and_then(|m| m.as_string())
        })
        .unwrap_or_else(|| format!("{:?}", value))
}
