//! Key-value storage backends
//!
//! The document store only needs whole-value get/set/remove on string keys,
//! which is exactly what browser LocalStorage offers. `MemoryStorage` stands
//! in for it on native builds and in tests.

#[cfg(target_arch = "wasm32")]
pub mod local;

#[cfg(target_arch = "wasm32")]
pub use local::LocalStorage;

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use crate::error::{Result, StoreError};

/// Whole-value string storage
///
/// Methods take `&self`: browser storage is a shared handle, and all access
/// happens on the single UI thread.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>>;
    fn set_item(&self, key: &str, value: &str) -> Result<()>;
    fn remove_item(&self, key: &str) -> Result<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        (**self).remove_item(key)
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        (**self).remove_item(key)
    }
}

/// In-memory storage with optional quota and outage simulation
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
    /// Maximum total bytes of keys plus values
    quota: Option<usize>,
    unavailable: Cell<bool>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage that rejects writes pushing the total past `bytes`
    pub fn with_quota(bytes: usize) -> Self {
        Self {
            quota: Some(bytes),
            ..Self::default()
        }
    }

    /// Make every call fail as if storage were disabled
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.set(unavailable);
    }

    fn check_available(&self) -> Result<()> {
        if self.unavailable.get() {
            Err(StoreError::Unavailable("storage disabled".to_string()))
        } else {
            Ok(())
        }
    }

    fn used_bytes_without(&self, key: &str) -> usize {
        self.items
            .borrow()
            .iter()
            .filter(|(k, _)| k.as_str() != key)
            .map(|(k, v)| k.len() + v.len())
            .sum()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        self.check_available()?;
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.check_available()?;
        if let Some(limit) = self.quota {
            let needed = self.used_bytes_without(key) + key.len() + value.len();
            if needed > limit {
                return Err(StoreError::QuotaExceeded { needed, limit });
            }
        }
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        self.check_available()?;
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

/// Stand-in for storage the browser refused
///
/// Reads find nothing, so the page still renders the defaults. Writes fail
/// with the original reason instead of landing somewhere that is dropped.
#[derive(Debug)]
pub struct UnavailableStorage {
    reason: String,
}

impl UnavailableStorage {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl KeyValueStore for UnavailableStorage {
    fn get_item(&self, _key: &str) -> Result<Option<String>> {
        Ok(None)
    }

    fn set_item(&self, _key: &str, _value: &str) -> Result<()> {
        Err(StoreError::Unavailable(self.reason.clone()))
    }

    fn remove_item(&self, _key: &str) -> Result<()> {
        Err(StoreError::Unavailable(self.reason.clone()))
    }
}

/// Use the opened backend, or [`UnavailableStorage`] when opening failed
pub fn open_or_unavailable<S: KeyValueStore + 'static>(
    opened: Result<S>,
) -> Box<dyn KeyValueStore> {
    match opened {
        Ok(storage) => Box::new(storage),
        Err(e) => {
            log::warn!("{}; changes will not persist", e);
            Box::new(UnavailableStorage::new(e.to_string()))
        }
    }
}
