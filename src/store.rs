//! Document store: load, default, repair, save
//!
//! The stored document is always replaced whole. There is no field-level
//! patching, so any value that fails to parse collapses to the built-in
//! default instead of being partially repaired.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use std::fmt::Display;

use crate::config::{ParseFailurePolicy, StoreConfig};
use crate::document::PortfolioDocument;
use crate::error::Result;
use crate::ids;
use crate::storage::KeyValueStore;

/// How a `load` obtained its document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Parsed from storage
    Stored,
    /// Nothing stored yet; the default was written
    Initialized,
    /// Stored value was corrupt; the default was returned
    Recovered,
    /// Storage could not be read or the default could not be written;
    /// the default was returned, nothing stored
    Fallback,
}

pub struct DocumentStore<S: KeyValueStore> {
    storage: S,
    config: StoreConfig,
    /// Id source for new list items
    rng: Pcg32,
    /// Built once so every reset writes the same ids
    default_doc: PortfolioDocument,
}

impl<S: KeyValueStore> DocumentStore<S> {
    /// Store with the default config and an entropy-seeded id source
    pub fn new(storage: S) -> Self {
        Self::with_config(storage, StoreConfig::default(), rand::random())
    }

    /// Store with a fixed seed, for reproducible ids
    pub fn with_seed(storage: S, seed: u64) -> Self {
        Self::with_config(storage, StoreConfig::default(), seed)
    }

    pub fn with_config(storage: S, config: StoreConfig, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let default_doc = PortfolioDocument::default_with(&mut rng);
        Self {
            storage,
            config,
            rng,
            default_doc,
        }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// The document written on first access and on recovery
    pub fn default_document(&self) -> &PortfolioDocument {
        &self.default_doc
    }

    /// Fresh id for a new project, experience entry or blog post
    pub fn new_id(&mut self) -> String {
        ids::new_id(&mut self.rng)
    }

    /// Current document; never fails
    pub fn load(&self) -> PortfolioDocument {
        self.load_with_outcome().0
    }

    pub fn load_with_outcome(&self) -> (PortfolioDocument, LoadOutcome) {
        let key = &self.config.storage_key;
        let raw = match self.storage.get_item(key) {
            Ok(raw) => raw,
            Err(e) => {
                log::warn!("Could not read {}, using default document: {}", key, e);
                return (self.default_doc.clone(), LoadOutcome::Fallback);
            }
        };

        // An empty value counts as nothing stored
        let Some(raw) = raw.filter(|r| !r.is_empty()) else {
            if let Err(e) = self.save(&self.default_doc) {
                log::warn!("Could not write default document to {}: {}", key, e);
                return (self.default_doc.clone(), LoadOutcome::Fallback);
            }
            log::info!("Initialized {} with default document", key);
            return (self.default_doc.clone(), LoadOutcome::Initialized);
        };

        match serde_json::from_str::<PortfolioDocument>(&raw) {
            Ok(doc) => (doc, LoadOutcome::Stored),
            Err(e) => (self.recover_from_parse_failure(&e), LoadOutcome::Recovered),
        }
    }

    /// Handle a stored value that is not a valid document
    fn recover_from_parse_failure(&self, err: &serde_json::Error) -> PortfolioDocument {
        let key = &self.config.storage_key;
        let policy = self.config.on_parse_failure;
        log::error!("{}", corruption_notice(key, policy, err));
        if policy.overwrites() {
            if let Err(e) = self.save(&self.default_doc) {
                log::warn!("Could not overwrite corrupt {}: {}", key, e);
            }
        }
        self.default_doc.clone()
    }

    /// Replace the stored document
    pub fn save(&self, doc: &PortfolioDocument) -> Result<()> {
        let json = serde_json::to_string(doc)?;
        self.storage.set_item(&self.config.storage_key, &json)?;
        log::debug!("Document saved ({} bytes)", json.len());
        Ok(())
    }

    /// Overwrite storage with the default document and return it
    pub fn reset(&self) -> Result<PortfolioDocument> {
        self.save(&self.default_doc)?;
        log::info!("Document reset to default");
        Ok(self.default_doc.clone())
    }
}

/// Diagnostic emitted when a stored document fails to parse
fn corruption_notice(key: &str, policy: ParseFailurePolicy, err: &impl Display) -> String {
    format!("Corrupt document in {} (policy: {}): {}", key, policy.as_str(), err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Platform, Project};
    use crate::error::StoreError;
    use crate::storage::{MemoryStorage, open_or_unavailable};
    use proptest::prelude::*;
    use std::collections::HashSet;

    const KEY: &str = "portfolioData_v1";

    fn stored(storage: &MemoryStorage) -> Option<PortfolioDocument> {
        storage
            .get_item(KEY)
            .unwrap()
            .map(|raw| serde_json::from_str(&raw).unwrap())
    }

    #[test]
    fn test_load_empty_initializes_default() {
        let storage = MemoryStorage::new();
        let store = DocumentStore::with_seed(&storage, 1);

        let (doc, outcome) = store.load_with_outcome();
        assert_eq!(outcome, LoadOutcome::Initialized);
        assert_eq!(&doc, store.default_document());
        assert_eq!(stored(&storage).as_ref(), Some(store.default_document()));
    }

    #[test]
    fn test_load_empty_string_initializes() {
        let storage = MemoryStorage::new();
        storage.set_item(KEY, "").unwrap();
        let store = DocumentStore::with_seed(&storage, 1);

        assert_eq!(store.load_with_outcome().1, LoadOutcome::Initialized);
        assert_eq!(stored(&storage).as_ref(), Some(store.default_document()));
    }

    #[test]
    fn test_load_corrupt_resets() {
        let storage = MemoryStorage::new();
        storage.set_item(KEY, "{\"name\": \"Ada\", ").unwrap();
        let store = DocumentStore::with_seed(&storage, 1);

        let (doc, outcome) = store.load_with_outcome();
        assert_eq!(outcome, LoadOutcome::Recovered);
        assert_eq!(&doc, store.default_document());
        assert_eq!(stored(&storage).as_ref(), Some(store.default_document()));
    }

    #[test]
    fn test_load_non_conforming_resets() {
        let storage = MemoryStorage::new();
        // Valid JSON, wrong shape
        storage.set_item(KEY, "{\"name\": \"Ada\"}").unwrap();
        let store = DocumentStore::with_seed(&storage, 1);

        assert_eq!(&store.load(), store.default_document());
        assert_eq!(stored(&storage).as_ref(), Some(store.default_document()));

        storage.set_item(KEY, "null").unwrap();
        assert_eq!(store.load_with_outcome().1, LoadOutcome::Recovered);
    }

    #[test]
    fn test_keep_corrupt_policy() {
        let storage = MemoryStorage::new();
        storage.set_item(KEY, "not json").unwrap();
        let config = StoreConfig {
            on_parse_failure: ParseFailurePolicy::KeepCorrupt,
            ..StoreConfig::default()
        };
        let store = DocumentStore::with_config(&storage, config, 1);

        let (doc, outcome) = store.load_with_outcome();
        assert_eq!(outcome, LoadOutcome::Recovered);
        assert_eq!(&doc, store.default_document());
        assert_eq!(storage.get_item(KEY).unwrap().as_deref(), Some("not json"));
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let storage = MemoryStorage::new();
        let mut store = DocumentStore::with_seed(&storage, 3);

        let mut doc = store.load();
        doc.name = "Ada Lovelace".into();
        doc.socials.set_url(Platform::GitHub, "https://github.com/ada");
        doc.skills.push("Rust".into());
        doc.projects.push(Project {
            id: store.new_id(),
            title: "Analytical Engine".into(),
            description: "Notes".into(),
        });
        store.save(&doc).unwrap();

        let (loaded, outcome) = store.load_with_outcome();
        assert_eq!(outcome, LoadOutcome::Stored);
        assert_eq!(loaded, doc);
    }

    #[test]
    fn test_save_replaces_whole_document() {
        let storage = MemoryStorage::new();
        let store = DocumentStore::with_seed(&storage, 3);

        let mut doc = store.load();
        doc.skills.clear();
        doc.projects.clear();
        store.save(&doc).unwrap();
        let loaded = store.load();
        assert!(loaded.skills.is_empty());
        assert!(loaded.projects.is_empty());
    }

    #[test]
    fn test_ids_stable_across_loads() {
        let storage = MemoryStorage::new();
        let store = DocumentStore::with_seed(&storage, 9);

        let first = store.load();
        let second = store.load();
        let third = DocumentStore::with_seed(&storage, 1234).load();
        assert_eq!(first.item_ids(), second.item_ids());
        assert_eq!(first.item_ids(), third.item_ids());
    }

    #[test]
    fn test_default_is_same_across_resets() {
        let storage = MemoryStorage::new();
        let store = DocumentStore::with_seed(&storage, 5);

        let initial = store.load();
        storage.set_item(KEY, "garbage").unwrap();
        let recovered = store.load();
        assert_eq!(initial, recovered);
        assert_eq!(store.reset().unwrap(), initial);
    }

    #[test]
    fn test_new_ids_unique() {
        let mut store = DocumentStore::with_seed(MemoryStorage::new(), 11);
        let mut seen: HashSet<String> = store
            .default_document()
            .item_ids()
            .into_iter()
            .map(String::from)
            .collect();
        for _ in 0..100 {
            assert!(seen.insert(store.new_id()));
        }
    }

    #[test]
    fn test_custom_key() {
        let storage = MemoryStorage::new();
        let store = DocumentStore::with_config(&storage, StoreConfig::with_key("other"), 1);
        store.load();
        assert!(storage.get_item("other").unwrap().is_some());
        assert!(storage.get_item(KEY).unwrap().is_none());
    }

    #[test]
    fn test_save_propagates_quota_error() {
        let storage = MemoryStorage::with_quota(64);
        let store = DocumentStore::with_seed(&storage, 1);

        let err = store.save(store.default_document()).unwrap_err();
        assert!(matches!(err, StoreError::QuotaExceeded { limit: 64, .. }));
        assert!(store.reset().is_err());
    }

    #[test]
    fn test_load_survives_write_failure() {
        let storage = MemoryStorage::with_quota(64);
        let store = DocumentStore::with_seed(&storage, 1);

        let (doc, outcome) = store.load_with_outcome();
        assert_eq!(outcome, LoadOutcome::Fallback);
        assert_eq!(&doc, store.default_document());
        assert_eq!(storage.get_item(KEY).unwrap(), None);

        // Still nothing stored, still the same default
        assert_eq!(store.load_with_outcome(), (doc, LoadOutcome::Fallback));
    }

    #[test]
    fn test_load_survives_unavailable_storage() {
        let storage = MemoryStorage::new();
        storage.set_unavailable(true);
        let store = DocumentStore::with_seed(&storage, 1);

        let (doc, outcome) = store.load_with_outcome();
        assert_eq!(outcome, LoadOutcome::Fallback);
        assert_eq!(&doc, store.default_document());
        assert!(matches!(
            store.save(store.default_document()),
            Err(StoreError::Unavailable(_))
        ));
    }

    #[test]
    fn test_refused_storage_fails_saves_keeps_default() {
        let opened: Result<MemoryStorage> = Err(StoreError::Unavailable("blocked".to_string()));
        let store = DocumentStore::with_seed(open_or_unavailable(opened), 4);

        let (doc, outcome) = store.load_with_outcome();
        assert_eq!(outcome, LoadOutcome::Fallback);
        assert_eq!(store.load(), doc);
        assert!(matches!(store.save(&doc), Err(StoreError::Unavailable(_))));
    }

    #[test]
    fn test_corruption_notice_names_policy() {
        let err = serde_json::from_str::<PortfolioDocument>("{").unwrap_err();

        let keep = corruption_notice(KEY, ParseFailurePolicy::KeepCorrupt, &err);
        assert!(keep.starts_with("Corrupt document in portfolioData_v1 (policy: keep): "));
        assert!(!keep.contains("resetting"));

        let reset = corruption_notice(KEY, ParseFailurePolicy::ResetToDefault, &err);
        assert!(reset.contains("(policy: reset)"));
    }

    fn text() -> impl Strategy<Value = String> {
        proptest::string::string_regex("[ -~é•]{0,24}").unwrap()
    }

    proptest! {
        #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]

        #[test]
        fn prop_save_load_fidelity(
            name in text(),
            tagline in text(),
            github in text(),
            photo in text(),
            skills in proptest::collection::vec(text(), 0..5),
            titles in proptest::collection::vec(text(), 0..4),
        ) {
            let storage = MemoryStorage::new();
            let mut store = DocumentStore::with_seed(&storage, 77);

            let mut doc = store.load();
            doc.name = name;
            doc.tagline = tagline;
            doc.socials.github = github;
            doc.profile_photo = photo;
            doc.skills = skills;
            for title in titles {
                let id = store.new_id();
                doc.projects.push(Project { id, title, description: String::new() });
            }

            store.save(&doc).unwrap();
            prop_assert_eq!(store.load(), doc);
        }
    }
}
