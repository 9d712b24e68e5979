//! Store configuration

/// Storage key the document lives under
pub const DEFAULT_STORAGE_KEY: &str = "portfolioData_v1";

/// What `load` does when the stored value is not a valid document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseFailurePolicy {
    /// Overwrite storage with the default document and return it
    #[default]
    ResetToDefault,
    /// Return the default document but leave the stored bytes untouched
    KeepCorrupt,
}

impl ParseFailurePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParseFailurePolicy::ResetToDefault => "reset",
            ParseFailurePolicy::KeepCorrupt => "keep",
        }
    }

    /// Whether storage gets rewritten on recovery
    pub fn overwrites(&self) -> bool {
        matches!(self, ParseFailurePolicy::ResetToDefault)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub storage_key: String,
    pub on_parse_failure: ParseFailurePolicy,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            on_parse_failure: ParseFailurePolicy::ResetToDefault,
        }
    }
}

impl StoreConfig {
    /// Default config under a different key
    pub fn with_key(key: impl Into<String>) -> Self {
        Self {
            storage_key: key.into(),
            ..Self::default()
        }
    }
}
