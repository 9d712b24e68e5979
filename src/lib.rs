//! Portfolio Sync - the shared data layer of a static portfolio site
//!
//! Core modules:
//! - `document`: The persisted portfolio document and its built-in default
//! - `store`: Load/default/repair cycle over key-value storage
//! - `storage`: LocalStorage on web, in-memory elsewhere
//! - `page`: Render target interfaces (DOM on web, headless elsewhere)
//! - `render`: One-way projection of the document onto a page

pub mod config;
pub mod document;
pub mod error;
pub mod ids;
pub mod page;
pub mod render;
pub mod storage;
pub mod store;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use config::{ParseFailurePolicy, StoreConfig};
pub use document::{BlogPost, Experience, Platform, PortfolioDocument, Project, Socials};
pub use error::{Result, StoreError};
pub use page::{MemoryPage, Page};
pub use render::Renderer;
pub use storage::{KeyValueStore, MemoryStorage};
pub use store::{DocumentStore, LoadOutcome};
