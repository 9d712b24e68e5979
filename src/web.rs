//! Browser entry point
//!
//! Renders the stored document once the DOM is ready and exports a few
//! functions so the site's other scripts (the editor page) can refresh the
//! page or read and write the document through the same store.

use std::cell::RefCell;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::document::PortfolioDocument;
use crate::page::DomPage;
use crate::render::Renderer;
use crate::storage::{KeyValueStore, LocalStorage, open_or_unavailable};
use crate::store::DocumentStore;

type PageStore = DocumentStore<Box<dyn KeyValueStore>>;

// One store per page, so the backend choice and the default ids hold for
// every exported call
thread_local! {
    static PAGE_STORE: RefCell<Option<PageStore>> = const { RefCell::new(None) };
}

fn with_store<R>(f: impl FnOnce(&mut PageStore) -> R) -> R {
    PAGE_STORE.with(|cell| {
        let mut slot = cell.borrow_mut();
        let store =
            slot.get_or_insert_with(|| DocumentStore::new(open_or_unavailable(LocalStorage::open())));
        f(store)
    })
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    if document.ready_state() == "loading" {
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            apply_common_data();
        });
        let _ = document
            .add_event_listener_with_callback("DOMContentLoaded", closure.as_ref().unchecked_ref());
        closure.forget();
    } else {
        apply_common_data();
    }
}

/// Project the stored document onto every target on the page
#[wasm_bindgen(js_name = applyCommonData)]
pub fn apply_common_data() {
    let Some(page) = DomPage::current() else {
        return;
    };
    with_store(|store| Renderer::new(store).apply_common(&page));
    log::info!("Portfolio data applied");
}

/// Refresh only the avatar targets
#[wasm_bindgen(js_name = renderProfilePhoto)]
pub fn render_profile_photo() {
    if let Some(page) = DomPage::current() {
        with_store(|store| Renderer::new(store).render_profile_photo(&page));
    }
}

/// Current document as JSON
#[wasm_bindgen(js_name = loadDocument)]
pub fn load_document() -> Result<String, JsError> {
    let doc = with_store(|store| store.load());
    serde_json::to_string(&doc).map_err(|e| JsError::new(&e.to_string()))
}

/// Replace the stored document; rejects anything that is not a full document
/// and fails when storage is unavailable or full
#[wasm_bindgen(js_name = saveDocument)]
pub fn save_document(json: &str) -> Result<(), JsError> {
    let doc: PortfolioDocument =
        serde_json::from_str(json).map_err(|e| JsError::new(&e.to_string()))?;
    with_store(|store| store.save(&doc)).map_err(|e| JsError::new(&e.to_string()))?;
    log::info!("Portfolio data saved");
    Ok(())
}

/// Id for a new project, experience entry or blog post
#[wasm_bindgen(js_name = newId)]
pub fn new_id() -> String {
    with_store(|store| store.new_id())
}
