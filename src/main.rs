//! Portfolio Sync entry point
//!
//! The browser build starts from `web::start` in the library. Natively this
//! renders the default document onto a headless page and prints the result.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use portfolio_sync::{DocumentStore, MemoryPage, MemoryStorage, Renderer};

    env_logger::init();
    log::info!("Portfolio Sync (native) starting...");

    let storage = MemoryStorage::new();
    let store = DocumentStore::new(&storage);
    let (doc, outcome) = store.load_with_outcome();
    log::info!("Loaded document ({:?})", outcome);

    let page = MemoryPage::full();
    Renderer::new(&store).apply_common(&page);

    match serde_json::to_string_pretty(&doc) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Could not serialize document: {}", e),
    }
    println!("\n{:#?}", page.snapshot());
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is web::start, this is just to satisfy the compiler
}
