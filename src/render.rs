//! Projection of the document onto page targets
//!
//! Each projection is independent: it writes every target it finds and skips
//! the ones the page lacks. Running a projection twice on the same document
//! leaves the page exactly as after the first run.

use crate::document::{Platform, PortfolioDocument};
use crate::page::{LinkTarget, Page};
use crate::storage::KeyValueStore;
use crate::store::DocumentStore;

/// Opacity of a link with a destination
pub const PRESENT_OPACITY: f32 = 1.0;
/// Opacity of a link with nothing to point at
pub const MUTED_OPACITY: f32 = 0.6;

pub fn project_background(doc: &PortfolioDocument, page: &impl Page) {
    if let Some(bg) = page.background() {
        bg.set_background_image(doc.display_background());
    }
}

pub fn project_header_name(doc: &PortfolioDocument, page: &impl Page) {
    if let Some(header) = page.header_name() {
        header.set_text(doc.display_name());
    }
}

pub fn project_taglines(doc: &PortfolioDocument, page: &impl Page) {
    for el in page.taglines() {
        el.set_text(doc.display_tagline());
    }
}

pub fn project_name_placeholders(doc: &PortfolioDocument, page: &impl Page) {
    for el in page.name_placeholders() {
        el.set_text(doc.display_name());
    }
}

pub fn project_socials(doc: &PortfolioDocument, page: &impl Page) {
    for platform in Platform::ALL {
        let url = doc.socials.url(platform);
        for link in page.social_links(platform) {
            apply_link(&*link, url);
        }
    }
}

pub fn project_resume(doc: &PortfolioDocument, page: &impl Page) {
    for link in page.resume_links() {
        apply_link(&*link, &doc.resume);
    }
}

pub fn project_avatar(doc: &PortfolioDocument, page: &impl Page) {
    let photo = doc.photo();

    if let Some(img) = page.avatar_image() {
        match photo {
            Some(src) => img.show(src),
            None => img.hide(),
        }
    }

    if let Some(container) = page.avatar_container() {
        match photo {
            Some(src) => container.show_photo(src),
            None => container.show_initials(&doc.initials()),
        }
    }
}

/// Present/muted rule shared by social and resume links
fn apply_link(link: &dyn LinkTarget, url: &str) {
    if !link.is_link() {
        return;
    }
    if url.is_empty() {
        link.set_destination(None);
        link.set_opacity(MUTED_OPACITY);
    } else {
        link.set_destination(Some(url));
        link.set_opacity(PRESENT_OPACITY);
    }
}

/// Run every projection for `doc`
pub fn project_all(doc: &PortfolioDocument, page: &impl Page) {
    project_background(doc, page);
    project_header_name(doc, page);
    project_taglines(doc, page);
    project_name_placeholders(doc, page);
    project_socials(doc, page);
    project_resume(doc, page);
    project_avatar(doc, page);
}

/// Reads the latest stored document on every call and projects it
pub struct Renderer<'a, S: KeyValueStore> {
    store: &'a DocumentStore<S>,
}

impl<'a, S: KeyValueStore> Renderer<'a, S> {
    pub fn new(store: &'a DocumentStore<S>) -> Self {
        Self { store }
    }

    /// Full page refresh
    pub fn apply_common(&self, page: &impl Page) {
        let doc = self.store.load();
        log::debug!("Applying document for {}", doc.display_name());
        project_all(&doc, page);
    }

    /// Avatar-only refresh, e.g. right after a new photo was saved
    pub fn render_profile_photo(&self, page: &impl Page) {
        let doc = self.store.load();
        project_avatar(&doc, page);
    }
}
