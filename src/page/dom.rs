//! Browser page backed by `web_sys::Document`

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, HtmlImageElement};

use super::{
    AvatarContainerTarget, AvatarImageTarget, BackgroundTarget, LinkTarget, Page, TextTarget,
    css_url, selectors,
};
use crate::document::Platform;

pub struct DomPage {
    document: Document,
}

impl DomPage {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// Page for the current window, if there is one
    pub fn current() -> Option<Self> {
        web_sys::window()?.document().map(Self::new)
    }

    fn by_id(&self, id: &str) -> Option<DomElement> {
        self.document
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            .map(DomElement)
    }

    fn all(&self, selector: &str) -> Vec<DomElement> {
        let Ok(nodes) = self.document.query_selector_all(selector) else {
            return Vec::new();
        };
        (0..nodes.length())
            .filter_map(|i| nodes.get(i))
            .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
            .map(DomElement)
            .collect()
    }
}

/// Any element the page hands out
struct DomElement(HtmlElement);

impl DomElement {
    fn style(&self, property: &str, value: &str) {
        let _ = self.0.style().set_property(property, value);
    }
}

impl BackgroundTarget for DomElement {
    fn set_background_image(&self, url: &str) {
        self.style("background-image", &css_url(url));
    }
}

impl TextTarget for DomElement {
    fn set_text(&self, text: &str) {
        self.0.set_text_content(Some(text));
    }
}

impl LinkTarget for DomElement {
    fn is_link(&self) -> bool {
        self.0.tag_name().eq_ignore_ascii_case("a")
    }

    fn set_destination(&self, url: Option<&str>) {
        let _ = match url {
            Some(url) => self.0.set_attribute("href", url),
            None => self.0.remove_attribute("href"),
        };
    }

    fn set_opacity(&self, opacity: f32) {
        self.style("opacity", &opacity.to_string());
    }
}

impl AvatarImageTarget for DomElement {
    fn show(&self, src: &str) {
        match self.0.dyn_ref::<HtmlImageElement>() {
            Some(img) => img.set_src(src),
            None => {
                let _ = self.0.set_attribute("src", src);
            }
        }
        self.style("display", "block");
        self.style("border-radius", "50%");
    }

    fn hide(&self) {
        self.style("display", "none");
    }
}

impl AvatarContainerTarget for DomElement {
    fn show_photo(&self, src: &str) {
        self.style("background-image", &css_url(src));
        self.style("background-size", "cover");
        self.style("background-position", "center");
        self.0.set_text_content(Some(""));
    }

    fn show_initials(&self, initials: &str) {
        self.style("background-image", "");
        self.0.set_text_content(Some(initials));
        self.style("display", "flex");
        self.style("justify-content", "center");
        self.style("align-items", "center");
        self.style("font-size", "36px");
        self.style("font-weight", "700");
    }
}

impl Page for DomPage {
    fn background(&self) -> Option<Box<dyn BackgroundTarget>> {
        self.by_id(selectors::BACKGROUND_ID)
            .map(|el| Box::new(el) as Box<dyn BackgroundTarget>)
    }

    fn header_name(&self) -> Option<Box<dyn TextTarget>> {
        self.by_id(selectors::HEADER_NAME_ID)
            .map(|el| Box::new(el) as Box<dyn TextTarget>)
    }

    fn taglines(&self) -> Vec<Box<dyn TextTarget>> {
        self.all(selectors::TAGLINE)
            .into_iter()
            .map(|el| Box::new(el) as Box<dyn TextTarget>)
            .collect()
    }

    fn name_placeholders(&self) -> Vec<Box<dyn TextTarget>> {
        self.all(selectors::NAME)
            .into_iter()
            .map(|el| Box::new(el) as Box<dyn TextTarget>)
            .collect()
    }

    fn social_links(&self, platform: Platform) -> Vec<Box<dyn LinkTarget>> {
        self.all(platform.selector())
            .into_iter()
            .map(|el| Box::new(el) as Box<dyn LinkTarget>)
            .collect()
    }

    fn resume_links(&self) -> Vec<Box<dyn LinkTarget>> {
        self.all(selectors::RESUME_LINK)
            .into_iter()
            .map(|el| Box::new(el) as Box<dyn LinkTarget>)
            .collect()
    }

    fn avatar_image(&self) -> Option<Box<dyn AvatarImageTarget>> {
        self.by_id(selectors::AVATAR_IMAGE_ID)
            .map(|el| Box::new(el) as Box<dyn AvatarImageTarget>)
    }

    fn avatar_container(&self) -> Option<Box<dyn AvatarContainerTarget>> {
        self.by_id(selectors::AVATAR_CONTAINER_ID)
            .map(|el| Box::new(el) as Box<dyn AvatarContainerTarget>)
    }
}
