//! Headless page
//!
//! Records what the renderer projects so it can be inspected without a
//! browser. Used by the native binary and throughout the tests.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::{
    AvatarContainerTarget, AvatarImageTarget, BackgroundTarget, LinkTarget, Page, TextTarget,
    css_url,
};
use crate::document::Platform;

/// Shared handle to one element's recorded state
#[derive(Debug)]
struct Node<T>(Rc<RefCell<T>>);

impl<T> Clone for Node<T> {
    fn clone(&self) -> Self {
        Node(Rc::clone(&self.0))
    }
}

impl<T: Clone> Node<T> {
    fn new(state: T) -> Self {
        Node(Rc::new(RefCell::new(state)))
    }

    fn snapshot(&self) -> T {
        self.0.borrow().clone()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BackgroundState {
    /// CSS background-image value
    pub background_image: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextState {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LinkState {
    /// Whether the element is an anchor
    pub anchor: bool,
    pub href: Option<String>,
    pub opacity: Option<f32>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AvatarImageState {
    pub src: Option<String>,
    pub visible: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AvatarContainerState {
    pub background_image: Option<String>,
    /// Background sized to cover and centered
    pub cover: bool,
    pub text: String,
    /// Centered large bold text
    pub initials_style: bool,
}

/// Everything visible on a [`MemoryPage`], for comparisons
#[derive(Debug, Clone, PartialEq)]
pub struct PageSnapshot {
    pub background: Option<BackgroundState>,
    pub header_name: Option<TextState>,
    pub taglines: Vec<TextState>,
    pub name_placeholders: Vec<TextState>,
    pub social_links: Vec<(Platform, LinkState)>,
    pub resume_links: Vec<LinkState>,
    pub avatar_image: Option<AvatarImageState>,
    pub avatar_container: Option<AvatarContainerState>,
}

impl PageSnapshot {
    /// Link states for one platform, in page order
    pub fn links_for(&self, platform: Platform) -> Vec<&LinkState> {
        self.social_links
            .iter()
            .filter(|(p, _)| *p == platform)
            .map(|(_, link)| link)
            .collect()
    }
}

#[derive(Debug, Default)]
pub struct MemoryPage {
    background: Option<Node<BackgroundState>>,
    header_name: Option<Node<TextState>>,
    taglines: Vec<Node<TextState>>,
    name_placeholders: Vec<Node<TextState>>,
    social_links: HashMap<Platform, Vec<Node<LinkState>>>,
    resume_links: Vec<Node<LinkState>>,
    avatar_image: Option<Node<AvatarImageState>>,
    avatar_container: Option<Node<AvatarContainerState>>,
}

impl MemoryPage {
    /// Page with no targets at all
    pub fn new() -> Self {
        Self::default()
    }

    /// Page with one of every target and a link per platform
    pub fn full() -> Self {
        let mut page = Self::new()
            .with_background()
            .with_header_name()
            .with_tagline()
            .with_name_placeholder()
            .with_resume_link(true)
            .with_avatar_image()
            .with_avatar_container();
        for platform in Platform::ALL {
            page = page.with_social_link(platform, true);
        }
        page
    }

    pub fn with_background(mut self) -> Self {
        self.background = Some(Node::new(BackgroundState::default()));
        self
    }

    pub fn with_header_name(mut self) -> Self {
        self.header_name = Some(Node::new(TextState::default()));
        self
    }

    pub fn with_tagline(mut self) -> Self {
        self.taglines.push(Node::new(TextState::default()));
        self
    }

    pub fn with_name_placeholder(mut self) -> Self {
        self.name_placeholders.push(Node::new(TextState::default()));
        self
    }

    /// Add an element matching `platform`'s selector; `anchor` is false for
    /// e.g. a `<span class="link-github">`
    pub fn with_social_link(mut self, platform: Platform, anchor: bool) -> Self {
        self.social_links
            .entry(platform)
            .or_default()
            .push(Node::new(LinkState::untouched(anchor)));
        self
    }

    pub fn with_resume_link(mut self, anchor: bool) -> Self {
        self.resume_links
            .push(Node::new(LinkState::untouched(anchor)));
        self
    }

    pub fn with_avatar_image(mut self) -> Self {
        self.avatar_image = Some(Node::new(AvatarImageState {
            src: None,
            visible: true,
        }));
        self
    }

    pub fn with_avatar_container(mut self) -> Self {
        self.avatar_container = Some(Node::new(AvatarContainerState::default()));
        self
    }

    pub fn snapshot(&self) -> PageSnapshot {
        let mut social_links = Vec::new();
        for platform in Platform::ALL {
            if let Some(links) = self.social_links.get(&platform) {
                social_links.extend(links.iter().map(|l| (platform, l.snapshot())));
            }
        }
        PageSnapshot {
            background: self.background.as_ref().map(Node::snapshot),
            header_name: self.header_name.as_ref().map(Node::snapshot),
            taglines: self.taglines.iter().map(Node::snapshot).collect(),
            name_placeholders: self.name_placeholders.iter().map(Node::snapshot).collect(),
            social_links,
            resume_links: self.resume_links.iter().map(Node::snapshot).collect(),
            avatar_image: self.avatar_image.as_ref().map(Node::snapshot),
            avatar_container: self.avatar_container.as_ref().map(Node::snapshot),
        }
    }
}

impl LinkState {
    fn untouched(anchor: bool) -> Self {
        Self {
            anchor,
            href: None,
            opacity: None,
        }
    }
}

impl BackgroundTarget for Node<BackgroundState> {
    fn set_background_image(&self, url: &str) {
        self.0.borrow_mut().background_image = Some(css_url(url));
    }
}

impl TextTarget for Node<TextState> {
    fn set_text(&self, text: &str) {
        self.0.borrow_mut().text = text.to_string();
    }
}

impl LinkTarget for Node<LinkState> {
    fn is_link(&self) -> bool {
        self.0.borrow().anchor
    }

    fn set_destination(&self, url: Option<&str>) {
        self.0.borrow_mut().href = url.map(str::to_string);
    }

    fn set_opacity(&self, opacity: f32) {
        self.0.borrow_mut().opacity = Some(opacity);
    }
}

impl AvatarImageTarget for Node<AvatarImageState> {
    fn show(&self, src: &str) {
        let mut state = self.0.borrow_mut();
        state.src = Some(src.to_string());
        state.visible = true;
    }

    fn hide(&self) {
        self.0.borrow_mut().visible = false;
    }
}

impl AvatarContainerTarget for Node<AvatarContainerState> {
    fn show_photo(&self, src: &str) {
        let mut state = self.0.borrow_mut();
        state.background_image = Some(css_url(src));
        state.cover = true;
        state.text.clear();
    }

    fn show_initials(&self, initials: &str) {
        let mut state = self.0.borrow_mut();
        state.background_image = None;
        state.text = initials.to_string();
        state.initials_style = true;
    }
}

fn boxed<T, D: ?Sized>(nodes: &[Node<T>], upcast: fn(Node<T>) -> Box<D>) -> Vec<Box<D>> {
    nodes.iter().cloned().map(upcast).collect()
}

impl Page for MemoryPage {
    fn background(&self) -> Option<Box<dyn BackgroundTarget>> {
        self.background
            .clone()
            .map(|n| Box::new(n) as Box<dyn BackgroundTarget>)
    }

    fn header_name(&self) -> Option<Box<dyn TextTarget>> {
        self.header_name
            .clone()
            .map(|n| Box::new(n) as Box<dyn TextTarget>)
    }

    fn taglines(&self) -> Vec<Box<dyn TextTarget>> {
        boxed(&self.taglines, |n| Box::new(n) as Box<dyn TextTarget>)
    }

    fn name_placeholders(&self) -> Vec<Box<dyn TextTarget>> {
        boxed(&self.name_placeholders, |n| Box::new(n) as Box<dyn TextTarget>)
    }

    fn social_links(&self, platform: Platform) -> Vec<Box<dyn LinkTarget>> {
        self.social_links
            .get(&platform)
            .map(|links| boxed(links, |n| Box::new(n) as Box<dyn LinkTarget>))
            .unwrap_or_default()
    }

    fn resume_links(&self) -> Vec<Box<dyn LinkTarget>> {
        boxed(&self.resume_links, |n| Box::new(n) as Box<dyn LinkTarget>)
    }

    fn avatar_image(&self) -> Option<Box<dyn AvatarImageTarget>> {
        self.avatar_image
            .clone()
            .map(|n| Box::new(n) as Box<dyn AvatarImageTarget>)
    }

    fn avatar_container(&self) -> Option<Box<dyn AvatarContainerTarget>> {
        self.avatar_container
            .clone()
            .map(|n| Box::new(n) as Box<dyn AvatarContainerTarget>)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_page_has_no_targets() {
        let page = MemoryPage::new();
        assert!(page.background().is_none());
        assert!(page.taglines().is_empty());
        assert!(page.social_links(Platform::GitHub).is_empty());
        assert!(page.avatar_container().is_none());
    }

    #[test]
    fn test_targets_share_state_with_page() {
        let page = MemoryPage::new()
            .with_tagline()
            .with_tagline()
            .with_social_link(Platform::GitHub, false);

        for target in page.taglines() {
            target.set_text("hello");
        }
        let links = page.social_links(Platform::GitHub);
        assert!(!links[0].is_link());
        links[0].set_opacity(0.5);

        let snap = page.snapshot();
        assert_eq!(snap.taglines.len(), 2);
        assert!(snap.taglines.iter().all(|t| t.text == "hello"));
        assert_eq!(snap.links_for(Platform::GitHub)[0].opacity, Some(0.5));
    }

    #[test]
    fn test_avatar_container_modes() {
        let page = MemoryPage::new().with_avatar_container();
        let avatar = page.avatar_container().unwrap();

        avatar.show_initials("AL");
        let state = page.snapshot().avatar_container.unwrap();
        assert_eq!(state.text, "AL");
        assert_eq!(state.background_image, None);

        avatar.show_photo("data:x");
        let state = page.snapshot().avatar_container.unwrap();
        assert_eq!(state.text, "");
        assert_eq!(state.background_image.as_deref(), Some("url(\"data:x\")"));
        assert!(state.cover);
    }
}
