//! Page capability interfaces
//!
//! The renderer never looks anything up in the DOM itself. A `Page` hands out
//! whichever targets the current page actually has; a missing target is just
//! `None` or an empty list.

pub mod memory;

#[cfg(target_arch = "wasm32")]
pub mod dom;

pub use memory::MemoryPage;

#[cfg(target_arch = "wasm32")]
pub use dom::DomPage;

use crate::document::Platform;

/// Page-wide background surface
pub trait BackgroundTarget {
    fn set_background_image(&self, url: &str);
}

/// Element whose whole text content is replaced
pub trait TextTarget {
    fn set_text(&self, text: &str);
}

/// Element matched by a link selector
pub trait LinkTarget {
    /// Only real anchors are updated; other matches are left alone
    fn is_link(&self) -> bool;
    /// Set or remove the link destination
    fn set_destination(&self, url: Option<&str>);
    fn set_opacity(&self, opacity: f32);
}

/// `<img>` style avatar
pub trait AvatarImageTarget {
    /// Show the image with `src`, clipped round
    fn show(&self, src: &str);
    fn hide(&self);
}

/// Block style avatar, painted with a background image or initials
pub trait AvatarContainerTarget {
    /// Cover/center background image, no text
    fn show_photo(&self, src: &str);
    /// No background image, large bold centered text
    fn show_initials(&self, initials: &str);
}

/// Optional render targets present on the current page
pub trait Page {
    fn background(&self) -> Option<Box<dyn BackgroundTarget>>;
    fn header_name(&self) -> Option<Box<dyn TextTarget>>;
    fn taglines(&self) -> Vec<Box<dyn TextTarget>>;
    fn name_placeholders(&self) -> Vec<Box<dyn TextTarget>>;
    fn social_links(&self, platform: Platform) -> Vec<Box<dyn LinkTarget>>;
    fn resume_links(&self) -> Vec<Box<dyn LinkTarget>>;
    fn avatar_image(&self) -> Option<Box<dyn AvatarImageTarget>>;
    fn avatar_container(&self) -> Option<Box<dyn AvatarContainerTarget>>;
}

/// Selectors and ids the browser page exposes its targets under
pub mod selectors {
    pub const BACKGROUND_ID: &str = "bg-image";
    pub const HEADER_NAME_ID: &str = "header-name";
    pub const TAGLINE: &str = "[data-portfolio-tagline]";
    pub const NAME: &str = "[data-portfolio-name]";
    pub const RESUME_LINK: &str = ".resume-link";
    pub const AVATAR_CONTAINER_ID: &str = "profileAvatar";
    pub const AVATAR_IMAGE_ID: &str = "profile-photo";
}

/// CSS `url("...")` value for `src`
pub fn css_url(src: &str) -> String {
    let escaped = src.replace('\\', "\\\\").replace('"', "\\\"");
    format!("url(\"{}\")", escaped)
}
