//! The persisted portfolio document
//!
//! One document per storage origin. Every field is required when parsing:
//! a stored value missing any of them is treated as corrupt and replaced
//! wholesale by the built-in default.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::ids::new_id;

/// Built-in defaults, used both to seed a fresh document and as display
/// fallbacks when a field is empty.
pub mod defaults {
    pub const NAME: &str = "Your Name";
    pub const TAGLINE: &str = "Aspiring Web Developer • Building portfolios";
    pub const BACKGROUND: &str = "loginbd3.jpg";
    /// Avatar text when the name yields no initials
    pub const INITIALS_PLACEHOLDER: &str = "U";
}

/// Social platforms with a dedicated link slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    LinkedIn,
    GitHub,
    Twitter,
}

impl Platform {
    pub const ALL: [Platform; 3] = [Platform::LinkedIn, Platform::GitHub, Platform::Twitter];

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::LinkedIn => "linkedin",
            Platform::GitHub => "github",
            Platform::Twitter => "twitter",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "linkedin" => Some(Platform::LinkedIn),
            "github" => Some(Platform::GitHub),
            "twitter" | "x" => Some(Platform::Twitter),
            _ => None,
        }
    }

    /// Class selector marking this platform's link elements
    pub fn selector(&self) -> &'static str {
        match self {
            Platform::LinkedIn => ".link-linkedin",
            Platform::GitHub => ".link-github",
            Platform::Twitter => ".link-twitter",
        }
    }
}

/// Profile URLs; an empty string means the link is unset
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Socials {
    pub linkedin: String,
    pub github: String,
    pub twitter: String,
}

impl Socials {
    pub fn url(&self, platform: Platform) -> &str {
        match platform {
            Platform::LinkedIn => &self.linkedin,
            Platform::GitHub => &self.github,
            Platform::Twitter => &self.twitter,
        }
    }

    pub fn set_url(&mut self, platform: Platform, url: impl Into<String>) {
        let slot = match platform {
            Platform::LinkedIn => &mut self.linkedin,
            Platform::GitHub => &mut self.github,
            Platform::Twitter => &mut self.twitter,
        };
        *slot = url.into();
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub id: String,
    pub role: String,
    pub company: String,
    pub period: String,
    pub details: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub content: String,
}

/// Everything the site pages show about the owner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioDocument {
    pub name: String,
    pub tagline: String,
    pub socials: Socials,
    /// Resume URL
    pub resume: String,
    /// Background image URL or path
    pub background: String,
    /// Avatar as a data URL
    pub profile_photo: String,
    pub skills: Vec<String>,
    pub projects: Vec<Project>,
    pub experience: Vec<Experience>,
    pub blog: Vec<BlogPost>,
}

impl PortfolioDocument {
    /// Build the starter document, drawing list item ids from `rng`
    pub fn default_with<R: Rng>(rng: &mut R) -> Self {
        Self {
            name: defaults::NAME.to_string(),
            tagline: defaults::TAGLINE.to_string(),
            socials: Socials::default(),
            resume: String::new(),
            background: defaults::BACKGROUND.to_string(),
            profile_photo: String::new(),
            skills: vec!["HTML".into(), "CSS".into(), "JavaScript".into()],
            projects: vec![Project {
                id: new_id(rng),
                title: "Portfolio UI".into(),
                description: "Responsive portfolio using HTML/CSS/JS".into(),
            }],
            experience: vec![Experience {
                id: new_id(rng),
                role: "Intern".into(),
                company: "Company".into(),
                period: "2025".into(),
                details: "Worked on frontend".into(),
            }],
            blog: vec![BlogPost {
                id: new_id(rng),
                title: "Started Web Dev".into(),
                excerpt: "My first steps...".into(),
                content: "I began learning...".into(),
            }],
        }
    }

    /// Name to display, falling back to the default when empty
    pub fn display_name(&self) -> &str {
        non_empty_or(&self.name, defaults::NAME)
    }

    pub fn display_tagline(&self) -> &str {
        non_empty_or(&self.tagline, defaults::TAGLINE)
    }

    pub fn display_background(&self) -> &str {
        non_empty_or(&self.background, defaults::BACKGROUND)
    }

    /// Avatar photo, if one is set
    pub fn photo(&self) -> Option<&str> {
        (!self.profile_photo.is_empty()).then_some(self.profile_photo.as_str())
    }

    /// Up to two upper-cased initials from the stored name
    ///
    /// Uses the raw name, not the display fallback: an empty name yields
    /// the placeholder rather than the default name's initials.
    pub fn initials(&self) -> String {
        let initials: String = self
            .name
            .split(' ')
            .take(2)
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .collect();
        if initials.is_empty() {
            defaults::INITIALS_PLACEHOLDER.to_string()
        } else {
            initials
        }
    }

    /// Ids of every list item, in document order
    pub fn item_ids(&self) -> Vec<&str> {
        self.projects
            .iter()
            .map(|p| p.id.as_str())
            .chain(self.experience.iter().map(|e| e.id.as_str()))
            .chain(self.blog.iter().map(|b| b.id.as_str()))
            .collect()
    }
}

fn non_empty_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() { fallback } else { value }
}
