//! Section key and payload sum types.
//!
//! # Responsibility
//! - Name the six document sections with stable string ids.
//! - Pair each key with its typed payload for section-granular updates.

use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::model::document::{
    AboutSection, ContactSection, ExperienceEntry, HomeSection, Project, Skill,
};

/// Closed set of document section names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SectionKey {
    Home,
    About,
    Skills,
    Projects,
    Experience,
    Contact,
}

impl SectionKey {
    /// Stable string id, matching the keys of the JSON wire shape.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Home => SECTION_KEY_HOME,
            Self::About => SECTION_KEY_ABOUT,
            Self::Skills => SECTION_KEY_SKILLS,
            Self::Projects => SECTION_KEY_PROJECTS,
            Self::Experience => SECTION_KEY_EXPERIENCE,
            Self::Contact => SECTION_KEY_CONTACT,
        }
    }
}

impl Display for SectionKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Wire string for the home section.
pub const SECTION_KEY_HOME: &str = "home";
/// Wire string for the about section.
pub const SECTION_KEY_ABOUT: &str = "about";
/// Wire string for the skills section.
pub const SECTION_KEY_SKILLS: &str = "skills";
/// Wire string for the projects section.
pub const SECTION_KEY_PROJECTS: &str = "projects";
/// Wire string for the experience section.
pub const SECTION_KEY_EXPERIENCE: &str = "experience";
/// Wire string for the contact section.
pub const SECTION_KEY_CONTACT: &str = "contact";

const ALL_SECTION_KEYS: &[SectionKey] = &[
    SectionKey::Home,
    SectionKey::About,
    SectionKey::Skills,
    SectionKey::Projects,
    SectionKey::Experience,
    SectionKey::Contact,
];

/// Returns every section key in document order.
pub fn all_section_keys() -> &'static [SectionKey] {
    ALL_SECTION_KEYS
}

/// Parses one section key from its wire string.
pub fn parse_section_key(value: &str) -> Result<SectionKey, SectionKeyError> {
    let normalized = value.trim();
    if normalized.is_empty() {
        return Err(SectionKeyError::EmptyKey);
    }

    match normalized {
        SECTION_KEY_HOME => Ok(SectionKey::Home),
        SECTION_KEY_ABOUT => Ok(SectionKey::About),
        SECTION_KEY_SKILLS => Ok(SectionKey::Skills),
        SECTION_KEY_PROJECTS => Ok(SectionKey::Projects),
        SECTION_KEY_EXPERIENCE => Ok(SectionKey::Experience),
        SECTION_KEY_CONTACT => Ok(SectionKey::Contact),
        other => Err(SectionKeyError::UnknownKey(other.to_string())),
    }
}

/// Section key parse errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionKeyError {
    EmptyKey,
    UnknownKey(String),
}

impl Display for SectionKeyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyKey => write!(f, "section key is empty"),
            Self::UnknownKey(value) => write!(f, "unknown section key: {value}"),
        }
    }
}

impl Error for SectionKeyError {}

/// One section's payload, tagged with its key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionValue {
    Home(HomeSection),
    About(AboutSection),
    Skills(Vec<Skill>),
    Projects(Vec<Project>),
    Experience(Vec<ExperienceEntry>),
    Contact(ContactSection),
}

impl SectionValue {
    /// Returns the key this payload belongs to.
    pub fn key(&self) -> SectionKey {
        match self {
            Self::Home(_) => SectionKey::Home,
            Self::About(_) => SectionKey::About,
            Self::Skills(_) => SectionKey::Skills,
            Self::Projects(_) => SectionKey::Projects,
            Self::Experience(_) => SectionKey::Experience,
            Self::Contact(_) => SectionKey::Contact,
        }
    }
}
