//! ContentDocument and its section payload types.
//!
//! # Responsibility
//! - Define the canonical nested document persisted as plain UTF-8 JSON.
//! - Provide the fixed default document used as the load fallback.
//!
//! # Invariants
//! - The wire shape is the serde serialization of these types, no version
//!   field, no compression, no encryption.
//! - `set_section` replaces exactly one section; the rest of the document is
//!   left untouched.

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::model::section::{SectionKey, SectionValue};

/// Locally-unique identifier for entries in list sections.
///
/// The value is the entry's creation time in epoch milliseconds. It is never
/// reused within a list at a given time and never changes once assigned.
pub type EntryId = i64;

/// Hero section: name, tagline and short pitch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeSection {
    pub title: String,
    pub subtitle: String,
    pub description: String,
}

/// One label/value pair rendered in the about-section stat strip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatPair {
    pub label: String,
    pub value: String,
}

/// Freeform biography with an optional portrait reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AboutSection {
    pub content: String,
    /// Image reference (data URL or path) chosen by the owner, if any.
    pub image: Option<String>,
    pub stats: Vec<StatPair>,
}

/// One skill bar.
///
/// `level` is expected to lie in [0, 100]; the store performs no validation
/// and out-of-range values surface as a rendering concern downstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub id: EntryId,
    pub name: String,
    pub level: u8,
    pub category: String,
}

/// One portfolio project card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: EntryId,
    pub title: String,
    pub description: String,
    pub image: Option<String>,
    pub tech: Vec<String>,
    pub github: String,
    pub demo: Option<String>,
    pub featured: bool,
}

/// One work-history entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub id: EntryId,
    pub title: String,
    pub company: String,
    pub period: String,
    pub description: String,
    pub achievements: Vec<String>,
}

/// Contact links and location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSection {
    pub email: String,
    pub github: String,
    pub linkedin: String,
    pub twitter: String,
    pub location: String,
}

/// The full nested document rendered by the page.
///
/// Sections are replaced wholesale at section granularity; there is no
/// entry-level mutation API at this layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentDocument {
    pub home: HomeSection,
    pub about: AboutSection,
    pub skills: Vec<Skill>,
    pub projects: Vec<Project>,
    pub experience: Vec<ExperienceEntry>,
    pub contact: ContactSection,
}

impl ContentDocument {
    /// Returns the fixed fallback document.
    ///
    /// Used when no persisted document exists or the persisted bytes fail to
    /// deserialize. The fallback is all-or-nothing; a partially valid stored
    /// document is never merged with these defaults.
    pub fn default_document() -> Self {
        Self {
            home: HomeSection {
                title: "Your Name".to_string(),
                subtitle: "Your Role".to_string(),
                description: "A short pitch about what you do and why it matters.".to_string(),
            },
            about: AboutSection {
                content: "A few paragraphs about your background, focus areas and the kind of \
                          work you enjoy."
                    .to_string(),
                image: None,
                stats: vec![
                    StatPair {
                        label: "Years Experience".to_string(),
                        value: "5+".to_string(),
                    },
                    StatPair {
                        label: "Projects Shipped".to_string(),
                        value: "20+".to_string(),
                    },
                ],
            },
            skills: vec![
                Skill {
                    id: 1,
                    name: "Rust".to_string(),
                    level: 90,
                    category: "Programming".to_string(),
                },
                Skill {
                    id: 2,
                    name: "SQL".to_string(),
                    level: 85,
                    category: "Data".to_string(),
                },
            ],
            projects: vec![Project {
                id: 1,
                title: "Sample Project".to_string(),
                description: "Replace this card with a project you are proud of.".to_string(),
                image: None,
                tech: vec!["Rust".to_string()],
                github: "https://github.com/example/sample".to_string(),
                demo: None,
                featured: true,
            }],
            experience: vec![ExperienceEntry {
                id: 1,
                title: "Software Engineer".to_string(),
                company: "Example Co".to_string(),
                period: "2021 - Present".to_string(),
                description: "What you built and the impact it had.".to_string(),
                achievements: vec!["Shipped something notable".to_string()],
            }],
            contact: ContactSection {
                email: "you@example.com".to_string(),
                github: "https://github.com/example".to_string(),
                linkedin: "https://linkedin.com/in/example".to_string(),
                twitter: "https://twitter.com/example".to_string(),
                location: "Somewhere, Earth".to_string(),
            },
        }
    }

    /// Returns a clone of the named section wrapped in its payload type.
    pub fn section(&self, key: SectionKey) -> SectionValue {
        match key {
            SectionKey::Home => SectionValue::Home(self.home.clone()),
            SectionKey::About => SectionValue::About(self.about.clone()),
            SectionKey::Skills => SectionValue::Skills(self.skills.clone()),
            SectionKey::Projects => SectionValue::Projects(self.projects.clone()),
            SectionKey::Experience => SectionValue::Experience(self.experience.clone()),
            SectionKey::Contact => SectionValue::Contact(self.contact.clone()),
        }
    }

    /// Replaces exactly the section matching `value`'s variant.
    ///
    /// All other sections keep their current values. No shape validation is
    /// performed beyond what the payload types already guarantee.
    pub fn set_section(&mut self, value: SectionValue) {
        match value {
            SectionValue::Home(home) => self.home = home,
            SectionValue::About(about) => self.about = about,
            SectionValue::Skills(skills) => self.skills = skills,
            SectionValue::Projects(projects) => self.projects = projects,
            SectionValue::Experience(experience) => self.experience = experience,
            SectionValue::Contact(contact) => self.contact = contact,
        }
    }
}

/// Allocates a creation-timestamp entry id unique among `existing`.
///
/// Returns the current epoch-millisecond time, bumped past any colliding id
/// so two entries created within the same millisecond stay distinguishable.
pub fn allocate_entry_id(existing: &[EntryId]) -> EntryId {
    let now_ms = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as EntryId)
        .unwrap_or(0);

    let mut candidate = now_ms;
    while existing.contains(&candidate) {
        candidate += 1;
    }
    candidate
}
