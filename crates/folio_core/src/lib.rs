//! Core domain logic for the Folio portfolio editor.
//! This crate is the single source of truth for content and session state.

pub mod content;
pub mod logging;
pub mod model;
pub mod session;
pub mod store;

pub use content::{
    ContentStore, ContentStoreConfig, SectionUpdate, CONTENT_SLOT_KEY, DEFAULT_QUIET_PERIOD,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::document::{
    allocate_entry_id, AboutSection, ContactSection, ContentDocument, EntryId, ExperienceEntry,
    HomeSection, Project, Skill, StatPair,
};
pub use model::section::{
    all_section_keys, parse_section_key, SectionKey, SectionKeyError, SectionValue,
};
pub use session::{SessionGuard, ELEVATED_SENTINEL, SESSION_SLOT_KEY};
pub use store::{
    open_store, open_store_in_memory, MemorySlotStore, SlotStore, SqliteSlotStore, StoreError,
    StoreResult,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
