//! Content store: the editable document and its persistence.
//!
//! # Responsibility
//! - Own the single in-memory `ContentDocument` per process.
//! - Coalesce bursts of edits into one debounced slot write.
//! - Expose read/update/reset entry points for the rendering layer.
//!
//! # Invariants
//! - The in-memory document is authoritative; persistence failures never
//!   roll it back.
//! - At most one debounced write is pending at a time.

mod autosave;
mod content_store;

pub use content_store::{
    ContentStore, ContentStoreConfig, SectionUpdate, CONTENT_SLOT_KEY, DEFAULT_QUIET_PERIOD,
};
