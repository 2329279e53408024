//! Persistent key-value slot storage.
//!
//! # Responsibility
//! - Define the slot-store contract the content store and session guard
//!   persist through.
//! - Provide SQLite-backed and in-memory implementations.
//!
//! # Invariants
//! - Slots are independent string-keyed values; writing one slot never
//!   affects another.
//! - Reading an absent slot yields `Ok(None)`, not an error.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod migrations;
mod memory;
mod sqlite;

pub use memory::MemorySlotStore;
pub use sqlite::{open_store, open_store_in_memory, SqliteSlotStore};

pub type StoreResult<T> = Result<T, StoreError>;

/// Slot storage errors.
#[derive(Debug)]
pub enum StoreError {
    Sqlite(rusqlite::Error),
    UnsupportedSchemaVersion {
        store_version: u32,
        latest_supported: u32,
    },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::UnsupportedSchemaVersion {
                store_version,
                latest_supported,
            } => write!(
                f,
                "slot store schema version {store_version} is newer than supported {latest_supported}"
            ),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::UnsupportedSchemaVersion { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

/// Contract for the persistent key-value slots backing content and session
/// state.
///
/// Implementations must be shareable across the caller thread and the
/// autosave worker, hence `Send + Sync`.
pub trait SlotStore: Send + Sync {
    /// Reads one slot. Absent slots yield `Ok(None)`.
    fn read_slot(&self, key: &str) -> StoreResult<Option<String>>;

    /// Writes one slot, replacing any previous value.
    fn write_slot(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Removes one slot. Removing an absent slot is not an error.
    fn remove_slot(&self, key: &str) -> StoreResult<()>;
}
