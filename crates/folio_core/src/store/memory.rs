//! In-memory slot store.
//!
//! Stands in for browser local storage in tests and UI shells that have no
//! durable storage of their own. Contents vanish with the process.

use super::{SlotStore, StoreResult};
use parking_lot::RwLock;
use std::collections::HashMap;

/// HashMap-backed implementation of [`SlotStore`].
#[derive(Default)]
pub struct MemorySlotStore {
    slots: RwLock<HashMap<String, String>>,
}

impl MemorySlotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of occupied slots.
    pub fn len(&self) -> usize {
        self.slots.read().len()
    }

    /// Returns whether no slot is occupied.
    pub fn is_empty(&self) -> bool {
        self.slots.read().is_empty()
    }
}

impl SlotStore for MemorySlotStore {
    fn read_slot(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.slots.read().get(key).cloned())
    }

    fn write_slot(&self, key: &str, value: &str) -> StoreResult<()> {
        self.slots
            .write()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_slot(&self, key: &str) -> StoreResult<()> {
        self.slots.write().remove(key);
        Ok(())
    }
}
