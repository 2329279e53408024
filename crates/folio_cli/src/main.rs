//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `folio_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use std::sync::Arc;

use folio_core::{ContentStore, MemorySlotStore, SlotStore};

fn main() {
    println!("folio_core version={}", folio_core::core_version());

    // In-memory probe: an empty store must load the default document.
    let store: Arc<dyn SlotStore> = Arc::new(MemorySlotStore::new());
    let content = ContentStore::new(store);
    let document = content.document();
    println!(
        "default document: home={:?} skills={} projects={} experience={}",
        document.home.title,
        document.skills.len(),
        document.projects.len(),
        document.experience.len()
    );
}
