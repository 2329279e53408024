//! Content store entry points.
//!
//! # Responsibility
//! - Load the document at startup with an all-or-nothing default fallback.
//! - Apply section-granular updates and schedule debounced persistence.
//!
//! # Invariants
//! - `update_section` replaces exactly one section and never fails.
//! - Autosave runs regardless of the edit-session flag; the flag is a
//!   rendering-mode switch only.

use crate::content::autosave::Autosaver;
use crate::model::document::ContentDocument;
use crate::model::section::{SectionKey, SectionValue};
use crate::store::SlotStore;
use log::{debug, error, info};
use std::sync::Arc;
use std::time::Duration;

/// Slot key holding the JSON-serialized document.
pub const CONTENT_SLOT_KEY: &str = "portfolio_content";

/// Quiet period after the last edit before a write is committed.
pub const DEFAULT_QUIET_PERIOD: Duration = Duration::from_millis(700);

/// Content store tuning knobs.
#[derive(Debug, Clone)]
pub struct ContentStoreConfig {
    /// Debounce delay between the last edit and the persisted write.
    pub quiet_period: Duration,
}

impl Default for ContentStoreConfig {
    fn default() -> Self {
        Self {
            quiet_period: DEFAULT_QUIET_PERIOD,
        }
    }
}

/// One section update request.
///
/// The "replacement value or updater function" calling convention of the
/// rendering layer, made explicit as a sum type.
pub enum SectionUpdate {
    /// Replace the section matching the payload's variant.
    Replace(SectionValue),
    /// Derive the new payload from the section's current value.
    ///
    /// The transform is expected to return the same variant it was given; a
    /// transform that switches variants replaces that other section instead,
    /// which mirrors the no-validation contract of this layer.
    Transform(SectionKey, Box<dyn FnOnce(SectionValue) -> SectionValue>),
}

impl SectionUpdate {
    /// Builds a replacement update.
    pub fn replace(value: SectionValue) -> Self {
        Self::Replace(value)
    }

    /// Builds a transform update over the named section.
    pub fn transform(
        key: SectionKey,
        transform: impl FnOnce(SectionValue) -> SectionValue + 'static,
    ) -> Self {
        Self::Transform(key, Box::new(transform))
    }
}

/// Owner of the single in-memory content document.
pub struct ContentStore {
    document: ContentDocument,
    edit_session_active: bool,
    store: Arc<dyn SlotStore>,
    autosaver: Autosaver,
}

impl ContentStore {
    /// Creates a store with the default quiet period.
    pub fn new(store: Arc<dyn SlotStore>) -> Self {
        Self::with_config(store, ContentStoreConfig::default())
    }

    /// Creates a store with explicit tuning knobs.
    ///
    /// Loads the persisted document once; on absence, read error, or parse
    /// failure the fixed default document is used instead. Construction
    /// never fails.
    pub fn with_config(store: Arc<dyn SlotStore>, config: ContentStoreConfig) -> Self {
        let document = load_document(store.as_ref());
        let autosaver = Autosaver::spawn(Arc::clone(&store), CONTENT_SLOT_KEY, config.quiet_period);
        Self {
            document,
            edit_session_active: false,
            store,
            autosaver,
        }
    }

    /// Read-only view of the current document.
    pub fn document(&self) -> &ContentDocument {
        &self.document
    }

    /// Clone-out read of one section.
    pub fn section(&self, key: SectionKey) -> SectionValue {
        self.document.section(key)
    }

    /// Applies one section update and schedules a debounced autosave.
    ///
    /// No shape validation is performed; malformed content is accepted and
    /// surfaces as a rendering concern downstream.
    pub fn update_section(&mut self, update: SectionUpdate) {
        let value = match update {
            SectionUpdate::Replace(value) => value,
            SectionUpdate::Transform(key, transform) => transform(self.document.section(key)),
        };
        let key = value.key();
        self.document.set_section(value);
        debug!("event=section_update module=content status=ok section={key}");
        self.schedule_autosave();
    }

    /// Replaces the document with the fixed default and erases the persisted
    /// slot before returning.
    ///
    /// Irreversible; confirmation, if any, is a UI concern. The erase runs
    /// on the autosave worker and is acknowledged before this method
    /// returns, so it discards any pending debounced write and lands after
    /// any commit already in flight — a just-edited document cannot
    /// resurrect the slot after the reset.
    pub fn reset(&mut self) {
        self.document = ContentDocument::default_document();
        if !self.autosaver.erase() {
            // No worker to order the erase behind; erase directly so the
            // reset still lands.
            match self.store.remove_slot(CONTENT_SLOT_KEY) {
                Ok(()) => info!("event=content_reset module=content status=ok"),
                Err(err) => error!(
                    "event=content_reset module=content status=error error={}",
                    err
                ),
            }
        }
    }

    /// Toggles whether the UI should render editable controls.
    ///
    /// Has no effect on persistence; autosave runs regardless of this flag.
    pub fn set_edit_session_active(&mut self, active: bool) {
        self.edit_session_active = active;
        debug!(
            "event=edit_session module=content status=ok active={}",
            active
        );
    }

    /// Returns whether the UI should render editable controls.
    pub fn edit_session_active(&self) -> bool {
        self.edit_session_active
    }

    fn schedule_autosave(&self) {
        match serde_json::to_string(&self.document) {
            Ok(payload) => self.autosaver.schedule(payload),
            Err(err) => error!(
                "event=autosave module=content status=error error=serialize_failed detail={}",
                err
            ),
        }
    }
}

fn load_document(store: &dyn SlotStore) -> ContentDocument {
    match store.read_slot(CONTENT_SLOT_KEY) {
        Ok(Some(raw)) => match serde_json::from_str::<ContentDocument>(&raw) {
            Ok(document) => {
                info!("event=content_load module=content status=ok source=persisted");
                document
            }
            Err(err) => {
                error!(
                    "event=content_load module=content status=fallback reason=parse_failed error={}",
                    err
                );
                ContentDocument::default_document()
            }
        },
        Ok(None) => {
            info!("event=content_load module=content status=ok source=default");
            ContentDocument::default_document()
        }
        Err(err) => {
            error!(
                "event=content_load module=content status=fallback reason=read_failed error={}",
                err
            );
            ContentDocument::default_document()
        }
    }
}
