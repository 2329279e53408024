//! Debounced slot writer for document autosave.
//!
//! # Responsibility
//! - Hold the single pending payload and commit it once edits pause for the
//!   configured quiet period.
//!
//! # Invariants
//! - A payload superseded before the quiet period elapses is never written.
//! - Commit failures are swallowed and logged; the payload is not retried.
//! - An acknowledged erase is ordered after every commit the worker started
//!   before it; an erased slot cannot be re-created by an earlier edit.

use crate::store::SlotStore;
use log::{error, info, warn};
use std::sync::mpsc::{channel, Receiver, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::thread::{Builder, JoinHandle};
use std::time::Duration;

enum SaveCommand {
    /// Replace any pending payload and restart the quiet period.
    Save(String),
    /// Discard any pending payload, erase the slot, then acknowledge.
    ///
    /// Processed in channel order, so the erase lands after any commit the
    /// worker has already started.
    Erase(Sender<()>),
}

/// Single-slot "latest pending write" coalescing queue.
///
/// A worker thread owns the store handle; the content store feeds it payloads
/// over a channel. Dropping the autosaver shuts the worker down, discarding
/// any payload still waiting out its quiet period.
pub(crate) struct Autosaver {
    tx: Option<Sender<SaveCommand>>,
    handle: Option<JoinHandle<()>>,
}

impl Autosaver {
    pub(crate) fn spawn(
        store: Arc<dyn SlotStore>,
        slot_key: &'static str,
        quiet_period: Duration,
    ) -> Self {
        let (tx, rx) = channel();
        let handle = Builder::new()
            .name("folio-autosave".to_string())
            .spawn(move || run_loop(rx, store, slot_key, quiet_period));

        match handle {
            Ok(handle) => Self {
                tx: Some(tx),
                handle: Some(handle),
            },
            Err(err) => {
                // Without a worker every schedule call becomes a logged no-op;
                // the in-memory document stays authoritative either way.
                error!(
                    "event=autosave_spawn module=content status=error error={}",
                    err
                );
                Self {
                    tx: Some(tx),
                    handle: None,
                }
            }
        }
    }

    /// Schedules `payload` for writing after the quiet period, replacing any
    /// payload already pending.
    pub(crate) fn schedule(&self, payload: String) {
        let Some(tx) = self.tx.as_ref() else {
            return;
        };
        if tx.send(SaveCommand::Save(payload)).is_err() {
            error!("event=autosave module=content status=error error=worker_unavailable");
        }
    }

    /// Discards any pending payload and erases the slot on the worker
    /// thread, blocking until the worker acknowledges.
    ///
    /// Returns `false` when the worker is unavailable and the caller must
    /// erase the slot itself.
    pub(crate) fn erase(&self) -> bool {
        let Some(tx) = self.tx.as_ref() else {
            return false;
        };
        let (ack_tx, ack_rx) = channel();
        if tx.send(SaveCommand::Erase(ack_tx)).is_err() {
            return false;
        }
        ack_rx.recv().is_ok()
    }
}

impl Drop for Autosaver {
    fn drop(&mut self) {
        // Disconnect first so the worker observes shutdown instead of
        // waiting for further commands.
        drop(self.tx.take());
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

fn run_loop(
    rx: Receiver<SaveCommand>,
    store: Arc<dyn SlotStore>,
    slot_key: &'static str,
    quiet_period: Duration,
) {
    let mut pending: Option<String> = None;

    loop {
        if let Some(payload) = pending.take() {
            match rx.recv_timeout(quiet_period) {
                Ok(SaveCommand::Save(next)) => pending = Some(next),
                Ok(SaveCommand::Erase(ack)) => {
                    erase(store.as_ref(), slot_key);
                    let _ = ack.send(());
                }
                Err(RecvTimeoutError::Timeout) => commit(store.as_ref(), slot_key, &payload),
                Err(RecvTimeoutError::Disconnected) => {
                    warn!(
                        "event=autosave module=content status=dropped reason=shutdown bytes={}",
                        payload.len()
                    );
                    return;
                }
            }
        } else {
            match rx.recv() {
                Ok(SaveCommand::Save(next)) => pending = Some(next),
                Ok(SaveCommand::Erase(ack)) => {
                    erase(store.as_ref(), slot_key);
                    let _ = ack.send(());
                }
                Err(_) => return,
            }
        }
    }
}

fn erase(store: &dyn SlotStore, slot_key: &str) {
    match store.remove_slot(slot_key) {
        Ok(()) => info!("event=content_reset module=content status=ok"),
        Err(err) => error!(
            "event=content_reset module=content status=error error={}",
            err
        ),
    }
}

fn commit(store: &dyn SlotStore, slot_key: &str, payload: &str) {
    match store.write_slot(slot_key, payload) {
        Ok(()) => info!(
            "event=autosave module=content status=ok bytes={}",
            payload.len()
        ),
        Err(err) => error!(
            "event=autosave module=content status=error bytes={} error={}",
            payload.len(),
            err
        ),
    }
}
