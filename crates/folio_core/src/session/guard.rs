//! Elevated-privilege flag and credential check.

use crate::store::SlotStore;
use log::{error, info, warn};
use sha2::{Digest, Sha256};
use std::sync::Arc;

/// Slot key holding the persisted privilege flag.
pub const SESSION_SLOT_KEY: &str = "isAdmin";

/// Exact slot value meaning "elevated"; any other value reads as anonymous.
pub const ELEVATED_SENTINEL: &str = "true";

/// SHA-256 digest of the owner password, lowercase hex.
///
/// A single static shared secret with no rotation or per-user scoping; a
/// placeholder mechanism, not a security model.
const OWNER_PASSWORD_DIGEST: &str =
    "a5a4c61d1c0b8b4d3a3c3d5e4f0b6e9d0a7b8c9d0e1f2a3b4c5d6e7f8a9b0c1d";

/// Owner of the single elevated/anonymous flag.
///
/// States are `{anonymous, elevated}` only; there is no token, no expiry and
/// no per-user identity.
pub struct SessionGuard {
    elevated: bool,
    expected_digest: String,
    store: Arc<dyn SlotStore>,
}

impl SessionGuard {
    /// Creates a guard checking against the compiled-in owner digest.
    pub fn new(store: Arc<dyn SlotStore>) -> Self {
        Self::with_expected_digest(store, OWNER_PASSWORD_DIGEST)
    }

    /// Creates a guard checking against a caller-provided digest.
    ///
    /// The digest must be the lowercase-hex SHA-256 of the accepted password.
    pub fn with_expected_digest(store: Arc<dyn SlotStore>, digest: impl Into<String>) -> Self {
        let elevated = load_elevated(store.as_ref());
        Self {
            elevated,
            expected_digest: digest.into(),
            store,
        }
    }

    /// Returns whether the current session is elevated.
    pub fn elevated(&self) -> bool {
        self.elevated
    }

    /// Verifies `candidate` against the expected password digest.
    ///
    /// On a match the flag is set and persisted and `true` is returned; a
    /// persistence failure is swallowed and logged, the login still
    /// succeeds. On a mismatch the flag is left unchanged and `false` is
    /// returned. Never panics, never returns an error value.
    ///
    /// The comparison is plain string equality on the digest, not a
    /// constant-time compare; see the module docs for the threat model.
    pub fn login(&mut self, candidate: &str) -> bool {
        let digest = hex::encode(Sha256::digest(candidate.as_bytes()));
        if digest != self.expected_digest {
            warn!("event=login module=session status=denied");
            return false;
        }

        self.elevated = true;
        if let Err(err) = self.store.write_slot(SESSION_SLOT_KEY, ELEVATED_SENTINEL) {
            error!(
                "event=login module=session status=ok persist=failed error={}",
                err
            );
        } else {
            info!("event=login module=session status=ok");
        }
        true
    }

    /// Clears the elevated flag and removes the persisted sentinel.
    ///
    /// Always succeeds; a slot removal failure is swallowed and logged.
    pub fn logout(&mut self) {
        self.elevated = false;
        match self.store.remove_slot(SESSION_SLOT_KEY) {
            Ok(()) => info!("event=logout module=session status=ok"),
            Err(err) => error!("event=logout module=session status=error error={}", err),
        }
    }
}

fn load_elevated(store: &dyn SlotStore) -> bool {
    match store.read_slot(SESSION_SLOT_KEY) {
        Ok(value) => value.as_deref() == Some(ELEVATED_SENTINEL),
        Err(err) => {
            error!(
                "event=session_load module=session status=fallback error={}",
                err
            );
            false
        }
    }
}
