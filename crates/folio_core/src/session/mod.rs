//! Session guard: the single elevated/anonymous privilege flag.
//!
//! # Responsibility
//! - Derive the elevated flag from persisted state at startup.
//! - Verify login credentials against a fixed password digest.
//!
//! # Invariants
//! - `anonymous -> elevated` happens only through a successful login.
//! - `elevated -> anonymous` happens only through logout.
//! - The candidate password is never persisted and never logged.

mod guard;

pub use guard::{SessionGuard, ELEVATED_SENTINEL, SESSION_SLOT_KEY};
