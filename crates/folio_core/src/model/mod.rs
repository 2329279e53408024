//! Portfolio content data model.
//!
//! # Responsibility
//! - Define the typed document rendered by the portfolio page.
//! - Define the closed set of section keys and their payload types.
//!
//! # Invariants
//! - Section keys are fixed and known ahead of time.
//! - List sections identify entries by a creation-timestamp `EntryId` that is
//!   locally unique and immutable once assigned.
//! - Insertion order is the only ordering guarantee for list sections.

pub mod document;
pub mod section;
