// =====================================================================
// File: store/mod.rs
// Author: Bob Jack
// Course: CSCE 5350: Fundamentals of Database Systems
// Record Manager Project
// Date: Oct. 14, 2026
//
//! The `store` module owns the managed records.
//!
//! Structure:
//! - `record.rs`    : [`Record`], [`RecordDraft`], [`RecordPatch`] and [`SortField`].
//! - `changelog.rs` : The bounded, most-recent-first [`ChangeLog`].
//! - `store.rs`     : [`RecordStore`], id assignment, search, listing, and
//!                    the name index kept in an [`AvlIndex`](crate::AvlIndex).
//! - `tests.rs`     : Unit tests for the store (compiled only in test mode).
// =====================================================================

pub mod changelog;
pub mod record;
pub mod store;

pub use self::changelog::{ChangeEntry, ChangeKind, ChangeLog};
pub use self::record::{Record, RecordDraft, RecordId, RecordPatch, SortField};
pub use self::store::{ByName, NameKey, RecordStore};
