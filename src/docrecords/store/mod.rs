//! # Storage Layer
//!
//! [`RecordStore`] is the keyed repository every other layer goes through to
//! read or change records. The store is the sole owner of its backing map;
//! callers only ever receive clones.
//!
//! ## Contract
//!
//! - Every method takes `&self` and is safe to call from many threads at once.
//!   Concurrent saves to the same id resolve last-writer-wins.
//! - Nothing here fails. A missing key is `None` (lookups) or a no-op
//!   (deletes), never an error. There is no I/O, so there is no retry or
//!   timeout logic either.
//! - [`RecordStore::find_all`] returns a point-in-time snapshot ordered by
//!   `created_at`, newest first.
//! - [`RecordStore::delete_all`] is a sequence of single-key removals, not a
//!   transaction.
//!
//! ## Ordering
//!
//! Listings copy the live values out and sort the copy, O(n log n) per call.
//! There is no secondary sorted index: writes stay a single map operation and
//! record counts are moderate.
//!
//! ## Implementations
//!
//! - [`memory::InMemoryRecordStore`]: `RwLock`-guarded `HashMap`.
//!
//! `Arc<S>` is itself a store, so one instance can be handed to several
//! request handlers or threads.

use crate::model::Record;
use std::sync::Arc;
use uuid::Uuid;

pub mod memory;

/// Abstract interface for record storage.
pub trait RecordStore: Send + Sync {
    /// Store `record` under its id, replacing any previous version.
    fn save(&self, record: Record) -> Record;

    /// Look up a record by id.
    fn find_by_id(&self, id: &Uuid) -> Option<Record>;

    /// Snapshot of all records, newest first.
    fn find_all(&self) -> Vec<Record>;

    /// Remove a record. Returns whether it was present.
    fn delete_by_id(&self, id: &Uuid) -> bool;

    /// Remove every listed record that exists. Returns how many were removed.
    fn delete_all(&self, ids: &[Uuid]) -> usize;
}

impl<S: RecordStore + ?Sized> RecordStore for Arc<S> {
    fn save(&self, record: Record) -> Record {
        (**self).save(record)
    }

    fn find_by_id(&self, id: &Uuid) -> Option<Record> {
        (**self).find_by_id(id)
    }

    fn find_all(&self) -> Vec<Record> {
        (**self).find_all()
    }

    fn delete_by_id(&self, id: &Uuid) -> bool {
        (**self).delete_by_id(id)
    }

    fn delete_all(&self, ids: &[Uuid]) -> usize {
        (**self).delete_all(ids)
    }
}
