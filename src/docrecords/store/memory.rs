use super::RecordStore;
use crate::model::Record;
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::debug;
use uuid::Uuid;

/// In-memory record storage. Does NOT persist data.
///
/// Each operation takes the lock once and releases it before returning.
/// A poisoned lock is recovered rather than propagated: every write is a
/// single map call, so the map is never left half-updated.
#[derive(Default)]
pub struct InMemoryRecordStore {
    records: RwLock<HashMap<Uuid, Record>>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<Uuid, Record>> {
        self.records.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<Uuid, Record>> {
        self.records.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl RecordStore for InMemoryRecordStore {
    fn save(&self, record: Record) -> Record {
        debug!(id = %record.id, file = %record.file_name, "saving record");
        self.write().insert(record.id, record.clone());
        record
    }

    fn find_by_id(&self, id: &Uuid) -> Option<Record> {
        self.read().get(id).cloned()
    }

    fn find_all(&self) -> Vec<Record> {
        // Copy under the read lock, sort after it is released.
        let mut records: Vec<Record> = self.read().values().cloned().collect();
        records.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| a.id.cmp(&b.id))
        });
        records
    }

    fn delete_by_id(&self, id: &Uuid) -> bool {
        let removed = self.write().remove(id).is_some();
        debug!(%id, removed, "deleted record");
        removed
    }

    fn delete_all(&self, ids: &[Uuid]) -> usize {
        ids.iter().filter(|id| self.delete_by_id(id)).count()
    }
}

impl std::fmt::Debug for InMemoryRecordStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryRecordStore")
            .field("record_count", &self.len())
            .finish()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use chrono::{DateTime, Duration, TimeZone, Utc};

    /// Fixed base time so ordering assertions don't depend on the clock.
    pub fn base_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap()
    }

    pub fn record_at(
        file_name: &str,
        file_type: &str,
        created_at: DateTime<Utc>,
    ) -> Record {
        let stem = file_name.rsplit_once('.').map_or(file_name, |(s, _)| s);
        Record {
            id: Uuid::new_v4(),
            file_name: file_name.to_string(),
            original_title: stem.to_string(),
            file_type: file_type.to_string(),
            html_content: format!("<h1>{}</h1>", stem),
            jsonl_content: format!("{{\"title\":\"{}\"}}\n", stem),
            created_at,
        }
    }

    pub struct StoreFixture {
        pub store: InMemoryRecordStore,
        next_offset: i64,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryRecordStore::new(),
                next_offset: 0,
            }
        }

        /// Each added record is one minute newer than the previous one.
        pub fn with_record(mut self, file_name: &str, file_type: &str) -> Self {
            let created_at = base_time() + Duration::minutes(self.next_offset);
            self.next_offset += 1;
            self.store.save(record_at(file_name, file_type, created_at));
            self
        }

        pub fn with_records(mut self, count: usize) -> Self {
            for i in 0..count {
                self = self.with_record(&format!("sheet-{}.xlsx", i + 1), "xlsx");
            }
            self
        }

        /// Ids ordered oldest first (insertion order).
        pub fn ids_oldest_first(&self) -> Vec<Uuid> {
            let mut ids: Vec<Uuid> = self.store.find_all().iter().map(|r| r.id).collect();
            ids.reverse();
            ids
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;
    use chrono::Duration;

    #[test]
    fn save_then_find_round_trips() {
        let store = InMemoryRecordStore::new();
        let record = record_at("a.xlsx", "xlsx", base_time());
        let saved = store.save(record.clone());

        assert_eq!(saved, record);
        assert_eq!(store.find_by_id(&record.id), Some(record));
    }

    #[test]
    fn find_unknown_id_is_none() {
        let store = StoreFixture::new().with_records(2).store;
        assert_eq!(store.find_by_id(&Uuid::new_v4()), None);
    }

    #[test]
    fn find_all_is_newest_first() {
        let store = InMemoryRecordStore::new();
        let t1 = base_time();
        let r1 = store.save(record_at("r1.xlsx", "xlsx", t1));
        let r2 = store.save(record_at("r2.xlsx", "xlsx", t1 + Duration::seconds(5)));
        let r3 = store.save(record_at("r3.xlsx", "xlsx", t1 - Duration::seconds(5)));

        let ids: Vec<Uuid> = store.find_all().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![r2.id, r1.id, r3.id]);
    }

    #[test]
    fn find_all_with_equal_timestamps_lists_each_once() {
        let store = InMemoryRecordStore::new();
        for i in 0..5 {
            store.save(record_at(&format!("{}.csv", i), "csv", base_time()));
        }
        let mut ids: Vec<Uuid> = store.find_all().iter().map(|r| r.id).collect();
        assert_eq!(ids.len(), 5);
        ids.dedup();
        assert_eq!(ids.len(), 5);
    }

    #[test]
    fn snapshot_is_unaffected_by_later_writes() {
        let fixture = StoreFixture::new().with_records(2);
        let snapshot = fixture.store.find_all();
        fixture.store.delete_all(&fixture.ids_oldest_first());

        assert_eq!(snapshot.len(), 2);
        assert!(fixture.store.is_empty());
    }

    #[test]
    fn save_replaces_existing_record() {
        let store = InMemoryRecordStore::new();
        let record = store.save(record_at("a.xlsx", "xlsx", base_time()));
        store.save(record.with_html("<p>X</p>"));

        assert_eq!(store.len(), 1);
        let found = store.find_by_id(&record.id).unwrap();
        assert_eq!(found.html_content, "<p>X</p>");
        assert_eq!(found.created_at, record.created_at);
    }

    #[test]
    fn delete_is_idempotent() {
        let fixture = StoreFixture::new().with_records(2);
        let id = fixture.ids_oldest_first()[0];

        assert!(fixture.store.delete_by_id(&id));
        assert!(!fixture.store.delete_by_id(&id));
        assert_eq!(fixture.store.len(), 1);
    }

    #[test]
    fn delete_all_skips_missing_ids() {
        let fixture = StoreFixture::new().with_records(4);
        let ids = fixture.ids_oldest_first();
        let missing = Uuid::new_v4();

        let removed = fixture.store.delete_all(&[ids[0], missing, ids[2]]);

        assert_eq!(removed, 2);
        let left: Vec<Uuid> = fixture.store.find_all().iter().map(|r| r.id).collect();
        assert_eq!(left, vec![ids[3], ids[1]]);
    }
}
