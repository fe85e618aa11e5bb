use crate::commands::{CmdMessage, CmdResult};
use crate::store::RecordStore;
use tracing::info;
use uuid::Uuid;

/// Delete one record. Deleting an absent id succeeds.
pub fn one<S: RecordStore>(store: &S, id: &Uuid) -> CmdResult {
    let mut result = CmdResult::default();
    if store.delete_by_id(id) {
        info!(%id, "record deleted");
        result.add_message(CmdMessage::success(format!("Record deleted: {}", id)));
    } else {
        result.add_message(CmdMessage::info(format!("No record with id {}", id)));
    }
    result
}

/// Delete every listed record that exists; absent ids are ignored.
pub fn many<S: RecordStore>(store: &S, ids: &[Uuid]) -> CmdResult {
    let removed = store.delete_all(ids);
    info!(requested = ids.len(), removed, "records deleted");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "{} of {} records deleted",
        removed,
        ids.len()
    )));
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn deleting_twice_is_harmless() {
        let fixture = StoreFixture::new().with_records(2);
        let id = fixture.ids_oldest_first()[0];

        one(&fixture.store, &id);
        let second = one(&fixture.store, &id);

        assert_eq!(fixture.store.len(), 1);
        assert!(matches!(second.messages[0].level, crate::commands::MessageLevel::Info));
    }

    #[test]
    fn bulk_delete_ignores_absent_ids() {
        let fixture = StoreFixture::new().with_records(4);
        let ids = fixture.ids_oldest_first();

        let result = many(&fixture.store, &[ids[0], Uuid::new_v4(), ids[2]]);

        assert_eq!(result.messages[0].content, "2 of 3 records deleted");
        assert!(fixture.store.find_by_id(&ids[1]).is_some());
        assert!(fixture.store.find_by_id(&ids[3]).is_some());
        assert_eq!(fixture.store.len(), 2);
    }
}
