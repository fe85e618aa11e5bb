use crate::commands::CmdResult;
use crate::error::{RecordsError, Result};
use crate::store::RecordStore;
use uuid::Uuid;

pub fn run<S: RecordStore>(store: &S, id: &Uuid) -> Result<CmdResult> {
    let record = store
        .find_by_id(id)
        .ok_or(RecordsError::RecordNotFound(*id))?;
    Ok(CmdResult::default().with_listed_records(vec![record]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn returns_the_record() {
        let fixture = StoreFixture::new().with_record("a.csv", "csv");
        let id = fixture.ids_oldest_first()[0];

        let result = run(&fixture.store, &id).unwrap();
        assert_eq!(result.listed_records[0].id, id);
    }

    #[test]
    fn unknown_id_is_not_found() {
        let fixture = StoreFixture::new().with_records(1);
        let missing = Uuid::new_v4();

        let err = run(&fixture.store, &missing).unwrap_err();
        assert!(matches!(err, RecordsError::RecordNotFound(id) if id == missing));
    }
}
