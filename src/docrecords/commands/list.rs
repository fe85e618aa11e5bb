use crate::commands::{CmdResult, PageInfo};
use crate::model::FileKind;
use crate::store::RecordStore;

/// 1-based page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub number: usize,
    pub size: usize,
}

impl Page {
    pub fn new(number: usize, size: usize) -> Self {
        Self {
            number: number.max(1),
            size: size.max(1),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ListFilter {
    /// Only records of this kind; `None` lists everything.
    pub kind: Option<FileKind>,
    pub page: Option<Page>,
}

impl ListFilter {
    pub fn kind(mut self, kind: FileKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn page(mut self, page: Page) -> Self {
        self.page = Some(page);
        self
    }
}

pub fn run<S: RecordStore>(store: &S, filter: &ListFilter) -> CmdResult {
    let mut records = store.find_all();
    if let Some(kind) = filter.kind {
        records.retain(|r| r.kind() == kind);
    }

    let Some(page) = filter.page else {
        return CmdResult::default().with_listed_records(records);
    };

    let total_records = records.len();
    let info = PageInfo {
        page: page.number,
        page_size: page.size,
        total_records,
        total_pages: total_records.div_ceil(page.size),
    };
    let sliced: Vec<_> = records
        .into_iter()
        .skip((page.number - 1).saturating_mul(page.size))
        .take(page.size)
        .collect();

    CmdResult::default()
        .with_listed_records(sliced)
        .with_page(info)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryRecordStore;

    fn mixed_store() -> InMemoryRecordStore {
        StoreFixture::new()
            .with_record("a.xlsx", "xlsx")
            .with_record("b.json", "json")
            .with_record("c.csv", "csv")
            .with_record("d.docx", "docx")
            .with_record("e.json", "json")
            .store
    }

    fn names(result: &CmdResult) -> Vec<&str> {
        result
            .listed_records
            .iter()
            .map(|r| r.file_name.as_str())
            .collect()
    }

    #[test]
    fn lists_newest_first() {
        let result = run(&mixed_store(), &ListFilter::default());
        assert_eq!(names(&result), vec!["e.json", "d.docx", "c.csv", "b.json", "a.xlsx"]);
        assert!(result.page.is_none());
    }

    #[test]
    fn filters_by_kind() {
        let store = mixed_store();
        let sheets = run(&store, &ListFilter::default().kind(FileKind::Spreadsheet));
        assert_eq!(names(&sheets), vec!["c.csv", "a.xlsx"]);

        let json = run(&store, &ListFilter::default().kind(FileKind::Json));
        assert_eq!(names(&json), vec!["e.json", "b.json"]);
    }

    #[test]
    fn paginates() {
        let store = StoreFixture::new().with_records(23).store;

        let third = run(&store, &ListFilter::default().page(Page::new(3, 10)));
        assert_eq!(third.listed_records.len(), 3);
        assert_eq!(
            third.page,
            Some(PageInfo {
                page: 3,
                page_size: 10,
                total_records: 23,
                total_pages: 3,
            })
        );
        assert_eq!(third.listed_records[2].file_name, "sheet-1.xlsx");
    }

    #[test]
    fn page_past_the_end_is_empty() {
        let store = StoreFixture::new().with_records(2).store;
        let result = run(&store, &ListFilter::default().page(Page::new(4, 10)));

        assert!(result.listed_records.is_empty());
        assert_eq!(result.page.map(|p| p.total_pages), Some(1));
    }
}
