use super::BookQueryService;
use crate::application::{
    dto::{BookDto, Page},
    error::ApplicationResult,
};

const DEFAULT_PAGE_SIZE: u32 = 20;
const MAX_PAGE_SIZE: u32 = 100;

#[derive(Debug, Clone, Copy, Default)]
pub struct ListBooksQuery {
    /// 1-based; 0 is read as the first page.
    pub page: u32,
    /// 0 selects the default size.
    pub page_size: u32,
}

impl ListBooksQuery {
    pub(super) fn normalized(self) -> (u32, u32) {
        let page = self.page.max(1);
        let page_size = if self.page_size == 0 {
            DEFAULT_PAGE_SIZE
        } else {
            self.page_size.min(MAX_PAGE_SIZE)
        };
        (page, page_size)
    }
}

impl BookQueryService {
    /// Index listing, newest first.
    pub async fn list_books(&self, query: ListBooksQuery) -> ApplicationResult<Page<BookDto>> {
        let (page, page_size) = query.normalized();
        let (records, total) = self.read_repo.list_page(page, page_size).await?;
        let items = records.into_iter().map(Into::into).collect();
        Ok(Page::new(items, page, page_size, total))
    }
}
