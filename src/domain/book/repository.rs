use crate::domain::book::entity::{Book, BookUpdate, NewBook};
use crate::domain::book::value_objects::BookId;
use crate::domain::errors::DomainResult;
use crate::domain::slug::{Slug, SlugLookup};
use async_trait::async_trait;

#[async_trait]
pub trait BookWriteRepository: Send + Sync {
    /// Fails with `DomainError::SlugCollision` when the slug is already taken.
    async fn insert(&self, book: NewBook) -> DomainResult<Book>;
    async fn update(&self, update: BookUpdate) -> DomainResult<Book>;
    async fn delete(&self, id: BookId) -> DomainResult<()>;
}

#[async_trait]
pub trait BookReadRepository: SlugLookup {
    async fn find_by_id(&self, id: BookId) -> DomainResult<Option<Book>>;
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Book>>;
    /// One page of books, newest first, plus the total number of books.
    async fn list_page(&self, page: u32, page_size: u32) -> DomainResult<(Vec<Book>, u64)>;
}
