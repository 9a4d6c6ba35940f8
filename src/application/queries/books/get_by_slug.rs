use super::BookQueryService;
use crate::{
    application::{
        dto::BookDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::slug::Slug,
};

pub struct GetBookBySlugQuery {
    pub slug: String,
}

impl BookQueryService {
    pub async fn get_book_by_slug(&self, query: GetBookBySlugQuery) -> ApplicationResult<BookDto> {
        let slug = Slug::new(query.slug);
        let book = self
            .read_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("book not found"))?;
        Ok(book.into())
    }
}
