use super::BookQueryService;
use crate::{
    application::{
        dto::BookDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::book::BookId,
};

pub struct GetBookByIdQuery {
    pub id: i64,
}

impl BookQueryService {
    pub async fn get_book_by_id(&self, query: GetBookByIdQuery) -> ApplicationResult<BookDto> {
        let id = BookId::new(query.id)?;
        let book = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("book not found"))?;
        Ok(book.into())
    }
}
