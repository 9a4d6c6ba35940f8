use crate::domain::book::Book;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::categories::CategoryDto;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BookDto {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub description: String,
    pub categories: Vec<CategoryDto>,
    /// First three category names, comma separated.
    pub category_summary: String,
    pub date_added: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub url: String,
    pub slug: String,
    /// Canonical location of the book.
    pub absolute_url: String,
}

impl From<Book> for BookDto {
    fn from(book: Book) -> Self {
        let category_summary = book.category_summary();
        let absolute_url = book.absolute_url().to_string();
        Self {
            id: book.id.into(),
            title: book.title,
            author: book.author,
            description: book.description,
            categories: book.categories.into_iter().map(Into::into).collect(),
            category_summary,
            date_added: book.date_added,
            image: book.image,
            url: book.url,
            slug: book.slug.into_inner(),
            absolute_url,
        }
    }
}
