// src/domain/book/entity.rs
use std::cmp::Ordering;

use crate::domain::book::value_objects::BookId;
use crate::domain::category::{Category, CategoryId};
use crate::domain::slug::Slug;
use chrono::NaiveDate;

/// Canonical URL of every book. Books resolve to the index listing rather
/// than to their own detail route.
pub const BOOK_INDEX_PATH: &str = "/api/v1/books";

const CATEGORY_SUMMARY_LIMIT: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub description: String,
    pub categories: Vec<Category>,
    pub date_added: NaiveDate,
    pub image: Option<String>,
    pub url: String,
    pub slug: Slug,
}

impl Book {
    pub fn absolute_url(&self) -> &'static str {
        BOOK_INDEX_PATH
    }

    /// Names of the first three categories, comma separated.
    pub fn category_summary(&self) -> String {
        self.categories
            .iter()
            .take(CATEGORY_SUMMARY_LIMIT)
            .map(|category| category.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Listing order: most recently added first, later inserts first on the same day.
    pub fn newest_first(a: &Book, b: &Book) -> Ordering {
        b.date_added.cmp(&a.date_added).then_with(|| b.id.cmp(&a.id))
    }
}

#[derive(Debug, Clone)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub description: String,
    pub category_ids: Vec<CategoryId>,
    pub date_added: NaiveDate,
    pub image: Option<String>,
    pub url: String,
    pub slug: Slug,
}

/// Partial update. `slug` and `date_added` are fixed at creation and have
/// no counterpart here.
#[derive(Debug, Clone)]
pub struct BookUpdate {
    pub id: BookId,
    pub title: Option<String>,
    pub author: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub image: Option<Option<String>>,
    pub category_ids: Option<Vec<CategoryId>>,
}

impl BookUpdate {
    pub fn new(id: BookId) -> Self {
        Self {
            id,
            title: None,
            author: None,
            description: None,
            url: None,
            image: None,
            category_ids: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_image(mut self, image: Option<String>) -> Self {
        self.image = Some(image);
        self
    }

    pub fn with_category_ids(mut self, category_ids: Vec<CategoryId>) -> Self {
        self.category_ids = Some(category_ids);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.author.is_none()
            && self.description.is_none()
            && self.url.is_none()
            && self.image.is_none()
            && self.category_ids.is_none()
    }
}
