// src/application/commands/books/service.rs
use std::collections::BTreeSet;
use std::sync::Arc;

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::{
        book::{BookReadRepository, BookWriteRepository},
        category::{CategoryId, CategoryRepository},
        slug::UniqueSlugService,
    },
};

pub struct BookCommandService {
    pub(super) write_repo: Arc<dyn BookWriteRepository>,
    pub(super) read_repo: Arc<dyn BookReadRepository>,
    pub(super) category_repo: Arc<dyn CategoryRepository>,
    pub(super) slug_service: Arc<UniqueSlugService>,
    pub(super) clock: Arc<dyn Clock>,
}

impl BookCommandService {
    pub fn new(
        write_repo: Arc<dyn BookWriteRepository>,
        read_repo: Arc<dyn BookReadRepository>,
        category_repo: Arc<dyn CategoryRepository>,
        slug_service: Arc<UniqueSlugService>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            category_repo,
            slug_service,
            clock,
        }
    }

    /// Validate raw ids and make sure every referenced category exists.
    /// Duplicates collapse; the result is sorted by id.
    pub(super) async fn resolve_category_ids(
        &self,
        raw: Vec<i64>,
    ) -> ApplicationResult<Vec<CategoryId>> {
        let ids = raw
            .into_iter()
            .map(CategoryId::new)
            .collect::<Result<BTreeSet<_>, _>>()?
            .into_iter()
            .collect::<Vec<_>>();
        if ids.is_empty() {
            return Ok(ids);
        }

        let found = self.category_repo.find_many(&ids).await?;
        if found.len() != ids.len() {
            return Err(ApplicationError::not_found("category not found"));
        }
        Ok(ids)
    }
}
