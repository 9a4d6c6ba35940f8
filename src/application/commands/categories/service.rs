// src/application/commands/categories/service.rs
use std::sync::Arc;

use crate::domain::{category::CategoryRepository, slug::UniqueSlugService};

pub struct CategoryCommandService {
    pub(super) repo: Arc<dyn CategoryRepository>,
    pub(super) slug_service: Arc<UniqueSlugService>,
}

impl CategoryCommandService {
    pub fn new(repo: Arc<dyn CategoryRepository>, slug_service: Arc<UniqueSlugService>) -> Self {
        Self { repo, slug_service }
    }
}
