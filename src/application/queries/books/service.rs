use std::sync::Arc;

use crate::domain::book::BookReadRepository;

pub struct BookQueryService {
    pub(super) read_repo: Arc<dyn BookReadRepository>,
}

impl BookQueryService {
    pub fn new(read_repo: Arc<dyn BookReadRepository>) -> Self {
        Self { read_repo }
    }
}
