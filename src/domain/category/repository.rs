use crate::domain::category::entity::{Category, CategoryUpdate, NewCategory};
use crate::domain::category::value_objects::CategoryId;
use crate::domain::errors::DomainResult;
use crate::domain::slug::{Slug, SlugLookup};
use async_trait::async_trait;

#[async_trait]
pub trait CategoryRepository: SlugLookup {
    async fn insert(&self, category: NewCategory) -> DomainResult<Category>;
    async fn update(&self, update: CategoryUpdate) -> DomainResult<Category>;
    async fn delete(&self, id: CategoryId) -> DomainResult<()>;
    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>>;
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Category>>;
    /// Categories for `ids`, in no particular order; unknown ids are skipped.
    async fn find_many(&self, ids: &[CategoryId]) -> DomainResult<Vec<Category>>;
    async fn list(&self) -> DomainResult<Vec<Category>>;
}
