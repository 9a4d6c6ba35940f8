// src/domain/category/entity.rs
use crate::domain::category::value_objects::CategoryId;
use crate::domain::slug::Slug;

/// A book genre such as "Science Fiction".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub slug: Slug,
}

#[derive(Debug, Clone)]
pub struct NewCategory {
    pub name: String,
    pub slug: Slug,
}

/// Renaming never touches the slug.
#[derive(Debug, Clone)]
pub struct CategoryUpdate {
    pub id: CategoryId,
    pub name: String,
}
