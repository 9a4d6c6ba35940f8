// src/infrastructure/repositories/postgres_book.rs
use std::collections::HashMap;

use super::map_sqlx;
use crate::domain::book::{
    Book, BookId, BookReadRepository, BookUpdate, BookWriteRepository, NewBook,
};
use crate::domain::category::{Category, CategoryId};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::{Slug, SlugLookup};
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder, Transaction};

pub(super) const BOOK_COLUMNS: &str =
    "id, title, author, description, date_added, image, url, slug";

#[derive(Clone)]
pub struct PostgresBookWriteRepository {
    pool: PgPool,
}

impl PostgresBookWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresBookReadRepository {
    pool: PgPool,
}

impl PostgresBookReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
pub(super) struct BookRow {
    id: i64,
    title: String,
    author: String,
    description: String,
    date_added: NaiveDate,
    image: Option<String>,
    url: String,
    slug: String,
}

impl BookRow {
    fn into_book(self, categories: Vec<Category>) -> DomainResult<Book> {
        Ok(Book {
            id: BookId::new(self.id)?,
            title: self.title,
            author: self.author,
            description: self.description,
            categories,
            date_added: self.date_added,
            image: self.image,
            url: self.url,
            slug: Slug::new(self.slug),
        })
    }
}

#[derive(Debug, FromRow)]
struct BookCategoryRow {
    book_id: i64,
    id: i64,
    name: String,
    slug: String,
}

/// Attach categories to book rows with one query for the whole batch.
/// Row order is preserved.
pub(super) async fn hydrate_books(pool: &PgPool, rows: Vec<BookRow>) -> DomainResult<Vec<Book>> {
    if rows.is_empty() {
        return Ok(Vec::new());
    }

    let ids: Vec<i64> = rows.iter().map(|row| row.id).collect();
    let links = sqlx::query_as::<_, BookCategoryRow>(
        "SELECT bc.book_id, c.id, c.name, c.slug
         FROM book_categories bc
         JOIN categories c ON c.id = bc.category_id
         WHERE bc.book_id = ANY($1)
         ORDER BY bc.book_id, c.id",
    )
    .bind(ids)
    .fetch_all(pool)
    .await
    .map_err(map_sqlx)?;

    let mut by_book: HashMap<i64, Vec<Category>> = HashMap::new();
    for link in links {
        by_book.entry(link.book_id).or_default().push(Category {
            id: CategoryId::new(link.id)?,
            name: link.name,
            slug: Slug::new(link.slug),
        });
    }

    rows.into_iter()
        .map(|row| {
            let categories = by_book.remove(&row.id).unwrap_or_default();
            row.into_book(categories)
        })
        .collect()
}

async fn link_categories(
    tx: &mut Transaction<'_, Postgres>,
    book_id: i64,
    category_ids: &[CategoryId],
) -> DomainResult<()> {
    if category_ids.is_empty() {
        return Ok(());
    }
    let raw: Vec<i64> = category_ids.iter().copied().map(i64::from).collect();
    sqlx::query(
        "INSERT INTO book_categories (book_id, category_id)
         SELECT $1, UNNEST($2::BIGINT[])
         ON CONFLICT DO NOTHING",
    )
    .bind(book_id)
    .bind(raw)
    .execute(&mut **tx)
    .await
    .map_err(map_sqlx)?;
    Ok(())
}

impl PostgresBookReadRepository {
    async fn hydrate_one(&self, row: Option<BookRow>) -> DomainResult<Option<Book>> {
        match row {
            Some(row) => Ok(hydrate_books(&self.pool, vec![row]).await?.pop()),
            None => Ok(None),
        }
    }
}

#[async_trait]
impl SlugLookup for PostgresBookReadRepository {
    async fn slug_exists(&self, slug: &Slug) -> DomainResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM books WHERE slug = $1)")
            .bind(slug.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)
    }
}

#[async_trait]
impl BookReadRepository for PostgresBookReadRepository {
    async fn find_by_id(&self, id: BookId) -> DomainResult<Option<Book>> {
        let row = sqlx::query_as::<_, BookRow>(&format!(
            "SELECT {BOOK_COLUMNS} FROM books WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        self.hydrate_one(row).await
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Book>> {
        let row = sqlx::query_as::<_, BookRow>(&format!(
            "SELECT {BOOK_COLUMNS} FROM books WHERE slug = $1"
        ))
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        self.hydrate_one(row).await
    }

    async fn list_page(&self, page: u32, page_size: u32) -> DomainResult<(Vec<Book>, u64)> {
        let page_size = page_size.clamp(1, 100);
        let offset = i64::from(page.max(1) - 1) * i64::from(page_size);

        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(1) FROM books")
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let rows = sqlx::query_as::<_, BookRow>(&format!(
            "SELECT {BOOK_COLUMNS} FROM books
             ORDER BY date_added DESC, id DESC
             LIMIT $1 OFFSET $2"
        ))
        .bind(i64::from(page_size))
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let books = hydrate_books(&self.pool, rows).await?;
        Ok((books, total.max(0) as u64))
    }
}

#[async_trait]
impl BookWriteRepository for PostgresBookWriteRepository {
    async fn insert(&self, book: NewBook) -> DomainResult<Book> {
        let NewBook {
            title,
            author,
            description,
            category_ids,
            date_added,
            image,
            url,
            slug,
        } = book;

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;
        let row = sqlx::query_as::<_, BookRow>(&format!(
            "INSERT INTO books (title, author, description, date_added, image, url, slug)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {BOOK_COLUMNS}"
        ))
        .bind(title)
        .bind(author)
        .bind(description)
        .bind(date_added)
        .bind(image)
        .bind(url)
        .bind(slug.as_str())
        .fetch_one(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        link_categories(&mut tx, row.id, &category_ids).await?;
        tx.commit().await.map_err(map_sqlx)?;

        hydrate_books(&self.pool, vec![row])
            .await?
            .pop()
            .ok_or_else(|| DomainError::Persistence("inserted book vanished".into()))
    }

    async fn update(&self, update: BookUpdate) -> DomainResult<Book> {
        let BookUpdate {
            id,
            title,
            author,
            description,
            url,
            image,
            category_ids,
        } = update;

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE books SET id = id");
        if let Some(title) = title {
            builder.push(", title = ");
            builder.push_bind(title);
        }
        if let Some(author) = author {
            builder.push(", author = ");
            builder.push_bind(author);
        }
        if let Some(description) = description {
            builder.push(", description = ");
            builder.push_bind(description);
        }
        if let Some(url) = url {
            builder.push(", url = ");
            builder.push_bind(url);
        }
        if let Some(image) = image {
            builder.push(", image = ");
            builder.push_bind(image);
        }
        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(format!(" RETURNING {BOOK_COLUMNS}"));

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;
        let row = builder
            .build_query_as::<BookRow>()
            .fetch_optional(&mut *tx)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("book not found".into()))?;

        if let Some(category_ids) = category_ids {
            sqlx::query("DELETE FROM book_categories WHERE book_id = $1")
                .bind(row.id)
                .execute(&mut *tx)
                .await
                .map_err(map_sqlx)?;
            link_categories(&mut tx, row.id, &category_ids).await?;
        }
        tx.commit().await.map_err(map_sqlx)?;

        hydrate_books(&self.pool, vec![row])
            .await?
            .pop()
            .ok_or_else(|| DomainError::NotFound("book not found".into()))
    }

    async fn delete(&self, id: BookId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("book not found".into()));
        }
        Ok(())
    }
}
