// tests/support/mocks/store.rs
//! In-memory repositories sharing one state, with the same uniqueness and
//! cascade rules as the Postgres schema.
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::NaiveDate;

use shelf_core::domain::book::{
    Book, BookId, BookReadRepository, BookUpdate, BookWriteRepository, NewBook,
};
use shelf_core::domain::category::{
    Category, CategoryId, CategoryRepository, CategoryUpdate, NewCategory,
};
use shelf_core::domain::errors::{DomainError, DomainResult};
use shelf_core::domain::favorite::{Favorite, FavoriteId, FavoriteRepository, NewFavorite};
use shelf_core::domain::slug::{Slug, SlugLookup};
use shelf_core::domain::user::{NewUser, TokenDigest, User, UserId, UserRepository};

#[derive(Clone)]
struct StoredBook {
    title: String,
    author: String,
    description: String,
    category_ids: Vec<CategoryId>,
    date_added: NaiveDate,
    image: Option<String>,
    url: String,
    slug: Slug,
}

#[derive(Default)]
struct State {
    next_id: i64,
    users: BTreeMap<i64, User>,
    categories: BTreeMap<i64, Category>,
    books: BTreeMap<i64, StoredBook>,
    favorites: BTreeMap<i64, Favorite>,
}

impl State {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn materialize(&self, id: i64, stored: &StoredBook) -> Book {
        let mut categories: Vec<Category> = stored
            .category_ids
            .iter()
            .filter_map(|cid| self.categories.get(&i64::from(*cid)).cloned())
            .collect();
        categories.sort_by_key(|category| category.id);

        Book {
            id: BookId(id),
            title: stored.title.clone(),
            author: stored.author.clone(),
            description: stored.description.clone(),
            categories,
            date_added: stored.date_added,
            image: stored.image.clone(),
            url: stored.url.clone(),
            slug: stored.slug.clone(),
        }
    }

    fn books_newest_first(&self) -> Vec<Book> {
        let mut books: Vec<Book> = self
            .books
            .iter()
            .map(|(id, stored)| self.materialize(*id, stored))
            .collect();
        books.sort_by(Book::newest_first);
        books
    }

    fn insert_book(&mut self, book: NewBook) -> DomainResult<Book> {
        if self.books.values().any(|b| b.slug == book.slug) {
            return Err(DomainError::SlugCollision(format!(
                "books_slug_key: {}",
                book.slug
            )));
        }
        if let Some(missing) = book
            .category_ids
            .iter()
            .find(|cid| !self.categories.contains_key(&i64::from(**cid)))
        {
            return Err(DomainError::NotFound(format!(
                "category not found: {}",
                i64::from(*missing)
            )));
        }

        let id = self.next_id();
        let mut category_ids = book.category_ids;
        category_ids.sort();
        category_ids.dedup();
        let stored = StoredBook {
            title: book.title,
            author: book.author,
            description: book.description,
            category_ids,
            date_added: book.date_added,
            image: book.image,
            url: book.url,
            slug: book.slug,
        };
        let created = self.materialize(id, &stored);
        self.books.insert(id, stored);
        Ok(created)
    }
}

/// Handle on the shared state. Repositories are cheap views over it.
#[derive(Clone, Default)]
pub struct MemoryStore {
    state: Arc<Mutex<State>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().expect("memory store poisoned")
    }

    pub fn users(&self) -> MemoryUserRepo {
        MemoryUserRepo {
            store: self.clone(),
        }
    }

    pub fn categories(&self) -> MemoryCategoryRepo {
        MemoryCategoryRepo {
            store: self.clone(),
        }
    }

    pub fn books(&self) -> MemoryBookRepo {
        MemoryBookRepo {
            store: self.clone(),
            steal_next_inserts: Arc::new(AtomicU32::new(0)),
        }
    }

    pub fn favorites(&self) -> MemoryFavoriteRepo {
        MemoryFavoriteRepo {
            store: self.clone(),
        }
    }

    /// Insert a book directly, bypassing slug assignment.
    pub fn seed_book(&self, title: &str, slug: &str, date_added: NaiveDate) -> Book {
        self.lock()
            .insert_book(NewBook {
                title: title.into(),
                author: "Seed Author".into(),
                description: String::new(),
                category_ids: Vec::new(),
                date_added,
                image: None,
                url: "https://example.com/seed".into(),
                slug: Slug::new(slug),
            })
            .expect("seed slug must be free")
    }

    pub fn book_slugs(&self) -> Vec<String> {
        self.lock()
            .books
            .values()
            .map(|b| b.slug.as_str().to_string())
            .collect()
    }

    pub fn favorite_count(&self) -> usize {
        self.lock().favorites.len()
    }

    /// Favorite records pointing at `book_id`, duplicates included.
    pub fn favorite_count_for_book(&self, book_id: i64) -> usize {
        self.lock()
            .favorites
            .values()
            .filter(|f| i64::from(f.book_id) == book_id)
            .count()
    }

    pub fn user_count(&self) -> usize {
        self.lock().users.len()
    }

    pub fn stored_token_digests(&self) -> Vec<String> {
        self.lock()
            .users
            .values()
            .map(|u| u.token_digest.as_str().to_string())
            .collect()
    }
}

/* -------------------------------- users -------------------------------- */

#[derive(Clone)]
pub struct MemoryUserRepo {
    store: MemoryStore,
}

#[async_trait]
impl UserRepository for MemoryUserRepo {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let mut state = self.store.lock();
        if state
            .users
            .values()
            .any(|u| u.username.as_str() == new_user.username.as_str())
        {
            return Err(DomainError::Conflict("username already exists".into()));
        }
        if state
            .users
            .values()
            .any(|u| u.token_digest == new_user.token_digest)
        {
            return Err(DomainError::Conflict(
                "token digest already registered".into(),
            ));
        }

        let id = state.next_id();
        let user = User {
            id: UserId(id),
            username: new_user.username,
            token_digest: new_user.token_digest,
            created_at: new_user.created_at,
        };
        state.users.insert(id, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        Ok(self.store.lock().users.get(&i64::from(id)).cloned())
    }

    async fn find_by_token_digest(&self, digest: &TokenDigest) -> DomainResult<Option<User>> {
        Ok(self
            .store
            .lock()
            .users
            .values()
            .find(|u| &u.token_digest == digest)
            .cloned())
    }

    async fn delete(&self, id: UserId) -> DomainResult<()> {
        let mut state = self.store.lock();
        if state.users.remove(&i64::from(id)).is_none() {
            return Err(DomainError::NotFound("user not found".into()));
        }
        state.favorites.retain(|_, f| f.user_id != id);
        Ok(())
    }
}

/* ------------------------------ categories ------------------------------ */

#[derive(Clone)]
pub struct MemoryCategoryRepo {
    store: MemoryStore,
}

#[async_trait]
impl SlugLookup for MemoryCategoryRepo {
    async fn slug_exists(&self, slug: &Slug) -> DomainResult<bool> {
        Ok(self
            .store
            .lock()
            .categories
            .values()
            .any(|c| &c.slug == slug))
    }
}

#[async_trait]
impl CategoryRepository for MemoryCategoryRepo {
    async fn insert(&self, category: NewCategory) -> DomainResult<Category> {
        let mut state = self.store.lock();
        if state.categories.values().any(|c| c.slug == category.slug) {
            return Err(DomainError::SlugCollision(format!(
                "categories_slug_key: {}",
                category.slug
            )));
        }
        let id = state.next_id();
        let created = Category {
            id: CategoryId(id),
            name: category.name,
            slug: category.slug,
        };
        state.categories.insert(id, created.clone());
        Ok(created)
    }

    async fn update(&self, update: CategoryUpdate) -> DomainResult<Category> {
        let mut state = self.store.lock();
        let category = state
            .categories
            .get_mut(&i64::from(update.id))
            .ok_or_else(|| DomainError::NotFound("category not found".into()))?;
        category.name = update.name;
        Ok(category.clone())
    }

    async fn delete(&self, id: CategoryId) -> DomainResult<()> {
        let mut state = self.store.lock();
        if state.categories.remove(&i64::from(id)).is_none() {
            return Err(DomainError::NotFound("category not found".into()));
        }
        for book in state.books.values_mut() {
            book.category_ids.retain(|cid| *cid != id);
        }
        Ok(())
    }

    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>> {
        Ok(self.store.lock().categories.get(&i64::from(id)).cloned())
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Category>> {
        Ok(self
            .store
            .lock()
            .categories
            .values()
            .find(|c| &c.slug == slug)
            .cloned())
    }

    async fn find_many(&self, ids: &[CategoryId]) -> DomainResult<Vec<Category>> {
        let state = self.store.lock();
        Ok(ids
            .iter()
            .filter_map(|id| state.categories.get(&i64::from(*id)).cloned())
            .collect())
    }

    async fn list(&self) -> DomainResult<Vec<Category>> {
        let mut categories: Vec<Category> =
            self.store.lock().categories.values().cloned().collect();
        categories.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        Ok(categories)
    }
}

/* -------------------------------- books -------------------------------- */

/// Books repository. `steal_next_inserts` simulates a concurrent writer:
/// while positive, each insert first lets another book take the requested
/// slug and then reports the collision.
#[derive(Clone)]
pub struct MemoryBookRepo {
    store: MemoryStore,
    steal_next_inserts: Arc<AtomicU32>,
}

impl MemoryBookRepo {
    pub fn steal_next_inserts(&self, count: u32) {
        self.steal_next_inserts.store(count, Ordering::SeqCst);
    }
}

#[async_trait]
impl SlugLookup for MemoryBookRepo {
    async fn slug_exists(&self, slug: &Slug) -> DomainResult<bool> {
        Ok(self.store.lock().books.values().any(|b| &b.slug == slug))
    }
}

#[async_trait]
impl BookReadRepository for MemoryBookRepo {
    async fn find_by_id(&self, id: BookId) -> DomainResult<Option<Book>> {
        let state = self.store.lock();
        Ok(state
            .books
            .get(&i64::from(id))
            .map(|stored| state.materialize(i64::from(id), stored)))
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Book>> {
        let state = self.store.lock();
        Ok(state
            .books
            .iter()
            .find(|(_, b)| &b.slug == slug)
            .map(|(id, stored)| state.materialize(*id, stored)))
    }

    async fn list_page(&self, page: u32, page_size: u32) -> DomainResult<(Vec<Book>, u64)> {
        let books = self.store.lock().books_newest_first();
        let total = books.len() as u64;
        let skip = (page.max(1) - 1) as usize * page_size as usize;
        Ok((
            books.into_iter().skip(skip).take(page_size as usize).collect(),
            total,
        ))
    }
}

#[async_trait]
impl BookWriteRepository for MemoryBookRepo {
    async fn insert(&self, book: NewBook) -> DomainResult<Book> {
        let mut state = self.store.lock();
        let steal = self
            .steal_next_inserts
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if steal {
            let mut rival = book.clone();
            rival.title = format!("{} (concurrent)", book.title);
            rival.category_ids.clear();
            state.insert_book(rival)?;
        }
        state.insert_book(book)
    }

    async fn update(&self, update: BookUpdate) -> DomainResult<Book> {
        let mut state = self.store.lock();
        let id = i64::from(update.id);
        if let Some(ids) = &update.category_ids {
            if ids
                .iter()
                .any(|cid| !state.categories.contains_key(&i64::from(*cid)))
            {
                return Err(DomainError::NotFound("category not found".into()));
            }
        }

        let stored = state
            .books
            .get_mut(&id)
            .ok_or_else(|| DomainError::NotFound("book not found".into()))?;
        if let Some(title) = update.title {
            stored.title = title;
        }
        if let Some(author) = update.author {
            stored.author = author;
        }
        if let Some(description) = update.description {
            stored.description = description;
        }
        if let Some(url) = update.url {
            stored.url = url;
        }
        if let Some(image) = update.image {
            stored.image = image;
        }
        if let Some(category_ids) = update.category_ids {
            stored.category_ids = category_ids;
        }

        let stored = stored.clone();
        Ok(state.materialize(id, &stored))
    }

    async fn delete(&self, id: BookId) -> DomainResult<()> {
        let mut state = self.store.lock();
        if state.books.remove(&i64::from(id)).is_none() {
            return Err(DomainError::NotFound("book not found".into()));
        }
        state.favorites.retain(|_, f| f.book_id != id);
        Ok(())
    }
}

/* ------------------------------- favorites ------------------------------- */

#[derive(Clone)]
pub struct MemoryFavoriteRepo {
    store: MemoryStore,
}

#[async_trait]
impl FavoriteRepository for MemoryFavoriteRepo {
    async fn insert(&self, favorite: NewFavorite) -> DomainResult<Favorite> {
        let mut state = self.store.lock();
        if !state.users.contains_key(&i64::from(favorite.user_id)) {
            return Err(DomainError::NotFound("user not found".into()));
        }
        if !state.books.contains_key(&i64::from(favorite.book_id)) {
            return Err(DomainError::NotFound("book not found".into()));
        }
        let id = state.next_id();
        let created = Favorite {
            id: FavoriteId(id),
            user_id: favorite.user_id,
            book_id: favorite.book_id,
        };
        state.favorites.insert(id, created.clone());
        Ok(created)
    }

    async fn delete_pair(&self, user_id: UserId, book_id: BookId) -> DomainResult<u64> {
        let mut state = self.store.lock();
        let before = state.favorites.len();
        state
            .favorites
            .retain(|_, f| !(f.user_id == user_id && f.book_id == book_id));
        Ok((before - state.favorites.len()) as u64)
    }

    async fn list_books_for_user(&self, user_id: UserId) -> DomainResult<Vec<Book>> {
        let state = self.store.lock();
        let favorited: Vec<BookId> = state
            .favorites
            .values()
            .filter(|f| f.user_id == user_id)
            .map(|f| f.book_id)
            .collect();
        Ok(state
            .books_newest_first()
            .into_iter()
            .filter(|book| favorited.contains(&book.id))
            .collect())
    }
}
