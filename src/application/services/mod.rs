// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{
            books::BookCommandService, categories::CategoryCommandService,
            favorites::FavoriteCommandService, users::UserCommandService,
        },
        dto::AuthenticatedUser,
        ports::{security::TokenIssuer, time::Clock, util::SlugGenerator},
        queries::{
            books::BookQueryService, categories::CategoryQueryService,
            favorites::FavoriteQueryService, users::UserQueryService,
        },
        ApplicationResult,
    },
    domain::{
        book::{BookReadRepository, BookWriteRepository},
        category::CategoryRepository,
        favorite::FavoriteRepository,
        slug::UniqueSlugService,
        user::UserRepository,
    },
};

pub struct ApplicationServices {
    pub book_commands: Arc<BookCommandService>,
    pub book_queries: Arc<BookQueryService>,
    pub category_commands: Arc<CategoryCommandService>,
    pub category_queries: Arc<CategoryQueryService>,
    pub favorite_commands: Arc<FavoriteCommandService>,
    pub favorite_queries: Arc<FavoriteQueryService>,
    pub user_commands: Arc<UserCommandService>,
    pub user_queries: Arc<UserQueryService>,
}

impl ApplicationServices {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        category_repo: Arc<dyn CategoryRepository>,
        book_write_repo: Arc<dyn BookWriteRepository>,
        book_read_repo: Arc<dyn BookReadRepository>,
        favorite_repo: Arc<dyn FavoriteRepository>,
        token_issuer: Arc<dyn TokenIssuer>,
        clock: Arc<dyn Clock>,
        slugger: Arc<dyn SlugGenerator>,
        slug_insert_attempts: u32,
    ) -> Self {
        let slug_service = Arc::new(UniqueSlugService::new(
            Arc::clone(&slugger),
            slug_insert_attempts,
        ));

        let book_commands = Arc::new(BookCommandService::new(
            Arc::clone(&book_write_repo),
            Arc::clone(&book_read_repo),
            Arc::clone(&category_repo),
            Arc::clone(&slug_service),
            Arc::clone(&clock),
        ));
        let book_queries = Arc::new(BookQueryService::new(Arc::clone(&book_read_repo)));

        let category_commands = Arc::new(CategoryCommandService::new(
            Arc::clone(&category_repo),
            Arc::clone(&slug_service),
        ));
        let category_queries = Arc::new(CategoryQueryService::new(Arc::clone(&category_repo)));

        let favorite_commands = Arc::new(FavoriteCommandService::new(
            Arc::clone(&favorite_repo),
            Arc::clone(&book_read_repo),
        ));
        let favorite_queries = Arc::new(FavoriteQueryService::new(Arc::clone(&favorite_repo)));

        let user_commands = Arc::new(UserCommandService::new(
            Arc::clone(&user_repo),
            Arc::clone(&token_issuer),
            Arc::clone(&clock),
        ));
        let user_queries = Arc::new(UserQueryService::new(
            Arc::clone(&user_repo),
            Arc::clone(&token_issuer),
        ));

        Self {
            book_commands,
            book_queries,
            category_commands,
            category_queries,
            favorite_commands,
            favorite_queries,
            user_commands,
            user_queries,
        }
    }

    /// Resolve a raw bearer token so presentation-layer extractors can delegate to
    /// the application services.
    pub async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        self.user_queries.authenticate(token).await
    }
}
