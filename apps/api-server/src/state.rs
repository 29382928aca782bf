//! Application state - shared across all handlers.

use std::sync::Arc;

use blog_core::ports::PostRepository;
use blog_infra::PostgresPostRepository;
use sea_orm::DbConn;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
}

impl AppState {
    /// Build the application state on top of an open connection pool.
    pub fn new(db: DbConn) -> Self {
        let posts = Arc::new(PostgresPostRepository::new(db));

        tracing::info!("Application state initialized");

        Self::with_repository(posts)
    }

    /// Build the application state around any post repository.
    pub fn with_repository(posts: Arc<dyn PostRepository>) -> Self {
        Self { posts }
    }
}
