use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::{Post, PostDraft};
use crate::error::RepoError;

/// Generic repository trait for lookups and removal by primary key.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Delete an entity by its ID.
    ///
    /// Fails with [`RepoError::NotFound`] when no row matched.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// Post repository. Every method issues a single statement.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, i32> {
    /// Insert a new post with a store-assigned id, stamping both timestamps with `at`.
    async fn insert(&self, draft: PostDraft, at: DateTime<Utc>) -> Result<Post, RepoError>;

    /// Replace the writable fields of post `id` and set `updated_at` to `at`.
    ///
    /// Returns `None` if no such post exists.
    async fn update(
        &self,
        id: i32,
        draft: PostDraft,
        at: DateTime<Utc>,
    ) -> Result<Option<Post>, RepoError>;

    /// List posts in storage order, optionally keeping only those matching `term`
    /// (see [`Post::matches`]).
    async fn list(&self, term: Option<&str>) -> Result<Vec<Post>, RepoError>;
}
