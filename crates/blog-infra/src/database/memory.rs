//! In-memory post repository - lets the HTTP layer run without PostgreSQL.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use blog_core::domain::{Post, PostDraft};
use blog_core::error::RepoError;
use blog_core::ports::{BaseRepository, PostRepository};

#[derive(Default)]
struct Table {
    rows: BTreeMap<i32, Post>,
    last_id: i32,
}

/// In-memory repository using an ordered map behind an async RwLock.
///
/// Ids are assigned like a `SERIAL` column: increasing, never reused.
/// Note: Data is lost on process restart.
pub struct InMemoryPostRepository {
    table: RwLock<Table>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(Table::default()),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<Post, i32> for InMemoryPostRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<Post>, RepoError> {
        let table = self.table.read().await;
        Ok(table.rows.get(&id).cloned())
    }

    async fn delete(&self, id: i32) -> Result<(), RepoError> {
        let mut table = self.table.write().await;
        table
            .rows
            .remove(&id)
            .map(|_| ())
            .ok_or(RepoError::NotFound)
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn insert(&self, draft: PostDraft, at: DateTime<Utc>) -> Result<Post, RepoError> {
        let mut table = self.table.write().await;
        table.last_id = table
            .last_id
            .checked_add(1)
            .ok_or_else(|| RepoError::Query("post id sequence exhausted".to_string()))?;

        let post = draft.into_post(table.last_id, at);
        table.rows.insert(post.id, post.clone());
        Ok(post)
    }

    async fn update(
        &self,
        id: i32,
        draft: PostDraft,
        at: DateTime<Utc>,
    ) -> Result<Option<Post>, RepoError> {
        let mut table = self.table.write().await;
        let Some(existing) = table.rows.get_mut(&id) else {
            return Ok(None);
        };

        let mut updated = draft.into_post(id, at);
        updated.created_at = existing.created_at;
        *existing = updated.clone();
        Ok(Some(updated))
    }

    async fn list(&self, term: Option<&str>) -> Result<Vec<Post>, RepoError> {
        let table = self.table.read().await;
        Ok(table
            .rows
            .values()
            .filter(|post| term.is_none_or(|t| post.matches(t)))
            .cloned()
            .collect())
    }
}
