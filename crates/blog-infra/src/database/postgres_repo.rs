//! PostgreSQL repository implementations.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::sea_query::Expr;
use sea_orm::{Condition, DbErr, EntityTrait, QueryFilter};

use blog_core::domain::{Post, PostDraft};
use blog_core::error::RepoError;
use blog_core::ports::PostRepository;

use super::entity::post::{self, Entity as PostEntity};
use super::postgres_base::{PostgresBaseRepository, repo_error};

/// PostgreSQL post repository.
pub type PostgresPostRepository = PostgresBaseRepository<PostEntity>;

/// PostgreSQL's default `LIKE`/`ILIKE` escape character.
const LIKE_ESCAPE: char = '\\';

/// `%term%` with LIKE metacharacters escaped so the term matches literally.
///
/// Case is left alone: `ILIKE` folds the pattern and the column the same way.
fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for ch in term.chars() {
        if matches!(ch, '%' | '_' | LIKE_ESCAPE) {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

/// `title ILIKE p OR content ILIKE p OR category ILIKE p`.
fn search_condition(term: &str) -> Condition {
    let pattern = contains_pattern(term);
    [post::Column::Title, post::Column::Content, post::Column::Category]
        .into_iter()
        .fold(Condition::any(), |cond, column| {
            cond.add(Expr::col(column).ilike(pattern.as_str()))
        })
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn insert(&self, draft: PostDraft, at: DateTime<Utc>) -> Result<Post, RepoError> {
        let model = PostEntity::insert(post::ActiveModel::for_insert(&draft, at))
            .exec_with_returning(&self.db)
            .await
            .map_err(repo_error)?;

        tracing::debug!(post_id = model.id, "Inserted post");
        Ok(model.into())
    }

    async fn update(
        &self,
        id: i32,
        draft: PostDraft,
        at: DateTime<Utc>,
    ) -> Result<Option<Post>, RepoError> {
        match PostEntity::update(post::ActiveModel::for_update(id, &draft, at))
            .exec(&self.db)
            .await
        {
            Ok(model) => Ok(Some(model.into())),
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(e) => Err(repo_error(e)),
        }
    }

    async fn list(&self, term: Option<&str>) -> Result<Vec<Post>, RepoError> {
        let mut query = PostEntity::find();
        if let Some(term) = term {
            tracing::debug!(term, "Searching posts");
            query = query.filter(search_condition(term));
        }

        let result = query.all(&self.db).await.map_err(repo_error)?;

        Ok(result.into_iter().map(Into::into).collect())
    }
}
