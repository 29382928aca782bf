//! Post handlers. Each one validates its input, then issues a single
//! repository call.

use actix_web::{HttpResponse, web};
use chrono::Utc;

use blog_core::DomainError;
use blog_core::domain::{Post, PostDraft};
use blog_core::error::RepoError;
use blog_shared::dto::{PostPayload, PostQuery, PostResponse};

use crate::middleware::error::AppResult;
use crate::state::AppState;

const ENTITY: &str = "Blog post";

fn not_found(id: i32) -> DomainError {
    DomainError::NotFound {
        entity_type: ENTITY,
        id,
    }
}

fn to_response(post: Post) -> PostResponse {
    PostResponse {
        id: post.id,
        title: post.title,
        content: post.content,
        category: post.category,
        tags: post.tags,
        created_at: post.created_at,
        updated_at: post.updated_at,
    }
}

/// POST /posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<PostPayload>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let draft = PostDraft::for_create(req.title, req.content, req.category, req.tags)?;

    let post = state.posts.insert(draft, Utc::now()).await?;
    tracing::info!(post_id = post.id, "Created post");

    Ok(HttpResponse::Created().json(to_response(post)))
}

/// PUT /posts/{id}
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    body: web::Json<PostPayload>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let req = body.into_inner();
    let draft = PostDraft::for_update(req.title, req.content, req.category, req.tags)?;

    let post = state
        .posts
        .update(id, draft, Utc::now())
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(post_id = id, "Updated post");

    Ok(HttpResponse::Ok().json(to_response(post)))
}

/// DELETE /posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    match state.posts.delete(id).await {
        Ok(()) => {
            tracing::info!(post_id = id, "Deleted post");
            Ok(HttpResponse::NoContent().finish())
        }
        Err(RepoError::NotFound) => Err(not_found(id).into()),
        Err(e) => Err(e.into()),
    }
}

/// GET /posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    let post = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or_else(|| not_found(id))?;

    Ok(HttpResponse::Ok().json(to_response(post)))
}

/// GET /posts?term=
pub async fn list_posts(
    state: web::Data<AppState>,
    query: web::Query<PostQuery>,
) -> AppResult<HttpResponse> {
    // An empty term lists everything.
    let term = query.into_inner().term.filter(|t| !t.is_empty());

    let posts = state.posts.list(term.as_deref()).await?;

    Ok(HttpResponse::Ok().json(posts.into_iter().map(to_response).collect::<Vec<_>>()))
}
